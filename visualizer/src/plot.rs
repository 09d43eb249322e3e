//! Data-to-screen mapping and axis ticks for the waveform chart.

use wavecore::waveform::WaveSet;

/// Fraction of the value span added above and below the traces.
const Y_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 24.0,
            top: 44.0,
            bottom: 36.0,
        }
    }
}

/// Data-space extent shown by the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    pub fn from_wave_set(set: &WaveSet) -> Self {
        let (x_min, x_max) = match (set.time.first(), set.time.last()) {
            (Some(first), Some(last)) => widen_flat(first, last),
            _ => (0.0, 1.0),
        };
        let (y_min, y_max) = match set.value_bounds() {
            Some((min, max)) => {
                let (min, max) = widen_flat(min, max);
                let pad = (max - min) * Y_PADDING;
                (min - pad, max + pad)
            }
            None => (-1.0, 1.0),
        };
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn widen_flat(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        (min - 1.0, max + 1.0)
    }
}

/// Screen rectangle that the traces are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: (width - margins.left - margins.right).max(1.0),
            height: (height - margins.top - margins.bottom).max(1.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Maps a data point to screen coordinates; screen y grows downward.
    pub fn project(&self, bounds: &DataBounds, x: f64, y: f64) -> (f32, f32) {
        let x_frac = (x - bounds.x_min) / (bounds.x_max - bounds.x_min);
        let y_frac = (y - bounds.y_min) / (bounds.y_max - bounds.y_min);
        (
            self.left + (x_frac as f32) * self.width,
            self.top + (1.0 - y_frac as f32) * self.height,
        )
    }
}

/// Rounds a raw spacing up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions at a nice spacing covering `[min, max]`, about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if target == 0 || !(max > min) {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let tolerance = step * 1e-9;
    let first = ((min - tolerance) / step).ceil() as i64;

    let mut ticks = Vec::new();
    for k in first.. {
        let value = k as f64 * step;
        if value > max + tolerance || ticks.len() > 4 * target + 1 {
            break;
        }
        ticks.push(if value.abs() < tolerance { 0.0 } else { value });
    }
    ticks
}

/// Formats a tick with just enough decimals for its spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil().max(0.0) as usize
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::prelude::WaveConfig;
    use wavecore::waveform::build_wave_set;

    #[test]
    fn bounds_cover_axis_and_pad_amplitude() {
        let set = build_wave_set(&WaveConfig::default()).unwrap();
        let bounds = DataBounds::from_wave_set(&set);
        assert_eq!(bounds.x_min, 0.0);
        assert!((bounds.x_max - 99.9).abs() < 1e-9);
        assert!((bounds.y_min + 1.1).abs() < 1e-9);
        assert!((bounds.y_max - 1.1).abs() < 1e-9);
    }

    #[test]
    fn flat_span_is_widened() {
        assert_eq!(widen_flat(2.0, 2.0), (1.0, 3.0));
        assert_eq!(widen_flat(0.0, 4.0), (0.0, 4.0));
    }

    #[test]
    fn projection_maps_corners() {
        let area = PlotArea::new(400.0, 300.0, Margins::default());
        let bounds = DataBounds {
            x_min: 0.0,
            x_max: 10.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        assert_eq!(area.project(&bounds, 0.0, -1.0), (area.left, area.bottom()));
        assert_eq!(area.project(&bounds, 10.0, 1.0), (area.right(), area.top));
        let (_, mid_y) = area.project(&bounds, 5.0, 0.0);
        assert!((mid_y - (area.top + area.height / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn plot_area_never_collapses() {
        let area = PlotArea::new(10.0, 10.0, Margins::default());
        assert_eq!(area.width, 1.0);
        assert_eq!(area.height, 1.0);
    }

    #[test]
    fn nice_steps_use_one_two_five() {
        assert_eq!(nice_step(9.99), 10.0);
        assert!((nice_step(0.44) - 0.5).abs() < 1e-12);
        assert!((nice_step(0.15) - 0.2).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn time_axis_ticks_every_ten_seconds() {
        let ticks = nice_ticks(0.0, 99.9, 10);
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[9] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn amplitude_ticks_are_symmetric() {
        let ticks = nice_ticks(-1.1, 1.1, 5);
        let expected = [-1.0, -0.5, 0.0, 0.5, 1.0];
        assert_eq!(ticks.len(), expected.len());
        for (tick, want) in ticks.iter().zip(expected.iter()) {
            assert!((tick - want).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_tick_requests_are_empty() {
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn tick_labels_follow_spacing() {
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(-0.5, 0.5), "-0.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
