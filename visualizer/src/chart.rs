use crate::plot::{format_tick, nice_ticks, nice_step, DataBounds, Margins, PlotArea};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, Text},
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme,
};
use std::sync::Arc;
use wavecore::prelude::DEMO_TITLE;
use wavecore::waveform::{Series, TraceColor, WaveSet};

const X_TICK_TARGET: usize = 10;
const Y_TICK_TARGET: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Cosine,
    Sine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceVisibility {
    pub cosine: bool,
    pub sine: bool,
}

impl Default for TraceVisibility {
    fn default() -> Self {
        Self {
            cosine: true,
            sine: true,
        }
    }
}

impl TraceVisibility {
    pub fn toggle(&mut self, trace: Trace) {
        match trace {
            Trace::Cosine => self.cosine = !self.cosine,
            Trace::Sine => self.sine = !self.sine,
        }
    }

    pub fn is_visible(&self, trace: Trace) -> bool {
        match trace {
            Trace::Cosine => self.cosine,
            Trace::Sine => self.sine,
        }
    }
}

pub fn trace_color(color: TraceColor) -> Color {
    match color {
        TraceColor::Blue => Color::from_rgb(0.12, 0.3, 0.85),
        TraceColor::Red => Color::from_rgb(0.86, 0.16, 0.16),
    }
}

/// Visible traces in legend order.
pub fn visible_series(set: &WaveSet, visibility: TraceVisibility) -> Vec<&Series> {
    let mut series = Vec::with_capacity(2);
    if visibility.is_visible(Trace::Cosine) {
        series.push(&set.cosine);
    }
    if visibility.is_visible(Trace::Sine) {
        series.push(&set.sine);
    }
    series
}

/// Canvas program drawing both traces with grid, title and legend.
#[derive(Clone)]
pub struct WaveChart {
    wave_set: Arc<WaveSet>,
    visibility: TraceVisibility,
}

impl WaveChart {
    pub fn new(wave_set: Arc<WaveSet>, visibility: TraceVisibility) -> Self {
        Self {
            wave_set,
            visibility,
        }
    }

    fn draw_grid(&self, frame: &mut Frame, area: &PlotArea, bounds: &DataBounds) {
        let grid = Stroke::default()
            .with_width(1.0)
            .with_color(Color::from_rgb(0.88, 0.88, 0.9));
        let label_color = Color::from_rgb(0.3, 0.3, 0.35);

        let x_step = nice_step((bounds.x_max - bounds.x_min) / X_TICK_TARGET as f64);
        for tick in nice_ticks(bounds.x_min, bounds.x_max, X_TICK_TARGET) {
            let (x, _) = area.project(bounds, tick, bounds.y_min);
            let line = Path::line(Point::new(x, area.top), Point::new(x, area.bottom()));
            frame.stroke(&line, grid);
            frame.fill_text(Text {
                content: format_tick(tick, x_step),
                position: Point::new(x - 6.0, area.bottom() + 8.0),
                color: label_color,
                size: Pixels(12.0),
                ..Text::default()
            });
        }

        let y_step = nice_step((bounds.y_max - bounds.y_min) / Y_TICK_TARGET as f64);
        for tick in nice_ticks(bounds.y_min, bounds.y_max, Y_TICK_TARGET) {
            let (_, y) = area.project(bounds, bounds.x_min, tick);
            let line = Path::line(Point::new(area.left, y), Point::new(area.right(), y));
            frame.stroke(&line, grid);
            frame.fill_text(Text {
                content: format_tick(tick, y_step),
                position: Point::new(area.left - 40.0, y - 7.0),
                color: label_color,
                size: Pixels(12.0),
                ..Text::default()
            });
        }
    }

    fn draw_series(&self, frame: &mut Frame, area: &PlotArea, bounds: &DataBounds, series: &Series) {
        if series.len() < 2 {
            return;
        }
        let time = self.wave_set.time.values();
        let path = Path::new(|builder| {
            for (i, (&t, &value)) in time.iter().zip(series.values.iter()).enumerate() {
                let (x, y) = area.project(bounds, t, value);
                if i == 0 {
                    builder.move_to(Point::new(x, y));
                } else {
                    builder.line_to(Point::new(x, y));
                }
            }
        });
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(2.0)
                .with_color(trace_color(series.color)),
        );
    }

    fn draw_legend(&self, frame: &mut Frame, area: &PlotArea, entries: &[&Series]) {
        if entries.is_empty() {
            return;
        }
        let row_height = 20.0;
        let size = Size::new(88.0, 10.0 + row_height * entries.len() as f32);
        let origin = Point::new(area.right() - size.width - 10.0, area.top + 10.0);

        frame.fill_rectangle(origin, size, Color::from_rgba(1.0, 1.0, 1.0, 0.9));
        frame.stroke(
            &Path::rectangle(origin, size),
            Stroke::default().with_color(Color::from_rgb(0.7, 0.7, 0.75)),
        );

        for (row, series) in entries.iter().enumerate() {
            let y = origin.y + 15.0 + row as f32 * row_height;
            let swatch = Path::line(
                Point::new(origin.x + 10.0, y),
                Point::new(origin.x + 38.0, y),
            );
            frame.stroke(
                &swatch,
                Stroke::default()
                    .with_width(2.5)
                    .with_color(trace_color(series.color)),
            );
            frame.fill_text(Text {
                content: series.label.clone(),
                position: Point::new(origin.x + 46.0, y - 8.0),
                color: Color::BLACK,
                size: Pixels(14.0),
                ..Text::default()
            });
        }
    }
}

impl<Message> canvas::Program<Message> for WaveChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        let area = PlotArea::new(bounds.width, bounds.height, Margins::default());
        let data_bounds = DataBounds::from_wave_set(&self.wave_set);

        self.draw_grid(&mut frame, &area, &data_bounds);

        let entries = visible_series(&self.wave_set, self.visibility);
        for series in &entries {
            self.draw_series(&mut frame, &area, &data_bounds, series);
        }

        frame.stroke(
            &Path::rectangle(
                Point::new(area.left, area.top),
                Size::new(area.width, area.height),
            ),
            Stroke::default()
                .with_width(1.5)
                .with_color(Color::from_rgb(0.2, 0.2, 0.25)),
        );

        frame.fill_text(Text {
            content: DEMO_TITLE.to_string(),
            position: Point::new(area.left, 12.0),
            color: Color::BLACK,
            size: Pixels(18.0),
            ..Text::default()
        });

        self.draw_legend(&mut frame, &area, &entries);

        vec![frame.into_geometry()]
    }
}
