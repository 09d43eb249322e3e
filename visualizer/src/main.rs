use chart::{Trace, TraceVisibility, WaveChart};
use iced::{
    widget::{button, column, row, text, Canvas, Container},
    Alignment, Element, Length, Task, Theme,
};
use std::sync::Arc;
use wavecore::prelude::{WaveConfig, COSINE_LABEL, DEMO_TITLE, SINE_LABEL};
use wavecore::waveform::{build_wave_set, WaveSet};

mod chart;
mod plot;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    DEMO_TITLE.into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    wave_set: Option<Arc<WaveSet>>,
    visibility: TraceVisibility,
    status: String,
}

#[derive(Debug, Clone, Copy)]
enum Message {
    ToggleTrace(Trace),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let (wave_set, status) = match build_wave_set(&WaveConfig::default()) {
            Ok(set) => {
                let status = format!(
                    "{} samples per trace, period {}",
                    set.len(),
                    set.config.period
                );
                (Some(Arc::new(set)), status)
            }
            Err(err) => {
                log::error!("waveform generation failed: {}", err);
                (None, format!("Waveform error: {err}"))
            }
        };

        (
            Visualizer {
                wave_set,
                visibility: TraceVisibility::default(),
                status,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleTrace(trace) => {
                state.visibility.toggle(trace);
                log::debug!("trace visibility now {:?}", state.visibility);
            }
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let toggles = row![
            button(text(toggle_label(COSINE_LABEL, state.visibility.cosine)))
                .on_press(Message::ToggleTrace(Trace::Cosine))
                .padding(8),
            button(text(toggle_label(SINE_LABEL, state.visibility.sine)))
                .on_press(Message::ToggleTrace(Trace::Sine))
                .padding(8),
            text(&state.status).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let chart: Element<'_, Message> = match &state.wave_set {
            Some(set) => Canvas::new(WaveChart::new(set.clone(), state.visibility))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("No waveform to plot").size(18).into(),
        };

        let layout = column![toggles, chart].spacing(12).padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn toggle_label(label: &str, visible: bool) -> String {
    if visible {
        format!("Hide {}", label)
    } else {
        format!("Show {}", label)
    }
}
