use std::path::Path;

use iced::border::Border;
use iced::widget::{
    button, column, container, pick_list, progress_bar, row, scrollable, text, Space,
};
use iced::{Color, Element, Length, Theme};

use vidscribe_core::shared::constants::VIDEO_EXTENSIONS;

use crate::app::{scaled, App, Message, ProcessingState};
use crate::settings::{Appearance, ModelTier};
use crate::theme::{danger_color, tertiary_color, warning_color};

pub fn screen(app: &App) -> Element<'_, Message> {
    let fs = app.settings.font_scale;
    let theme = app.theme();

    let content: Element<'_, Message> = match app.video_path.as_deref() {
        None => empty_state(fs, &theme),
        Some(path) => workflow_view(app, path, fs, &theme),
    };

    column![
        container(content).padding(16).height(Length::Fill),
        footer(app, fs),
    ]
    .height(Length::Fill)
    .into()
}

fn empty_state<'a>(fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let formats = VIDEO_EXTENSIONS
        .iter()
        .map(|e| e.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    let inner = column![
        text("Transcribe a video").size(scaled(20.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(6),
        text("Pick a local video file; its spoken audio becomes text.")
            .size(scaled(14.0, fs))
            .color(tertiary),
        Space::new().height(20),
        button(text("Browse Files").size(scaled(14.0, fs)))
            .on_press(Message::SelectVideo)
            .padding([10, 24]),
        Space::new().height(14),
        text(formats).size(scaled(12.0, fs)).color(tertiary),
    ]
    .align_x(iced::Alignment::Center);

    container(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn workflow_view<'a>(app: &App, path: &Path, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let mut col = column![]
        .spacing(0)
        .push(file_row(fs, path, theme))
        .push(Space::new().height(14))
        .push(action_area(app, fs))
        .push(Space::new().height(8))
        .push(
            text(app.status_line())
                .size(scaled(13.0, fs))
                .color(tertiary),
        );

    if let Some(note) = &app.cleanup_note {
        col = col.push(Space::new().height(6)).push(
            text(note.clone())
                .size(scaled(13.0, fs))
                .color(warning_color(theme)),
        );
    }

    if let Some(error) = &app.last_error {
        col = col
            .push(Space::new().height(10))
            .push(error_banner(fs, error));
    }

    col.push(Space::new().height(14))
        .push(transcript_area(fs, &app.transcript, tertiary))
        .height(Length::Fill)
        .into()
}

fn action_area<'a>(app: &App, fs: f32) -> Element<'a, Message> {
    match &app.processing {
        ProcessingState::Idle | ProcessingState::Complete => {
            button(text("Transcribe").size(scaled(15.0, fs)))
                .on_press(Message::RunTranscription)
                .padding([12, 24])
                .width(Length::Fill)
                .into()
        }
        ProcessingState::Downloading(downloaded, total) => {
            let pct = if *total > 0 {
                (*downloaded as f64 / *total as f64 * 100.0) as f32
            } else {
                0.0
            };
            progress_bar(0.0..=100.0, pct).into()
        }
        // Extraction and inference report no granularity; sweep instead
        _ => progress_bar(0.0..=100.0, sweep_position(app.ticks)).into(),
    }
}

fn file_row<'a>(fs: f32, path: &Path, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let label = text("VIDEO").size(scaled(11.0, fs)).color(tertiary);
    let change = button(text("Change").size(scaled(13.0, fs)))
        .padding([6, 14])
        .on_press(Message::SelectVideo)
        .style(button::secondary);

    let content = row![
        column![label, text(name).size(scaled(15.0, fs))].width(Length::Fill),
        change
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(content)
        .padding([12, 16])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}

fn error_banner<'a>(fs: f32, message: &str) -> Element<'a, Message> {
    container(text(message.to_owned()).size(scaled(13.0, fs)))
        .padding([10, 12])
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let danger = danger_color(theme);
            container::Style {
                background: Some(iced::Background::Color(Color { a: 0.12, ..danger })),
                border: Border {
                    radius: 8.0.into(),
                    ..Border::default()
                },
                text_color: Some(danger),
                ..container::Style::default()
            }
        })
        .into()
}

fn transcript_area<'a>(fs: f32, transcript: &str, tertiary: Color) -> Element<'a, Message> {
    let body: Element<'a, Message> = if transcript.is_empty() {
        text("The transcript will appear here.")
            .size(scaled(14.0, fs))
            .color(tertiary)
            .into()
    } else {
        text(transcript.to_owned()).size(scaled(14.0, fs)).into()
    };

    container(
        scrollable(container(body).padding(12).width(Length::Fill)).height(Length::Fill),
    )
    .style(container::rounded_box)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn footer<'a>(app: &App, fs: f32) -> Element<'a, Message> {
    let appearance = pick_list(
        Appearance::ALL,
        Some(app.settings.appearance),
        Message::AppearanceChanged,
    )
    .text_size(scaled(12.0, fs))
    .padding([4, 8]);

    let model = pick_list(
        ModelTier::ALL,
        Some(app.settings.model),
        Message::ModelChanged,
    )
    .text_size(scaled(12.0, fs))
    .padding([4, 8]);

    container(
        row![
            text("Appearance").size(scaled(12.0, fs)),
            appearance,
            Space::new().width(Length::Fill),
            text("Model").size(scaled(12.0, fs)),
            model,
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding([8, 16])
    .width(Length::Fill)
    .into()
}

/// Position of the indeterminate bar; wraps to restart the sweep.
fn sweep_position(ticks: u64) -> f32 {
    ((ticks * 7) % 100) as f32
}
