use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use iced::{Element, Subscription, Task, Theme};

use vidscribe_core::pipeline::job::{JobError, JobPhase};
use vidscribe_core::shared::constants::VIDEO_EXTENSIONS;

use crate::settings::{Appearance, ModelTier, Settings};
use crate::theme;
use crate::view;
use crate::workers::model_cache::ModelCache;
use crate::workers::transcribe_worker::{self, TranscribeParams, WorkerMessage};

const WORKER_POLL_INTERVAL: Duration = Duration::from_millis(120);

// ---------------------------------------------------------------------------
// Processing state
// ---------------------------------------------------------------------------

/// UI-visible lifecycle of one transcription attempt.
///
/// A job moves Preparing → (Downloading) → Extracting → Transcribing and ends
/// in Complete or back in Idle with `last_error` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingState {
    Idle,
    Preparing,
    Downloading(u64, u64),
    Extracting,
    Transcribing,
    Complete,
}

impl ProcessingState {
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            ProcessingState::Preparing
                | ProcessingState::Downloading(..)
                | ProcessingState::Extracting
                | ProcessingState::Transcribing
        )
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    SelectVideo,
    VideoSelected(Option<PathBuf>),
    RunTranscription,
    PollWorker,
    PollSystemTheme,
    AppearanceChanged(Appearance),
    ModelChanged(ModelTier),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub settings: Settings,
    pub video_path: Option<PathBuf>,
    pub transcript: String,
    pub processing: ProcessingState,
    /// Persistent error display; only cleared by a new selection or run.
    pub last_error: Option<String>,
    /// Non-fatal note that the intermediate waveform could not be removed.
    pub cleanup_note: Option<String>,
    /// Drives the sweep of the indeterminate progress bar.
    pub ticks: u64,
    model_cache: Arc<ModelCache>,
    worker_rx: Option<Receiver<WorkerMessage>>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let model_cache = ModelCache::new(settings.model.to_model());
        (
            Self {
                settings,
                video_path: None,
                transcript: String::new(),
                processing: ProcessingState::Idle,
                last_error: None,
                cleanup_note: None,
                ticks: 0,
                model_cache,
                worker_rx: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectVideo => {
                if self.processing.is_running() {
                    return Task::none();
                }
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select a video")
                            .add_filter("Video Files", VIDEO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::VideoSelected,
                );
            }
            Message::VideoSelected(Some(path)) => {
                if self.processing.is_running() {
                    return Task::none();
                }
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.transcript = format!("Loaded {name}. Ready to transcribe.");
                self.video_path = Some(path);
                self.processing = ProcessingState::Idle;
                self.last_error = None;
                self.cleanup_note = None;
            }
            Message::VideoSelected(None) => {}
            Message::RunTranscription => {
                // Single-flight: a second request while one is running is
                // rejected, not queued.
                if self.processing.is_running() {
                    return Task::none();
                }
                let Some(video_path) = self.video_path.clone() else {
                    self.last_error = Some(JobError::InputMissing.to_string());
                    return Task::none();
                };
                self.last_error = None;
                self.cleanup_note = None;
                self.processing = ProcessingState::Preparing;
                self.worker_rx = Some(transcribe_worker::spawn(TranscribeParams {
                    video_path,
                    model_cache: self.model_cache.clone(),
                }));
            }
            Message::PollWorker => {
                self.ticks = self.ticks.wrapping_add(1);
                self.drain_worker();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render;
                // the redraw triggered by this message is enough.
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::ModelChanged(tier) => {
                if self.processing.is_running() {
                    return Task::none();
                }
                self.settings.model = tier;
                self.settings.save();
                self.model_cache = ModelCache::new(tier.to_model());
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::screen(self)
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.worker_rx.is_some() {
            subscriptions.push(iced::time::every(WORKER_POLL_INTERVAL).map(|_| Message::PollWorker));
        }
        if self.settings.appearance == Appearance::System {
            subscriptions
                .push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subscriptions)
    }

    /// Single-line status, overwritten on every state change.
    pub fn status_line(&self) -> String {
        match &self.processing {
            ProcessingState::Idle => match &self.video_path {
                Some(path) => format!(
                    "Selected: {}",
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string())
                ),
                None => "Ready".to_string(),
            },
            ProcessingState::Preparing => "Preparing model\u{2026}".to_string(),
            ProcessingState::Downloading(downloaded, total) => {
                if *total > 0 {
                    let pct = (*downloaded as f64 / *total as f64 * 100.0) as u32;
                    format!("Downloading model \u{2014} {pct}%")
                } else {
                    format!("Downloading model\u{2026} {downloaded} bytes")
                }
            }
            ProcessingState::Extracting => "Extracting audio\u{2026}".to_string(),
            ProcessingState::Transcribing => "Transcribing\u{2026}".to_string(),
            ProcessingState::Complete => {
                format!(
                    "Transcription complete \u{2014} {} words",
                    self.transcript.split_whitespace().count()
                )
            }
        }
    }

    fn drain_worker(&mut self) {
        let Some(rx) = self.worker_rx.take() else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(message) => {
                    if self.apply_worker_message(message) {
                        // Terminal message: drop the receiver
                        return;
                    }
                }
                Err(TryRecvError::Empty) => {
                    self.worker_rx = Some(rx);
                    return;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("transcription worker stopped without a terminal message");
                    self.processing = ProcessingState::Idle;
                    self.last_error = Some("transcription worker stopped unexpectedly".to_string());
                    return;
                }
            }
        }
    }

    /// Apply one worker message; returns true when the job is over.
    fn apply_worker_message(&mut self, message: WorkerMessage) -> bool {
        match message {
            WorkerMessage::ModelProgress(downloaded, total) => {
                self.processing = ProcessingState::Downloading(downloaded, total);
                false
            }
            WorkerMessage::Phase(JobPhase::Extracting) => {
                self.processing = ProcessingState::Extracting;
                false
            }
            WorkerMessage::Phase(JobPhase::Transcribing) => {
                self.processing = ProcessingState::Transcribing;
                false
            }
            WorkerMessage::CleanupWarning(note) => {
                self.cleanup_note = Some(note);
                false
            }
            WorkerMessage::Complete(text) => {
                // Wholesale replacement, never appended
                self.transcript = text;
                self.processing = ProcessingState::Complete;
                true
            }
            WorkerMessage::Failed(message) => {
                // Transcript is left untouched; the error sticks around
                // until the next selection or run
                self.last_error = Some(message);
                self.processing = ProcessingState::Idle;
                true
            }
        }
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_running_covers_all_in_flight_states() {
        assert!(!ProcessingState::Idle.is_running());
        assert!(!ProcessingState::Complete.is_running());
        assert!(ProcessingState::Preparing.is_running());
        assert!(ProcessingState::Downloading(1, 10).is_running());
        assert!(ProcessingState::Extracting.is_running());
        assert!(ProcessingState::Transcribing.is_running());
    }

    #[test]
    fn test_scaled_rounds_to_whole_pixels() {
        assert_eq!(scaled(13.0, 1.0), 13.0);
        assert_eq!(scaled(13.0, 1.1), 14.0);
    }
}
