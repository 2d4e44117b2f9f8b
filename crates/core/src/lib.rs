//! Audio extraction and speech-to-text for local video files.
//!
//! The crate is split into domain interfaces (traits the GUI and CLI program
//! against) and infrastructure implementations backed by ffmpeg-next, hound
//! and whisper-rs. `pipeline::TranscribeVideoUseCase` wires them together
//! for a single end-to-end transcription run.

pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod video;
