use std::path::PathBuf;

use thiserror::Error;

/// Terminal failure of one transcription attempt.
///
/// `Clone` so the worker thread can hand errors to the UI over a channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("no video selected")]
    InputMissing,
    #[error("audio extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("transcription failed: {0}")]
    InferenceFailed(String),
    #[error("could not remove {}: {message}", .path.display())]
    CleanupFailed { path: PathBuf, message: String },
}

/// Phases a running job passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Extracting,
    Transcribing,
}

/// Progress notifications emitted while a job runs.
///
/// `CleanupFailed` is non-fatal: the intermediate artifact could not be
/// removed, but the job's primary outcome stands.
#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    Phase(JobPhase),
    CleanupFailed { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failed_stage() {
        assert_eq!(JobError::InputMissing.to_string(), "no video selected");
        assert_eq!(
            JobError::ExtractionFailed("bad codec".into()).to_string(),
            "audio extraction failed: bad codec"
        );
        assert_eq!(
            JobError::InferenceFailed("model state".into()).to_string(),
            "transcription failed: model state"
        );
    }

    #[test]
    fn test_cleanup_error_names_the_path() {
        let err = JobError::CleanupFailed {
            path: PathBuf::from("/tmp/clip.wav"),
            message: "permission denied".into(),
        };
        let text = err.to_string();
        assert!(text.contains("clip.wav"), "unexpected message: {text}");
        assert!(text.contains("permission denied"));
    }
}
