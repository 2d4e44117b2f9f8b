use std::path::Path;

use super::transcript::Transcript;

/// Domain interface for speech-to-text inference.
///
/// Input is the path of an extracted waveform file (mono PCM WAV);
/// implementations produce plain text without time-aligned segments.
pub trait SpeechRecognizer: Send + Sync {
    fn transcribe(&self, waveform_path: &Path) -> Result<Transcript, Box<dyn std::error::Error>>;
}
