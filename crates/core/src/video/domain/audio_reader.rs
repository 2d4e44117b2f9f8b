use std::path::Path;

use crate::audio::domain::waveform::Waveform;

/// Domain interface for decoding the audio track of a video file.
pub trait AudioReader: Send {
    /// Decode and resample the audio track to a mono waveform at
    /// `target_sample_rate`. Returns `None` when the container carries no
    /// audio stream at all.
    fn read_audio(
        &self,
        video_path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<Waveform>, Box<dyn std::error::Error>>;
}
