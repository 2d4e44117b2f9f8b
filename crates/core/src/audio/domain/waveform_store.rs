use std::path::Path;

use super::waveform::Waveform;

/// Domain interface for persisting waveforms as the on-disk intermediate
/// artifact. The fixed wire format is mono signed-16-bit PCM WAV.
pub trait WaveformStore: Send {
    fn write(&self, path: &Path, waveform: &Waveform) -> Result<(), Box<dyn std::error::Error>>;

    fn read(&self, path: &Path) -> Result<Waveform, Box<dyn std::error::Error>>;
}
