use std::path::Path;

use crate::audio::domain::waveform::Waveform;
use crate::audio::domain::waveform_store::WaveformStore;

/// WAV-backed waveform store using hound.
///
/// Files are written as mono signed-16-bit PCM (`pcm_s16le`), the format the
/// recognizer expects on disk. Reading rejects anything else.
pub struct WavWaveformStore;

impl WaveformStore for WavWaveformStore {
    fn write(&self, path: &Path, waveform: &Waveform) -> Result<(), Box<dyn std::error::Error>> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: waveform.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in waveform.samples() {
            let clamped = sample.clamp(-1.0, 1.0);
            writer.write_sample((clamped * i16::MAX as f32) as i16)?;
        }
        writer.finalize()?;
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Waveform, Box<dyn std::error::Error>> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        if spec.channels != 1 {
            return Err(format!(
                "expected a mono waveform file, got {} channels: {}",
                spec.channels,
                path.display()
            )
            .into());
        }
        if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
            return Err(format!(
                "expected 16-bit signed PCM, got {}-bit {:?}: {}",
                spec.bits_per_sample,
                spec.sample_format,
                path.display()
            )
            .into());
        }

        let samples = reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32768.0))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Waveform::new(samples, spec.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_preserves_rate_and_samples() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.wav");
        let original = Waveform::new(vec![0.0, 0.25, -0.25, 1.0, -1.0], 16000);

        let store = WavWaveformStore;
        store.write(&path, &original).unwrap();
        let restored = store.read(&path).unwrap();

        assert_eq!(restored.sample_rate(), 16000);
        assert_eq!(restored.len(), original.len());
        for (a, b) in original.samples().iter().zip(restored.samples()) {
            // 16-bit quantization error bound
            assert_relative_eq!(*a, *b, epsilon = 1.0 / 32000.0);
        }
    }

    #[test]
    fn test_read_missing_file_errors() {
        let store = WavWaveformStore;
        assert!(store.read(Path::new("/nonexistent/clip.wav")).is_err());
    }

    #[test]
    fn test_read_rejects_stereo() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..32 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let err = WavWaveformStore.read(&path).unwrap_err().to_string();
        assert!(err.contains("mono"), "unexpected error: {err}");
    }
}
