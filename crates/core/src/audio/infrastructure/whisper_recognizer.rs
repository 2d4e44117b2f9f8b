use std::path::Path;

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::Transcript;
use crate::audio::domain::waveform_store::WaveformStore;
use crate::audio::infrastructure::wav_waveform_store::WavWaveformStore;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Speech recognizer backed by whisper.cpp via whisper-rs.
///
/// The model context is loaded once at construction and reused for every
/// transcription; each call only creates a fresh decoding state. Timestamps
/// are disabled, trading segment timing for decode speed.
pub struct WhisperRecognizer {
    ctx: WhisperContext,
    language: Option<String>,
}

impl WhisperRecognizer {
    /// Load the ggml model at `model_path` with automatic language detection.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_language(model_path, None)
    }

    /// Load the model with a fixed language hint (ISO 639-1 code, e.g. "en").
    pub fn with_language(
        model_path: &Path,
        language: Option<&str>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("whisper model not found at {}", model_path.display()).into());
        }

        let path = model_path
            .to_str()
            .ok_or("whisper model path is not valid UTF-8")?;
        let ctx = WhisperContext::new_with_params(path, WhisperContextParameters::default())
            .map_err(|e| format!("failed to load whisper model: {e}"))?;

        log::info!("loaded whisper model from {}", model_path.display());
        Ok(Self {
            ctx,
            language: language.map(str::to_string),
        })
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(&self, waveform_path: &Path) -> Result<Transcript, Box<dyn std::error::Error>> {
        let waveform = WavWaveformStore.read(waveform_path)?;
        if waveform.sample_rate() != WHISPER_SAMPLE_RATE {
            return Err(format!(
                "whisper expects {WHISPER_SAMPLE_RATE} Hz input, got {} Hz",
                waveform.sample_rate()
            )
            .into());
        }
        if waveform.is_empty() {
            return Ok(Transcript::new(""));
        }

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| format!("failed to create whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(self.language.as_deref().unwrap_or("auto")));
        params.set_translate(false);
        params.set_token_timestamps(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, waveform.samples())
            .map_err(|e| format!("whisper inference failed: {e}"))?;

        let num_segments = state.full_n_segments();
        let mut segments = Vec::with_capacity(num_segments as usize);
        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let mut segment_text = String::new();
            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };
                let piece = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens ([_BEG_], <|endoftext|>, ...)
                let trimmed = piece.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }
                segment_text.push_str(piece);
            }
            segments.push(segment_text);
        }

        log::debug!(
            "transcribed {:.1}s of audio into {} segments",
            waveform.duration(),
            segments.len()
        );
        Ok(Transcript::from_segments(segments))
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::waveform::Waveform;
    use tempfile::TempDir;

    #[test]
    fn test_new_nonexistent_model_returns_error() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/ggml-base.bin"));
        let err = result.err().expect("expected an error").to_string();
        assert!(err.contains("not found"), "unexpected error: {err}");
    }

    #[test]
    #[ignore] // Requires a downloaded whisper model
    fn test_transcribe_does_not_crash_on_sine_wave() {
        use crate::shared::model_resolver;
        use crate::shared::whisper_model::WhisperModel;

        let model = WhisperModel::Tiny;
        let model_path =
            model_resolver::resolve(model.file_name(), &model.download_url(), None, None)
                .expect("failed to resolve whisper model");
        let recognizer = WhisperRecognizer::new(&model_path).expect("failed to load model");

        let sample_rate = WHISPER_SAMPLE_RATE;
        let len = 3 * sample_rate as usize;
        let samples: Vec<f32> = (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                (2.0 * std::f64::consts::PI * 440.0 * t).sin() as f32 * 0.2
            })
            .collect();

        let tmp = TempDir::new().unwrap();
        let wav = tmp.path().join("tone.wav");
        WavWaveformStore
            .write(&wav, &Waveform::new(samples, sample_rate))
            .unwrap();

        let result = recognizer.transcribe(&wav);
        assert!(result.is_ok(), "transcription should not error: {result:?}");
    }
}
