use std::path::Path;
use std::sync::Arc;

use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::Transcript;
use crate::audio::domain::waveform::Waveform;
use crate::audio::domain::waveform_store::WaveformStore;
use crate::pipeline::job::{JobError, JobEvent, JobPhase};
use crate::pipeline::scratch_wav::ScratchWav;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::video::domain::audio_reader::AudioReader;

/// End-to-end transcription of one video: decode the audio track, write the
/// intermediate waveform next to the video, run the recognizer over it, and
/// remove the waveform on every path out.
///
/// One attempt moves Extracting → Transcribing and ends in a transcript or a
/// tagged `JobError`; nothing persists between attempts.
pub struct TranscribeVideoUseCase {
    reader: Box<dyn AudioReader>,
    store: Box<dyn WaveformStore>,
    recognizer: Arc<dyn SpeechRecognizer>,
}

impl TranscribeVideoUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        store: Box<dyn WaveformStore>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            reader,
            store,
            recognizer,
        }
    }

    pub fn run(
        &self,
        video_path: &Path,
        on_event: &dyn Fn(JobEvent),
    ) -> Result<Transcript, JobError> {
        on_event(JobEvent::Phase(JobPhase::Extracting));

        let waveform = self
            .reader
            .read_audio(video_path, WHISPER_SAMPLE_RATE)
            .map_err(|e| JobError::ExtractionFailed(e.to_string()))?
            .ok_or_else(|| JobError::ExtractionFailed("video has no audio track".into()))?;

        let scratch = ScratchWav::for_video(video_path);
        let result = self.write_and_transcribe(&scratch, &waveform, on_event);

        // Cleanup happens whether inference succeeded or not; a failed
        // removal is surfaced but never masks the primary outcome.
        let path = scratch.path().to_path_buf();
        if let Err(e) = scratch.remove() {
            log::warn!("failed to remove {}: {e}", path.display());
            on_event(JobEvent::CleanupFailed {
                path,
                message: e.to_string(),
            });
        }

        result
    }

    fn write_and_transcribe(
        &self,
        scratch: &ScratchWav,
        waveform: &Waveform,
        on_event: &dyn Fn(JobEvent),
    ) -> Result<Transcript, JobError> {
        self.store
            .write(scratch.path(), waveform)
            .map_err(|e| JobError::ExtractionFailed(e.to_string()))?;

        on_event(JobEvent::Phase(JobPhase::Transcribing));
        self.recognizer
            .transcribe(scratch.path())
            .map_err(|e| JobError::InferenceFailed(e.to_string()))
    }
}
