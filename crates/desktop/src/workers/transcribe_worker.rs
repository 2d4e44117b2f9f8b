use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use vidscribe_core::audio::infrastructure::wav_waveform_store::WavWaveformStore;
use vidscribe_core::pipeline::job::{JobError, JobEvent, JobPhase};
use vidscribe_core::pipeline::transcribe_video_use_case::TranscribeVideoUseCase;
use vidscribe_core::video::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;

use super::model_cache::ModelCache;

/// Messages sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    ModelProgress(u64, u64),
    Phase(JobPhase),
    /// The intermediate waveform could not be removed; the job outcome stands.
    CleanupWarning(String),
    Complete(String),
    Failed(String),
}

/// Parameters for one transcription job.
pub struct TranscribeParams {
    pub video_path: PathBuf,
    pub model_cache: Arc<ModelCache>,
}

/// Spawn a background transcription worker. There is no cancellation: once
/// started, the job runs to completion or failure.
pub fn spawn(params: TranscribeParams) -> Receiver<WorkerMessage> {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();

    thread::spawn(move || {
        let terminal = match run_transcription(&tx, &params) {
            Ok(text) => WorkerMessage::Complete(text),
            Err(e) => WorkerMessage::Failed(e.to_string()),
        };
        let _ = tx.send(terminal);
    });

    rx
}

fn run_transcription(
    tx: &Sender<WorkerMessage>,
    params: &TranscribeParams,
) -> Result<String, JobError> {
    // Model resolution may still be in flight from startup; wait for it,
    // forwarding download progress to the UI.
    let tx_download = tx.clone();
    let recognizer = params
        .model_cache
        .wait_for_recognizer(&|downloaded, total| {
            let _ = tx_download.send(WorkerMessage::ModelProgress(downloaded, total));
        })
        .map_err(JobError::InferenceFailed)?;

    let use_case = TranscribeVideoUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(WavWaveformStore),
        recognizer,
    );

    let tx_events = tx.clone();
    let transcript = use_case.run(&params.video_path, &move |event| {
        let message = match event {
            JobEvent::Phase(phase) => WorkerMessage::Phase(phase),
            JobEvent::CleanupFailed { path, message } => {
                WorkerMessage::CleanupWarning(JobError::CleanupFailed { path, message }.to_string())
            }
        };
        let _ = tx_events.send(message);
    })?;

    log::info!(
        "transcribed {} ({} words)",
        params.video_path.display(),
        transcript.word_count()
    );
    Ok(transcript.text().to_string())
}
