use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Parser;

use vidscribe_core::audio::infrastructure::wav_waveform_store::WavWaveformStore;
use vidscribe_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use vidscribe_core::pipeline::job::{JobEvent, JobPhase};
use vidscribe_core::pipeline::transcribe_video_use_case::TranscribeVideoUseCase;
use vidscribe_core::shared::constants::VIDEO_EXTENSIONS;
use vidscribe_core::shared::model_resolver;
use vidscribe_core::shared::whisper_model::WhisperModel;
use vidscribe_core::video::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;

/// Speech-to-text transcription of a local video file.
#[derive(Parser)]
#[command(name = "vidscribe")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Whisper model tier: tiny, base or small.
    #[arg(long, default_value = "base")]
    model: String,

    /// Spoken language hint (ISO 639-1 code); auto-detected when omitted.
    #[arg(long)]
    language: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate_extension(&cli.input)?;
    let model = parse_model(&cli.model)?;

    let model_path = model_resolver::resolve(model.file_name(), &model.download_url(), None, None)?;
    let recognizer = WhisperRecognizer::with_language(&model_path, cli.language.as_deref())?;

    let use_case = TranscribeVideoUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(WavWaveformStore),
        Arc::new(recognizer),
    );

    let transcript = use_case.run(&cli.input, &|event| match event {
        JobEvent::Phase(JobPhase::Extracting) => log::info!("extracting audio"),
        JobEvent::Phase(JobPhase::Transcribing) => log::info!("transcribing"),
        JobEvent::CleanupFailed { path, message } => {
            log::warn!("could not remove {}: {message}", path.display());
        }
    })?;

    println!("{transcript}");
    Ok(())
}

fn validate_extension(input: &Path) -> Result<(), String> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "unsupported input extension '{ext}'; expected one of: {}",
            VIDEO_EXTENSIONS.join(", ")
        ))
    }
}

fn parse_model(name: &str) -> Result<WhisperModel, String> {
    match name.to_lowercase().as_str() {
        "tiny" => Ok(WhisperModel::Tiny),
        "base" => Ok(WhisperModel::Base),
        "small" => Ok(WhisperModel::Small),
        other => Err(format!("unknown model tier '{other}'; expected tiny, base or small")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extension_accepts_known_containers() {
        assert!(validate_extension(Path::new("talk.mp4")).is_ok());
        assert!(validate_extension(Path::new("talk.MKV")).is_ok());
    }

    #[test]
    fn test_validate_extension_rejects_everything_else() {
        assert!(validate_extension(Path::new("talk.wav")).is_err());
        assert!(validate_extension(Path::new("talk")).is_err());
    }

    #[test]
    fn test_parse_model_tiers() {
        assert_eq!(parse_model("tiny").unwrap(), WhisperModel::Tiny);
        assert_eq!(parse_model("Base").unwrap(), WhisperModel::Base);
        assert!(parse_model("huge").is_err());
    }
}
