/// Container extensions offered by the file dialog and accepted by the CLI.
/// The filter is the only gate; extraction itself takes whatever ffmpeg
/// can open.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

/// Extension of the intermediate artifact written next to the video.
pub const WAVEFORM_EXTENSION: &str = "wav";

/// Sample rate whisper models are trained on.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;
