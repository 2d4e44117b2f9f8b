pub mod speech_recognizer;
pub mod transcript;
pub mod waveform;
pub mod waveform_store;
