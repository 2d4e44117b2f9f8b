pub mod wav_waveform_store;
pub mod whisper_recognizer;
