pub mod job;
pub mod scratch_wav;
pub mod transcribe_video_use_case;
