use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::shared::constants::WAVEFORM_EXTENSION;

/// Scoped handle to the intermediate waveform file written next to the video.
///
/// The file must not outlive the transcription attempt on any exit path.
/// Callers remove it explicitly to observe failures; `Drop` is the fallback
/// that keeps an early return from leaking the file.
#[derive(Debug)]
pub struct ScratchWav {
    path: PathBuf,
    removed: bool,
}

impl ScratchWav {
    /// Derive the artifact path from the video path: same base name, `wav`
    /// extension.
    pub fn for_video(video_path: &Path) -> Self {
        Self {
            path: video_path.with_extension(WAVEFORM_EXTENSION),
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now. A file that was never written counts as removed.
    pub fn remove(mut self) -> io::Result<()> {
        self.removed = true;
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl Drop for ScratchWav {
    fn drop(&mut self) {
        if !self.removed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_derived_from_video_extension() {
        let scratch = ScratchWav::for_video(Path::new("/videos/talk.mp4"));
        assert_eq!(scratch.path(), Path::new("/videos/talk.wav"));
    }

    #[test]
    fn test_remove_deletes_existing_file() {
        let tmp = TempDir::new().unwrap();
        let video = tmp.path().join("talk.mkv");
        let scratch = ScratchWav::for_video(&video);
        fs::write(scratch.path(), b"pcm").unwrap();
        let wav = scratch.path().to_path_buf();

        scratch.remove().unwrap();
        assert!(!wav.exists());
    }

    #[test]
    fn test_remove_tolerates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let scratch = ScratchWav::for_video(&tmp.path().join("talk.mp4"));
        assert!(scratch.remove().is_ok());
    }

    #[test]
    fn test_remove_reports_undeletable_artifact() {
        let tmp = TempDir::new().unwrap();
        let video = tmp.path().join("talk.mp4");
        let scratch = ScratchWav::for_video(&video);
        // A directory at the artifact path cannot be removed with remove_file
        fs::create_dir(scratch.path()).unwrap();

        assert!(scratch.remove().is_err());
    }

    #[test]
    fn test_drop_removes_leftover_file() {
        let tmp = TempDir::new().unwrap();
        let video = tmp.path().join("talk.avi");
        let wav;
        {
            let scratch = ScratchWav::for_video(&video);
            fs::write(scratch.path(), b"pcm").unwrap();
            wav = scratch.path().to_path_buf();
        }
        assert!(!wav.exists());
    }
}
