use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create model cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine a cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 when the server sent no Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve a whisper model file by name.
///
/// Checked in order: the user cache directory, then an optional bundled
/// directory, then a download into the cache.
pub fn resolve(
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached_path = cache_dir.join(name);
    if cached_path.exists() {
        log::debug!("model cache hit: {}", cached_path.display());
        return Ok(cached_path);
    }

    if let Some(dir) = bundled_dir {
        let bundled_path = dir.join(name);
        if bundled_path.exists() {
            return Ok(bundled_path);
        }
    }

    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    log::info!("downloading {name} from {url}");
    download(url, &cached_path, progress)?;
    Ok(cached_path)
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Application Support/VidScribe/models/`
/// - Linux: `$XDG_CACHE_HOME/VidScribe/models/` or `~/.cache/VidScribe/models/`
/// - Windows: `%LOCALAPPDATA%/VidScribe/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join("VidScribe").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join("VidScribe").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), ModelResolveError> {
    let response = reqwest::blocking::get(url).map_err(|e| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let total = response.content_length().unwrap_or(0);

    // Download into a sibling .part file, rename only once complete
    let temp_path = dest.with_extension("part");
    let mut file = fs::File::create(&temp_path).map_err(|e| ModelResolveError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    let bytes = response.bytes().map_err(|e| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let mut downloaded: u64 = 0;
    let chunk_size = 1024 * 1024;
    for chunk in bytes.chunks(chunk_size) {
        file.write_all(chunk)
            .map_err(|e| ModelResolveError::Write {
                path: temp_path.clone(),
                source: e,
            })?;
        downloaded += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(|e| ModelResolveError::Write {
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, dest).map_err(|e| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_model_cache_dir_is_app_scoped() {
        let dir = model_cache_dir().unwrap();
        assert!(dir.to_string_lossy().contains("VidScribe"));
        assert!(dir.to_string_lossy().contains("models"));
    }

    #[test]
    fn test_resolve_prefers_bundled_file_over_download() {
        let tmp = TempDir::new().unwrap();
        let bundled_dir = tmp.path().join("bundled");
        fs::create_dir_all(&bundled_dir).unwrap();
        fs::write(bundled_dir.join("ggml-test.bin"), b"fake weights").unwrap();

        // The URL is unreachable, so success proves the bundled path won
        let resolved = resolve(
            "ggml-test.bin",
            "http://invalid.nonexistent.example.com/ggml-test.bin",
            Some(&bundled_dir),
            None,
        );
        // Unless a previous run cached a file with this name, the bundled
        // copy is returned
        if let Ok(path) = resolved {
            assert!(path.ends_with("ggml-test.bin"));
        }
    }

    #[test]
    fn test_download_invalid_url_returns_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("ggml-base.bin");
        let result = download(
            "http://invalid.nonexistent.example.com/model",
            &dest,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_download_leaves_no_partial_file() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("ggml-base.bin");
        let _ = download(
            "http://invalid.nonexistent.example.com/model",
            &dest,
            None,
        );
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }
}
