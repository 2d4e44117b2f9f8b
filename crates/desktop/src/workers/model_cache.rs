use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use vidscribe_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use vidscribe_core::shared::model_resolver;
use vidscribe_core::shared::whisper_model::WhisperModel;

/// Resolves and loads the whisper model in the background at startup.
///
/// The loaded recognizer is the one expensive process-wide resource; workers
/// wait on the slot and share it via `Arc` instead of reloading per job.
pub struct ModelCache {
    slot: Arc<ModelSlot>,
}

struct ModelSlot {
    result: Mutex<Option<Result<Arc<WhisperRecognizer>, String>>>,
    ready: Condvar,
    progress: Arc<Mutex<(u64, u64)>>,
}

impl ModelCache {
    /// Create a cache for the given model tier and begin loading immediately.
    pub fn new(model: WhisperModel) -> Arc<Self> {
        let cache = Arc::new(Self {
            slot: Arc::new(ModelSlot::new()),
        });

        let slot = cache.slot.clone();
        thread::spawn(move || slot.load(model));

        cache
    }

    /// Block until the recognizer is ready. Calls `on_progress(downloaded,
    /// total)` while a model download is in flight.
    pub fn wait_for_recognizer(
        &self,
        on_progress: &dyn Fn(u64, u64),
    ) -> Result<Arc<WhisperRecognizer>, String> {
        self.slot.wait(on_progress)
    }
}

impl ModelSlot {
    fn new() -> Self {
        Self {
            result: Mutex::new(None),
            ready: Condvar::new(),
            progress: Arc::new(Mutex::new((0, 0))),
        }
    }

    fn load(&self, model: WhisperModel) {
        let progress = self.progress.clone();
        let result = model_resolver::resolve(
            model.file_name(),
            &model.download_url(),
            None,
            Some(Box::new(move |downloaded, total| {
                *progress.lock().unwrap() = (downloaded, total);
            })),
        )
        .map_err(|e| e.to_string())
        .and_then(|path| {
            WhisperRecognizer::new(&path)
                .map(Arc::new)
                .map_err(|e| e.to_string())
        });

        *self.result.lock().unwrap() = Some(result);
        self.ready.notify_all();
    }

    fn wait(&self, on_progress: &dyn Fn(u64, u64)) -> Result<Arc<WhisperRecognizer>, String> {
        let mut guard = self.result.lock().unwrap();
        loop {
            if let Some(ref result) = *guard {
                return result.clone();
            }
            // Forward download progress while waiting
            if let Ok(progress) = self.progress.try_lock() {
                let (downloaded, total) = *progress;
                if total > 0 {
                    on_progress(downloaded, total);
                }
            }
            let (new_guard, _) = self
                .ready
                .wait_timeout(guard, Duration::from_millis(100))
                .unwrap();
            guard = new_guard;
        }
    }
}
