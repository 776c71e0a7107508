//! Best score tracking
//!
//! A single integer, read once at startup and written only when a finished
//! session beats it. Persisted to LocalStorage on the web and to a small file
//! on native.

/// Backing storage for the best score
pub trait HighScoreStore {
    /// Stored best score, `None` if nothing usable is stored
    fn load(&mut self) -> Option<u64>;
    fn save(&mut self, score: u64);
}

/// Parse a stored value; anything but a non-negative integer is ignored
pub fn parse_stored(text: &str) -> Option<u64> {
    match serde_json::from_str::<u64>(text.trim()) {
        Ok(score) => Some(score),
        Err(e) => {
            log::warn!("Ignoring stored high score {text:?}: {e}");
            None
        }
    }
}

/// In-memory store (tests, previews)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    /// Number of writes performed
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Option<u64> {
        self.value
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score);
        self.saves += 1;
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "riverAdventureHighScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&mut self) -> Option<u64> {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, high score starts at 0");
            return None;
        };
        let text = storage.get_item(Self::STORAGE_KEY).ok().flatten()?;
        parse_stored(&text)
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            if let Ok(text) = serde_json::to_string(&score) {
                if storage.set_item(Self::STORAGE_KEY, &text).is_err() {
                    log::warn!("Failed to write high score");
                }
            }
        }
    }
}

/// File-backed store (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn write(&self, score: u64) -> std::io::Result<()> {
        let text = serde_json::to_string(&score)?;
        std::fs::write(&self.path, text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for FileStore {
    fn load(&mut self) -> Option<u64> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => parse_stored(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, score: u64) {
        if let Err(e) = self.write(score) {
            log::warn!("Failed to write {}: {e}", self.path.display());
        }
    }
}

/// Best score plus the store it persists to
#[derive(Debug)]
pub struct HighScore<S> {
    best: u64,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Read the stored best once; missing or corrupt values count as 0
    pub fn load(mut store: S) -> Self {
        let best = store.load().unwrap_or(0);
        log::info!("Loaded high score: {best}");
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Whether a finished session's score beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished session. Saves and returns true only on a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        self.store.save(score);
        log::info!("New high score: {score}");
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
