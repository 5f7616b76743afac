//! Persistence of the last input/output pair.
//!
//! The store is deliberately dumb: two raw string slots, written together
//! after every successful decode or clear and read once at startup. Failures
//! are silent in both directions - a missing or unreadable store means "no
//! saved data", and a failed save is a no-op. Nothing here is fatal.

use std::fs;
use std::path::{Path, PathBuf};

/// File name for the saved Base64 input.
const SAVED_INPUT_FILE: &str = "saved_input";

/// File name for the saved decoded output.
const SAVED_OUTPUT_FILE: &str = "saved_output";

/// The input/output pair as it exists in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedPair {
    /// The raw Base64 input.
    pub input: String,
    /// The decoded output (empty means "no output").
    pub output: String,
}

/// Key-value persistence for the session pair.
pub trait Storage {
    /// Load the saved pair. Returns `None` when no prior data exists or the
    /// store is unavailable; never raises to the caller.
    fn load(&self) -> Option<PersistedPair>;

    /// Save the pair. Fire-and-forget: an unavailable store no-ops.
    fn save(&mut self, pair: &PersistedPair);
}

/// File-backed storage: two plain text files in a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the platform data directory (`~/.local/share/debase` on
    /// Linux). Returns `None` if no data directory can be determined.
    pub fn in_user_data_dir() -> Option<Self> {
        let base = dirs::data_dir().or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))?;
        Some(Self::new(base.join("debase")))
    }

    /// The directory holding the two slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Option<PersistedPair> {
        let input_path = self.dir.join(SAVED_INPUT_FILE);
        let output_path = self.dir.join(SAVED_OUTPUT_FILE);
        if !input_path.exists() && !output_path.exists() {
            return None;
        }
        // A slot that exists but cannot be read counts as empty.
        let input = fs::read_to_string(&input_path).unwrap_or_default();
        let output = fs::read_to_string(&output_path).unwrap_or_default();
        Some(PersistedPair { input, output })
    }

    fn save(&mut self, pair: &PersistedPair) {
        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        let _ = fs::write(self.dir.join(SAVED_INPUT_FILE), &pair.input);
        let _ = fs::write(self.dir.join(SAVED_OUTPUT_FILE), &pair.output);
    }
}

/// In-memory storage, used by tests and available for embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pair: Option<PersistedPair>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a pair, as if a prior run saved it.
    pub fn with_pair(pair: PersistedPair) -> Self {
        Self { pair: Some(pair) }
    }

    /// The last saved pair, if any.
    pub fn saved(&self) -> Option<&PersistedPair> {
        self.pair.as_ref()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Option<PersistedPair> {
        self.pair.clone()
    }

    fn save(&mut self, pair: &PersistedPair) {
        self.pair = Some(pair.clone());
    }
}
