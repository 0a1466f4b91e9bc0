use alloc::string::String;

use crate::*;

/// Persistent home of the round history.
pub trait HistoryStore {
    fn load(&self) -> Result<History>;

    fn save(&mut self, history: &History) -> Result<()>;
}

/// Loads the stored history, anything that cannot be read counts as no history at all.
pub fn load_or_empty<S: HistoryStore + ?Sized>(store: &S) -> History {
    match store.load() {
        Ok(history) => {
            log::debug!("loaded {} history records", history.len());
            history
        }
        Err(err) => {
            log::warn!("starting with empty history: {}", err);
            History::new()
        }
    }
}

/// Keeps the serialized history in memory, same encoding as the browser store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<History> {
        match &self.blob {
            Some(blob) => Ok(serde_json::from_str(blob)?),
            None => Ok(History::new()),
        }
    }

    fn save(&mut self, history: &History) -> Result<()> {
        self.blob = Some(serde_json::to_string(history)?);
        Ok(())
    }
}
