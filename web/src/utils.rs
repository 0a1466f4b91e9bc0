use chrono::{DateTime, Utc};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use planes_core::{GameError, History, HistoryStore};
use wasm_bindgen::JsValue;

/// Key under which a type is kept in the browser's local storage.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

impl StorageKey for History {
    const KEY: &'static str = "planes10";
}

/// History store backed by `window.localStorage`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LocalHistoryStore;

impl HistoryStore for LocalHistoryStore {
    fn load(&self) -> planes_core::Result<History> {
        match LocalStorage::get(History::KEY) {
            Ok(history) => Ok(history),
            Err(StorageError::KeyNotFound(_)) => Ok(History::new()),
            Err(err) => Err(GameError::Storage(err.to_string())),
        }
    }

    fn save(&mut self, history: &History) -> planes_core::Result<()> {
        LocalStorage::set(History::KEY, history).map_err(|err| GameError::Storage(err.to_string()))
    }
}

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Formats the date part of `time` the way the browser's locale would.
pub(crate) fn locale_date(time: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(time.timestamp_millis() as f64));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_key_matches_existing_saves() {
        assert_eq!(<History as StorageKey>::KEY, "planes10");
    }
}
