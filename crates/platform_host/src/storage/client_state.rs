//! Small client-side state values (session object, locale) persisted as JSON text per key.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Key under which the admin session object is persisted.
pub const ADMIN_SESSION_KEY: &str = "admin_session";
/// Key under which the storefront locale preference is persisted.
pub const LOCALE_KEY: &str = "storefront.locale";

/// Object-safe boxed future used by [`ClientStateStore`] async methods.
pub type ClientStateFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small client-persisted values.
pub trait ClientStateStore {
    /// Loads the raw JSON text stored under `key`.
    fn load_raw<'a>(
        &'a self,
        key: &'a str,
    ) -> ClientStateFuture<'a, Result<Option<String>, String>>;

    /// Stores raw JSON text under `key`.
    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> ClientStateFuture<'a, Result<(), String>>;

    /// Removes `key`.
    fn remove<'a>(&'a self, key: &'a str) -> ClientStateFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never remembers anything.
pub struct NoopClientStateStore;

impl ClientStateStore for NoopClientStateStore {
    fn load_raw<'a>(
        &'a self,
        _key: &'a str,
    ) -> ClientStateFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_raw<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> ClientStateFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn remove<'a>(&'a self, _key: &'a str) -> ClientStateFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory client state keyed by string. Clones share storage.
pub struct MemoryClientStateStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl ClientStateStore for MemoryClientStateStore {
    fn load_raw<'a>(
        &'a self,
        key: &'a str,
    ) -> ClientStateFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> ClientStateFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> ClientStateFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed value.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_state_with<S: ClientStateStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_state_with<S: ClientStateStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Remembered {
        locale: String,
    }

    #[test]
    fn memory_store_round_trip_and_remove() {
        let store = MemoryClientStateStore::default();
        let store_obj: &dyn ClientStateStore = &store;

        block_on(store_obj.save_raw(LOCALE_KEY, "\"en\"")).expect("save");
        assert_eq!(
            block_on(store_obj.load_raw(LOCALE_KEY)).expect("load"),
            Some("\"en\"".to_string())
        );
        block_on(store_obj.remove(LOCALE_KEY)).expect("remove");
        assert_eq!(block_on(store_obj.load_raw(LOCALE_KEY)).expect("load"), None);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryClientStateStore::default();
        block_on(save_state_with(
            &store,
            "prefs",
            &Remembered {
                locale: "vi".to_string(),
            },
        ))
        .expect("save typed");
        let loaded: Option<Remembered> =
            block_on(load_state_with(&store, "prefs")).expect("load typed");
        assert_eq!(
            loaded,
            Some(Remembered {
                locale: "vi".to_string()
            })
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let store = MemoryClientStateStore::default();
        block_on(store.save_raw("prefs", "{not json")).expect("save raw");
        assert!(block_on(load_state_with::<_, Remembered>(&store, "prefs")).is_err());
    }
}
