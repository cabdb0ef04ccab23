//! `localStorage`-backed client-state store holding the admin session and UI language.

use platform_host::{ClientStateFuture, ClientStateStore};

#[derive(Debug, Clone, Copy, Default)]
/// Client-state store backed by `window.localStorage`.
///
/// Off wasm32 there is no storage: reads find nothing and writes succeed without effect.
pub struct WebClientStateStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl WebClientStateStore {
    fn read(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            // Private browsing may deny storage; that reads as "nothing saved".
            let Ok(storage) = local_storage() else {
                return Ok(None);
            };
            storage
                .get_item(key)
                .map_err(|err| format!("localStorage get_item({key}) failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|err| format!("localStorage set_item({key}) failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn clear(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| format!("localStorage remove_item({key}) failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

impl ClientStateStore for WebClientStateStore {
    fn load_raw<'a>(
        &'a self,
        key: &'a str,
    ) -> ClientStateFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.read(key) })
    }

    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> ClientStateFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.write(key, raw_json) })
    }

    fn remove<'a>(&'a self, key: &'a str) -> ClientStateFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.clear(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use platform_host::{load_state_with, save_state_with, LOCALE_KEY};

    use super::*;

    #[test]
    fn native_store_reads_nothing_and_accepts_writes() {
        let store = WebClientStateStore;
        block_on(save_state_with(&store, LOCALE_KEY, &"en")).expect("save");
        assert_eq!(
            block_on(load_state_with::<_, String>(&store, LOCALE_KEY)).expect("load"),
            None
        );
        block_on(store.remove(LOCALE_KEY)).expect("remove");
    }
}
