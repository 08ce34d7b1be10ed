use tracing::warn;

/// Where the session credential lives between requests.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Bearer token kept in `window.localStorage`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("local storage unavailable: {err:?}");
                None
            }
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(err) => {
                warn!("failed to read {}: {err:?}", self.key);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.set_item(&self.key, token) {
                warn!("failed to store {}: {err:?}", self.key);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(&self.key) {
                warn!("failed to remove {}: {err:?}", self.key);
            }
        }
    }
}
