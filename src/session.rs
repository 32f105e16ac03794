//! Session Store
//!
//! Auth token, username and user id kept in persistent key-value storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
use crate::error::{ApiError, ApiResult};

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ApiResult<()>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let storage = Self::storage().ok_or_else(|| ApiError::Browser("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ApiError::Browser(format!("localStorage write failed: {:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persisted login state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: Option<String>,
    pub user_id: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore<K> {
    kv: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    pub fn token(&self) -> Option<String> {
        self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored session; `None` without a token
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            username: self.kv.get(USERNAME_KEY),
            user_id: self.kv.get(USER_ID_KEY).and_then(|id| id.parse().ok()),
        })
    }

    pub fn persist(&self, session: &Session) -> ApiResult<()> {
        self.kv.set(TOKEN_KEY, &session.token)?;
        match &session.username {
            Some(name) => self.kv.set(USERNAME_KEY, name)?,
            None => self.kv.remove(USERNAME_KEY),
        }
        match session.user_id {
            Some(id) => self.kv.set(USER_ID_KEY, &id.to_string())?,
            None => self.kv.remove(USER_ID_KEY),
        }
        Ok(())
    }

    /// Remove all three session keys
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USERNAME_KEY, USER_ID_KEY] {
            self.kv.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "t1".to_string(),
            username: Some("alice".to_string()),
            user_id: Some(7),
        }
    }

    #[test]
    fn test_persist_and_load() {
        let store = SessionStore::new(MemoryStore::new());
        store.persist(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());
        store.persist(&session()).unwrap();
        assert_eq!(kv.len(), 3);

        store.clear();
        assert_eq!(kv.len(), 0);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_no_session_without_token() {
        let kv = MemoryStore::new();
        kv.set(USERNAME_KEY, "alice").unwrap();
        let store = SessionStore::new(kv);
        assert!(store.load().is_none());
    }
}
