use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::info;

use crate::types::user::User;

/// Process-wide user store keyed by email. Lives only as long as the process.
#[derive(Default)]
pub struct MemoryService {
    pub(crate) users: Mutex<HashMap<String, User>>,
}

impl MemoryService {
    pub fn new() -> Self {
        info!("Initializing in-memory user store.");
        Self::default()
    }

    /// Every mutation is a single map operation, so a poisoned guard still
    /// holds a consistent map.
    pub(crate) fn lock(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn put(&self, email: &str, user: User) {
        self.lock().insert(email.to_string(), user);
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.lock().get(email).cloned()
    }

    pub fn delete(&self, email: &str) -> Option<User> {
        self.lock().remove(email)
    }

    /// All records, in no particular order.
    pub fn list(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
