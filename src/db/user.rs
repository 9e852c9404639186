use std::collections::HashMap;

use log::info;

use crate::db::memory_service::MemoryService;
use crate::types::{error::AppError, user::User};

impl MemoryService {
    /// Insert or overwrite the record stored under the submitted email.
    pub fn create_user(&self, user: User) -> User {
        self.put(&user.email, user.clone());
        info!("DB: {}", self.len());
        user
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.get(email).ok_or_else(AppError::user_not_found)
    }

    /// Overwrite the non-empty fields of the record under `email`. The record
    /// stays under `email` even when its own email field changes.
    pub fn update_user(&self, email: &str, incoming: User) -> Result<User, AppError> {
        let mut users = self.lock();
        let user = users.get_mut(email).ok_or_else(AppError::user_not_found)?;
        user.merge(incoming);
        Ok(user.clone())
    }

    /// Remove the record under `email` and hand back what is left.
    pub fn delete_user(&self, email: &str) -> Result<HashMap<String, User>, AppError> {
        let mut users = self.lock();
        users.remove(email).ok_or_else(AppError::user_not_found)?;
        Ok(users.clone())
    }
}
