use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use user_service::config::EnvConfig;
use user_service::db::memory_service::MemoryService;

pub mod client;

pub struct TestContext {
    pub db: Arc<MemoryService>,
    pub config: EnvConfig,
    pub _upload_dir: TempDir,
    pub _public_dir: TempDir,
}

impl TestContext {
    pub fn new() -> TestContext {
        let upload_dir = TempDir::new().expect("Failed to create upload dir");
        let public_dir = TempDir::new().expect("Failed to create public dir");

        TestContext {
            db: Arc::new(MemoryService::new()),
            config: get_test_config(upload_dir.path(), public_dir.path()),
            _upload_dir: upload_dir,
            _public_dir: public_dir,
        }
    }
}

pub fn get_test_config(upload_dir: &Path, public_dir: &Path) -> EnvConfig {
    EnvConfig {
        host: "127.0.0.1".to_string(),
        port: 9090,
        public_dir: public_dir.to_path_buf(),
        upload_dir: upload_dir.to_path_buf(),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use user_service::types::user::User;

    pub fn sample_user() -> User {
        User::new("a@x.com", "p1")
    }

    pub fn sample_user_with_email(email: &str) -> User {
        User::new(email, "secret")
    }
}
