use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub upload_dir: PathBuf,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
            public_dir: PathBuf::from("public"),
            upload_dir: PathBuf::from("."),
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = EnvConfig::default();

        EnvConfig {
            host: Self::get_env("HOST").unwrap_or(defaults.host),
            port: Self::get_env("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: Self::get_env("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            upload_dir: Self::get_env("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
