use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    #[serde(default)]
    pub debug_requests: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "web"
debug_requests = false

[identity]
url = ""
anon_key = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT`, `SUPABASE_URL` and `SUPABASE_ANON_KEY` override the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number, got '{}': {}", port, e))?;
    }
    if let Some(url) = lookup("SUPABASE_URL") {
        config.identity.url = url;
    }
    if let Some(key) = lookup("SUPABASE_ANON_KEY") {
        config.identity.anon_key = key;
    }
    Ok(())
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.identity.url.trim().is_empty() {
            anyhow::bail!("identity.url is empty: set it in config.toml or SUPABASE_URL");
        }
        if self.identity.anon_key.trim().is_empty() {
            anyhow::bail!("identity.anon_key is empty: set it in config.toml or SUPABASE_ANON_KEY");
        }
        Ok(())
    }
}

/// Get the static files directory from configuration
/// Resolves relative paths relative to the executable directory when it
/// exists there, otherwise relative to the current directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = PathBuf::from(&config.server.static_dir);
    if dir.is_absolute() {
        return dir;
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(&dir);
            if resolved.is_dir() {
                return resolved;
            }
        }
    }

    dir
}
