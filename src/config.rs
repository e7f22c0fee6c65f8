//! Configuration for streamlist.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (`--seed`, applied by the CLI)
//! 2. Environment variables (STREAMLIST_HOME, STREAMLIST_SEED, STREAMLIST_NO_ICON)
//! 3. Config file (.streamlist/config.yaml)
//! 4. Defaults (~/.streamlist, built-in seed)
//!
//! Config file discovery:
//! - Searches current directory and parents for .streamlist/config.yaml
//! - `paths.home` is relative to the .streamlist/ directory
//! - `paths.seed` is relative to the project root (parent of .streamlist/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Name of the per-project config directory
pub const CONFIG_DIR: &str = ".streamlist";

/// Seed file looked up in the home directory when nothing else is set
pub const DEFAULT_SEED_FILE: &str = "seed.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Home directory (relative to the .streamlist/ directory)
    pub home: Option<String>,
    /// Seed file (relative to the project root)
    pub seed: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Prefix the watch list header with an icon
    pub icon: Option<bool>,
}

/// Values taken from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub home: Option<PathBuf>,
    pub seed: Option<PathBuf>,
    pub no_icon: bool,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            home: std::env::var_os("STREAMLIST_HOME").map(PathBuf::from),
            seed: std::env::var_os("STREAMLIST_SEED").map(PathBuf::from),
            no_icon: std::env::var_os("STREAMLIST_NO_ICON").is_some(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to streamlist home
    pub home: PathBuf,
    /// Seed file to load (None means built-in seed)
    pub seed_file: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Display settings
    pub display: DisplaySettings,
}

#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub show_icon: bool,
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge defaults, an optional config file and environment overrides
fn resolve(
    default_home: PathBuf,
    config: Option<(&Path, &ConfigFile)>,
    env: &EnvOverrides,
) -> ResolvedConfig {
    // .streamlist/ and the project root around it
    let layout = config.map(|(path, _)| {
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let base_dir = config_dir.parent().unwrap_or(Path::new("."));
        (config_dir, base_dir)
    });

    let home = if let Some(ref env_home) = env.home {
        env_home.clone()
    } else if let (Some((_, file)), Some((config_dir, _))) = (config, layout) {
        file.paths
            .home
            .as_deref()
            .map(|h| resolve_path(config_dir, h))
            .unwrap_or(default_home)
    } else {
        default_home
    };

    let seed_file = if let Some(ref env_seed) = env.seed {
        Some(env_seed.clone())
    } else if let Some(seed) = config
        .and_then(|(_, file)| file.paths.seed.as_deref())
        .zip(layout)
        .map(|(seed, (_, base_dir))| resolve_path(base_dir, seed))
    {
        Some(seed)
    } else {
        let candidate = home.join(DEFAULT_SEED_FILE);
        candidate.exists().then_some(candidate)
    };

    let show_icon = !env.no_icon
        && config
            .and_then(|(_, file)| file.display.icon)
            .unwrap_or(true);

    ResolvedConfig {
        home,
        seed_file,
        config_file: config.map(|(path, _)| path.to_path_buf()),
        display: DisplaySettings { show_icon },
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_path = find_config_file_from(&cwd);

    let config_file = match config_path {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    let resolved = resolve(
        default_home,
        config_path.as_deref().zip(config_file.as_ref()),
        &EnvOverrides::from_env(),
    );
    debug!(?resolved, "Resolved configuration");

    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the configured seed file, if any.
pub fn seed_file() -> Result<Option<PathBuf>> {
    Ok(config()?.seed_file.clone())
}
