//! Configuration for the tom CLI.
//!
//! Everything is resolved once at startup into a [`TomConfig`] that the
//! command handlers receive as a parameter. The environment is not consulted
//! again after [`TomConfig::resolve`].
//!
//! Layout under `$TOM_HOME` (default: the current directory):
//!
//! ```text
//! $TOM_HOME/
//! ├── config.yaml      optional user defaults
//! └── projects/        registry root, one directory per project
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tom_core::error::{Result, TomError};
use tracing::debug;

pub const HOME_ENV: &str = "TOM_HOME";
pub const REGISTRY_DIR: &str = "projects";
pub const CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_EDITOR: &str = "vim";
pub const DEFAULT_IMAGE: &str = "hello-world:latest";
pub const DEFAULT_PORT: &str = "8080:80";

/// Editor value that turns editor launching off.
pub const NO_EDITOR: &str = "none";

/// User defaults read from `$TOM_HOME/config.yaml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDefaults {
    /// Editor used by `new` and `edit` when `--editor` is not given
    #[serde(default)]
    pub editor: Option<String>,

    /// Base image for new projects
    #[serde(default)]
    pub image: Option<String>,

    /// Port mapping for new projects
    #[serde(default)]
    pub port: Option<String>,

    /// Whether `new` initializes a git repository
    #[serde(default)]
    pub git: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TomConfig {
    /// Directory tom was started from; used when a command names no project
    pub working_dir: PathBuf,
    pub registry_root: PathBuf,
    pub defaults: UserDefaults,
}

impl TomConfig {
    /// Resolves configuration from the process environment and working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_with(|key| std::env::var(key).ok(), &cwd)
    }

    /// Resolves configuration from an injected environment lookup.
    ///
    /// A relative `TOM_HOME` is taken relative to `cwd`. The registry root is
    /// created if it does not exist yet.
    pub fn resolve_with<F>(lookup: F, cwd: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_home = lookup(HOME_ENV).unwrap_or_else(|| ".".to_string());
        let expanded = PathBuf::from(shellexpand::tilde(&raw_home).as_ref());
        let home = absolutize(&expanded, cwd);

        let registry_root = home.join(REGISTRY_DIR);
        fs::create_dir_all(&registry_root).map_err(|e| {
            TomError::Config(format!(
                "cannot create registry root {}: {}",
                registry_root.display(),
                e
            ))
        })?;

        let defaults = load_defaults(&home.join(CONFIG_FILE))?;
        debug!(home = %home.display(), registry = %registry_root.display(), "configuration resolved");

        Ok(Self {
            working_dir: cwd.to_path_buf(),
            registry_root,
            defaults,
        })
    }

    pub fn editor(&self) -> &str {
        self.defaults.editor.as_deref().unwrap_or(DEFAULT_EDITOR)
    }

    pub fn image(&self) -> &str {
        self.defaults.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    pub fn port(&self) -> &str {
        self.defaults.port.as_deref().unwrap_or(DEFAULT_PORT)
    }

    pub fn git(&self) -> bool {
        self.defaults.git.unwrap_or(true)
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn load_defaults(path: &Path) -> Result<UserDefaults> {
    if !path.is_file() {
        return Ok(UserDefaults::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(UserDefaults::default());
    }

    serde_yaml_ng::from_str(&content)
        .map_err(|e| TomError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolve_in(home: &Path) -> Result<TomConfig> {
        let home = home.to_string_lossy().into_owned();
        TomConfig::resolve_with(
            move |key| (key == HOME_ENV).then(|| home.clone()),
            Path::new("/"),
        )
    }

    #[test]
    fn creates_registry_root_under_home() {
        let temp = TempDir::new().unwrap();
        let config = resolve_in(temp.path()).unwrap();

        assert_eq!(config.registry_root, temp.path().join("projects"));
        assert!(config.registry_root.is_dir());
        assert_eq!(config.editor(), DEFAULT_EDITOR);
        assert_eq!(config.image(), DEFAULT_IMAGE);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert!(config.git());
    }

    #[test]
    fn unset_home_means_current_directory() {
        let temp = TempDir::new().unwrap();
        let config = TomConfig::resolve_with(|_| None, temp.path()).unwrap();

        assert_eq!(config.working_dir, temp.path());
        assert_eq!(config.registry_root, temp.path().join("projects"));
    }

    #[test]
    fn relative_home_is_joined_to_cwd() {
        let temp = TempDir::new().unwrap();
        let config = TomConfig::resolve_with(
            |key| (key == HOME_ENV).then(|| "./state".to_string()),
            temp.path(),
        )
        .unwrap();

        assert_eq!(config.registry_root, temp.path().join("state").join("projects"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "editor: nano\nimage: nginx:alpine\nport: \"9000:80\"\ngit: false\n",
        )
        .unwrap();

        let config = resolve_in(temp.path()).unwrap();
        assert_eq!(config.editor(), "nano");
        assert_eq!(config.image(), "nginx:alpine");
        assert_eq!(config.port(), "9000:80");
        assert!(!config.git());
    }

    #[test]
    fn empty_config_file_is_allowed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "\n").unwrap();

        let config = resolve_in(temp.path()).unwrap();
        assert_eq!(config.defaults, UserDefaults::default());
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "editor: [unclosed\n").unwrap();

        match resolve_in(temp.path()) {
            Err(TomError::Config(message)) => assert!(message.contains(CONFIG_FILE)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "editr: nano\n").unwrap();

        assert!(matches!(resolve_in(temp.path()), Err(TomError::Config(_))));
    }
}
