//! Typed view over a project's compose document.
//!
//! Only the parts tom reads are modelled: the `services` mapping and each
//! service's `ports` list. Absent keys default to empty; anything present
//! with the wrong shape fails the parse.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tom_core::error::{Result, TomError};

use crate::binding::PortBinding;

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const IGNORE_FILE: &str = ".dockerignore";

/// Contents written to the ignore file of a new project.
pub const IGNORE_CONTENT: &str = ".git/\n";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeDocument {
    #[serde(default)]
    pub services: IndexMap<String, ComposeService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeService {
    #[serde(default)]
    pub ports: Vec<PortBinding>,
}

impl ComposeDocument {
    /// Parses compose YAML. `path` is only used to name the file in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        Self::parse_bytes(content.as_bytes(), path)
    }

    /// Like [`ComposeDocument::parse`], but bytes that are not UTF-8 are a
    /// parse error of the named file rather than an I/O error.
    pub fn parse_bytes(content: &[u8], path: &Path) -> Result<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        // A document holding only comments deserializes as null.
        serde_yaml_ng::from_slice::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|source| TomError::Compose {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the compose file at `path`, or `None` when there is no such file.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read(path)?;
        Self::parse_bytes(&content, path).map(Some)
    }

    /// Every port binding of every service, in document order.
    pub fn bindings(&self) -> impl Iterator<Item = &PortBinding> {
        self.services.values().flat_map(|service| service.ports.iter())
    }
}

/// Renders the compose document of a freshly created project.
///
/// When `conflicting_host` is set, a warning comment naming that host port is
/// placed above the binding.
pub fn render_scaffold(image: &str, port: &str, conflicting_host: Option<&str>) -> String {
    let warning = conflicting_host
        .map(|host| {
            format!(
                "\n      # warning: host port {} was already used, it might cause conflict.",
                host
            )
        })
        .unwrap_or_default();

    format!(
        "services:
  app:
    image: '{image}'
    ports:{warning}
      - '{port}'

networks:
  app-default:
",
        image = image.replace('\'', "''"),
        warning = warning,
        port = port.replace('\'', "''"),
    )
}
