//! Project registry backed by a plain directory.
//!
//! Membership is whatever directories exist directly under the root; there is
//! no index file. Nothing is cached and nothing is locked: every query lists
//! the directory again, and two processes creating the same project at the
//! same time can both pass the existence check.

// Standard library
use std::fs;
use std::path::{Path, PathBuf};

// External crates
use anyhow::{anyhow, Context};
use tom_core::error::{Result, TomError};
use tom_core::file_system::list_dirs;
use tracing::debug;

// Internal imports
use crate::binding::{host_token, PortBinding};
use crate::compose::{render_scaffold, ComposeDocument, COMPOSE_FILE, IGNORE_CONTENT, IGNORE_FILE};

/// Pattern that matches every project in [`ProjectRegistry::list_matching`].
pub const MATCH_ALL: &str = "*";

/// Result of [`ProjectRegistry::scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Something already occupies the project path; nothing was written.
    AlreadyExists,
    Created {
        path: PathBuf,
        /// Host port that another project already declares, if any.
        conflict: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    root: PathBuf,
}

impl ProjectRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the project directory. The project does not have to exist.
    ///
    /// Names that are empty, `.`/`..`, or contain a path separator are
    /// rejected so a name can never point outside the root.
    pub fn project_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains(std::path::MAIN_SEPARATOR)
        {
            return Err(TomError::Validation(format!(
                "'{}' is not a valid project name",
                name
            )));
        }
        Ok(self.root.join(name))
    }

    pub fn compose_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.project_path(name)?.join(COMPOSE_FILE))
    }

    /// A project exists iff its directory exists, compose file or not.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.project_path(name)?.is_dir())
    }

    /// Names of all projects, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        list_dirs(&self.root)
            .with_context(|| format!("Failed to list projects in {}", self.root.display()))
            .map_err(TomError::from)
    }

    /// Project names matching any of `patterns`, one entry per matching pattern.
    ///
    /// A pattern matches when it is `*` or a substring of the name. A project
    /// matched by two patterns appears twice; callers print the result as is.
    pub fn list_matching(&self, patterns: &[String]) -> Result<Vec<String>> {
        let mut matches = Vec::new();
        for name in self.names()? {
            for pattern in patterns {
                if pattern == MATCH_ALL || name.contains(pattern.as_str()) {
                    matches.push(name.clone());
                }
            }
        }
        Ok(matches)
    }

    /// Raw port bindings declared by one project.
    ///
    /// A project without a compose file declares nothing. A malformed compose
    /// file is an error.
    pub fn scan_ports(&self, name: &str) -> Result<Vec<PortBinding>> {
        let compose_path = self.compose_path(name)?;
        let bindings = match ComposeDocument::load(&compose_path)? {
            Some(document) => document.bindings().cloned().collect(),
            None => Vec::new(),
        };
        debug!(project = name, count = bindings.len(), "scanned port bindings");
        Ok(bindings)
    }

    /// Whether any project declares a binding whose host token equals `host_port`.
    ///
    /// Projects are scanned in name order and the scan stops at the first
    /// match, so a malformed compose file after the match is not reported.
    pub fn is_port_in_use(&self, host_port: &str) -> Result<bool> {
        for name in self.names()? {
            if let Some(binding) = self
                .scan_ports(&name)?
                .iter()
                .find(|binding| binding.claims(host_port))
            {
                debug!(project = %name, binding = %binding, "host port already claimed");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Projects with at least one binding, paired with their raw bindings.
    pub fn port_summary(&self) -> Result<Vec<(String, Vec<PortBinding>)>> {
        let mut summary = Vec::new();
        for name in self.names()? {
            let bindings = self.scan_ports(&name)?;
            if !bindings.is_empty() {
                summary.push((name, bindings));
            }
        }
        Ok(summary)
    }

    /// Creates a project directory with an ignore file and a compose file.
    ///
    /// The host token of `port` is checked against every existing project
    /// first; a conflict does not stop creation, it only adds a warning
    /// comment to the compose file.
    ///
    /// A non-directory entry under the project's name is not a project, so it
    /// is reported as an error instead of [`CreateOutcome::AlreadyExists`].
    pub fn scaffold(&self, name: &str, image: &str, port: &str) -> Result<CreateOutcome> {
        let path = self.project_path(name)?;
        if path.is_dir() {
            return Ok(CreateOutcome::AlreadyExists);
        }
        if path.exists() {
            return Err(anyhow!("{} exists and is not a project directory", path.display()).into());
        }

        let host = host_token(port);
        let conflict = if self.is_port_in_use(host)? {
            Some(host.to_string())
        } else {
            None
        };

        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create project directory {}", path.display()))?;
        fs::write(path.join(IGNORE_FILE), IGNORE_CONTENT)
            .with_context(|| format!("Failed to write {}", IGNORE_FILE))?;
        fs::write(
            path.join(COMPOSE_FILE),
            render_scaffold(image, port, conflict.as_deref()),
        )
        .with_context(|| format!("Failed to write {}", COMPOSE_FILE))?;

        debug!(project = name, path = %path.display(), conflict = ?conflict, "project scaffolded");
        Ok(CreateOutcome::Created { path, conflict })
    }

    /// Deletes a project directory tree. Returns `false` if there was no such project.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let path = self.project_path(name)?;
        if !path.is_dir() {
            return Ok(false);
        }
        fs::remove_dir_all(&path)
            .with_context(|| format!("Failed to delete {}", path.display()))?;
        debug!(project = name, "project removed");
        Ok(true)
    }
}
