//! `tom new`: scaffold a project directory.

use std::path::Path;

use tom_config::{TomConfig, NO_EDITOR};
use tom_core::command_stream::run_attached;
use tom_core::error::Result;
use tom_core::{tom_println, tom_warning};
use tom_ports::{CreateOutcome, ProjectRegistry, COMPOSE_FILE};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct NewOptions {
    pub name: String,
    pub image: Option<String>,
    pub port: Option<String>,
    pub editor: Option<String>,
    pub no_git: bool,
}

pub fn handle_new(registry: &ProjectRegistry, config: &TomConfig, opts: NewOptions) -> Result<()> {
    let image = opts.image.as_deref().unwrap_or(config.image());
    let port = opts.port.as_deref().unwrap_or(config.port());
    let editor = opts.editor.as_deref().unwrap_or(config.editor());
    let init_git = config.git() && !opts.no_git;

    let path = match registry.scaffold(&opts.name, image, port)? {
        CreateOutcome::AlreadyExists => {
            tom_println!("project '{}' already exists", opts.name);
            return Ok(());
        }
        CreateOutcome::Created { path, conflict } => {
            if let Some(host) = conflict {
                tom_warning!(
                    "host port {} is already declared by another project, see {}",
                    host,
                    COMPOSE_FILE
                );
            }
            path
        }
    };

    // Later steps are best effort; the project stays even if they fail.
    if editor != NO_EDITOR {
        best_effort(editor, &[COMPOSE_FILE], &path);
    }

    if init_git {
        best_effort("git", &["init", "-q"], &path);
        best_effort("git", &["add", "."], &path);
        best_effort("git", &["commit", "-q", "-m", "init project"], &path);
    }

    info!(project = %opts.name, path = %path.display(), "project created");
    tom_println!("project '{}' created successfully", opts.name);
    Ok(())
}

fn best_effort(program: &str, args: &[&str], dir: &Path) {
    match run_attached(program, args, Some(dir)) {
        Ok(status) if !status.success() => {
            warn!(program, ?args, %status, "child process failed");
        }
        Ok(_) => {}
        Err(e) => tom_warning!("{}", e),
    }
}
