// Command handlers for project operations

use tom_config::TomConfig;
use tom_core::error::Result;
use tom_ports::ProjectRegistry;
use tracing::debug;

use crate::cli::Command;

// Individual command modules
pub mod edit;
pub mod lifecycle;
pub mod list;
pub mod new;
pub mod remove;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(command: Command, config: &TomConfig) -> Result<()> {
    let registry = ProjectRegistry::new(&config.registry_root);

    match command {
        Command::New {
            name,
            port,
            image,
            no_git,
            editor,
        } => {
            debug!("Handling new command");
            new::handle_new(
                &registry,
                config,
                new::NewOptions {
                    name,
                    image,
                    port,
                    editor,
                    no_git,
                },
            )
        }
        Command::Ls { patterns } => {
            debug!("Handling ls command");
            list::handle_ls(&registry, patterns)
        }
        Command::Path { name } => {
            debug!("Handling path command");
            list::handle_path(&registry, &name)
        }
        Command::Ports => {
            debug!("Handling ports command");
            list::handle_ports(&registry)
        }
        Command::Edit { editor, name } => {
            debug!("Handling edit command");
            edit::handle_edit(&registry, config, name.as_deref(), editor.as_deref())
        }
        Command::Rm { force, name } => {
            debug!("Handling rm command with force={}", force);
            remove::handle_rm(&registry, &name, force, remove::prompt_confirmation)
        }
        Command::Up { args } => {
            debug!("Handling up command");
            lifecycle::handle_compose(&registry, "up", &args)
        }
        Command::Down { all, args } => {
            debug!("Handling down command with all={}", all);
            if all {
                lifecycle::handle_stop_all()
            } else {
                lifecycle::handle_compose(&registry, "down", &args)
            }
        }
        Command::Ps { docker, args } => {
            debug!("Handling ps command with docker={}", docker);
            lifecycle::handle_ps(&registry, config, docker, &args)
        }
        Command::Wash => {
            debug!("Handling wash command");
            lifecycle::handle_wash()
        }
    }
}
