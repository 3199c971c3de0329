//! `tom edit`: open a project's compose file in an editor.

use tom_config::{TomConfig, NO_EDITOR};
use tom_core::command_stream::run_relayed;
use tom_core::error::Result;
use tom_core::file_system::has_file;
use tom_core::tom_println;
use tom_ports::{ProjectRegistry, COMPOSE_FILE};

pub fn handle_edit(
    registry: &ProjectRegistry,
    config: &TomConfig,
    name: Option<&str>,
    editor: Option<&str>,
) -> Result<()> {
    let dir = match name {
        Some(name) => {
            if !registry.exists(name)? {
                tom_println!("project '{}' does not exist", name);
                return Ok(());
            }
            registry.project_path(name)?
        }
        None => config.working_dir.clone(),
    };

    let editor = editor.unwrap_or(config.editor());
    if editor == NO_EDITOR {
        tom_println!("no editor specified");
        return Ok(());
    }

    if !has_file(&dir, COMPOSE_FILE) {
        tom_println!("unknown project or docker compose file not found");
        return Ok(());
    }

    run_relayed(editor, &[COMPOSE_FILE], Some(&dir))
}
