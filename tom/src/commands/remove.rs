//! `tom rm`: delete a project directory.

use dialoguer::Confirm;
use tom_core::error::{Result, TomError};
use tom_core::tom_println;
use tom_ports::ProjectRegistry;
use tracing::debug;

/// Deletes a project after confirmation.
///
/// `confirm` is asked only when the project exists and `force` is off.
pub fn handle_rm<F>(registry: &ProjectRegistry, name: &str, force: bool, confirm: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<bool>,
{
    if !registry.exists(name)? {
        tom_println!("project '{}' does not exist", name);
        return Ok(());
    }

    if !force {
        let prompt = format!("are you sure you want to delete project '{}'?", name);
        if !confirm(&prompt)? {
            debug!(project = name, "removal declined");
            return Ok(());
        }
    }

    if registry.remove(name)? {
        tom_println!("project '{}' deleted successfully", name);
    } else {
        // Removed by someone else between the check and the delete.
        tom_println!("project '{}' does not exist", name);
    }
    Ok(())
}

/// Asks on the terminal; anything but an explicit yes declines.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| TomError::Prompt(e.to_string()))
}
