//! Read-only registry commands: `ls`, `path` and `ports`.

use tom_core::error::Result;
use tom_core::tom_println;
use tom_ports::registry::MATCH_ALL;
use tom_ports::{PortBinding, ProjectRegistry};

pub fn handle_ls(registry: &ProjectRegistry, patterns: Vec<String>) -> Result<()> {
    if registry.names()?.is_empty() {
        tom_println!("no projects available");
        return Ok(());
    }

    let patterns = if patterns.is_empty() {
        vec![MATCH_ALL.to_string()]
    } else {
        patterns
    };

    for name in registry.list_matching(&patterns)? {
        tom_println!("{}", name);
    }
    Ok(())
}

pub fn handle_path(registry: &ProjectRegistry, name: &str) -> Result<()> {
    tom_println!("{}", registry.project_path(name)?.display());
    Ok(())
}

pub fn handle_ports(registry: &ProjectRegistry) -> Result<()> {
    let summary = registry.port_summary()?;
    if summary.is_empty() {
        tom_println!("no ports found");
        return Ok(());
    }

    for (name, bindings) in summary {
        tom_println!("{}: {}", name, join_bindings(&bindings));
    }
    Ok(())
}

fn join_bindings(bindings: &[PortBinding]) -> String {
    bindings
        .iter()
        .map(PortBinding::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
