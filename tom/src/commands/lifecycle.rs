//! Container lifecycle commands delegated to the docker CLI.
//!
//! A first passthrough argument that does not start with `-` names a project;
//! the rest goes to docker untouched. Docker's exit status becomes tom's.

use tom_config::TomConfig;
use tom_core::command_stream::{capture_stdout, run_relayed};
use tom_core::error::Result;
use tom_core::file_system::has_file;
use tom_core::tom_println;
use tom_ports::{ProjectRegistry, COMPOSE_FILE};
use tracing::debug;

const DOCKER: &str = "docker";

/// What a lifecycle command resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run docker with these arguments.
    Docker(Vec<String>),
    /// The named project does not exist; nothing runs.
    MissingProject(String),
}

/// Splits off a leading project name, if there is one.
fn split_target(args: &[String]) -> (Option<&str>, &[String]) {
    match args.split_first() {
        Some((first, rest)) if !first.starts_with('-') => (Some(first.as_str()), rest),
        _ => (None, args),
    }
}

fn with_passthrough(mut head: Vec<String>, passthrough: &[String]) -> Vec<String> {
    head.extend_from_slice(passthrough);
    head
}

/// `docker compose [-f <project compose file>] <verb> <args>`
pub fn compose_invocation(
    registry: &ProjectRegistry,
    verb: &str,
    args: &[String],
) -> Result<Invocation> {
    let invocation = match split_target(args) {
        (Some(name), rest) => {
            if !registry.exists(name)? {
                return Ok(Invocation::MissingProject(name.to_string()));
            }
            let compose_file = registry.compose_path(name)?;
            Invocation::Docker(with_passthrough(
                vec![
                    "compose".to_string(),
                    "-f".to_string(),
                    compose_file.to_string_lossy().into_owned(),
                    verb.to_string(),
                ],
                rest,
            ))
        }
        (None, rest) => Invocation::Docker(with_passthrough(
            vec!["compose".to_string(), verb.to_string()],
            rest,
        )),
    };
    Ok(invocation)
}

/// `ps` picks between compose and plain docker.
///
/// `--docker` always lists global containers. Without a project name, the
/// current directory's compose file is used if there is one.
pub fn ps_invocation(
    registry: &ProjectRegistry,
    config: &TomConfig,
    docker: bool,
    args: &[String],
) -> Result<Invocation> {
    if docker {
        return Ok(Invocation::Docker(with_passthrough(
            vec!["ps".to_string()],
            args,
        )));
    }

    match split_target(args) {
        (Some(_), _) => compose_invocation(registry, "ps", args),
        (None, rest) if has_file(&config.working_dir, COMPOSE_FILE) => Ok(Invocation::Docker(
            with_passthrough(vec!["compose".to_string(), "ps".to_string()], rest),
        )),
        (None, rest) => Ok(Invocation::Docker(with_passthrough(
            vec!["ps".to_string()],
            rest,
        ))),
    }
}

fn run(invocation: Invocation) -> Result<()> {
    match invocation {
        Invocation::Docker(args) => {
            debug!(?args, "delegating to docker");
            run_relayed(DOCKER, &args, None)
        }
        Invocation::MissingProject(name) => {
            tom_println!("project '{}' does not exist", name);
            Ok(())
        }
    }
}

pub fn handle_compose(registry: &ProjectRegistry, verb: &str, args: &[String]) -> Result<()> {
    run(compose_invocation(registry, verb, args)?)
}

pub fn handle_ps(
    registry: &ProjectRegistry,
    config: &TomConfig,
    docker: bool,
    args: &[String],
) -> Result<()> {
    run(ps_invocation(registry, config, docker, args)?)
}

/// Stops every container on the host, not only tom's.
pub fn handle_stop_all() -> Result<()> {
    let listing = capture_stdout(DOCKER, &["ps", "-a", "-q"])?;
    let ids: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        tom_println!("no containers to stop");
        return Ok(());
    }

    debug!(count = ids.len(), "stopping all containers");
    let mut args = vec!["stop"];
    args.extend(ids);
    run_relayed(DOCKER, &args, None)
}

pub fn handle_wash() -> Result<()> {
    run_relayed(DOCKER, &["container", "prune", "-f"], None)
}
