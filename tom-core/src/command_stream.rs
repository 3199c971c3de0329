// Standard library
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

// External crates
use crate::error::{Result, TomError};
use duct::cmd;
use tracing::debug;
use which::which;

fn render<A: AsRef<OsStr>>(program: &str, args: &[A]) -> String {
    let mut full_command = program.to_string();
    for arg in args {
        full_command.push(' ');
        full_command.push_str(&arg.as_ref().to_string_lossy());
    }
    full_command
}

fn resolve(program: &str) -> Result<PathBuf> {
    which(program).map_err(|_| TomError::Dependency(program.to_string()))
}

/// Runs a program attached to the current terminal and waits for it.
///
/// The child inherits stdin, stdout and stderr. A non-zero exit is not an
/// error here; callers decide what the status means. `dir` sets the child's
/// working directory.
pub fn run_attached<A: AsRef<OsStr>>(
    program: &str,
    args: &[A],
    dir: Option<&Path>,
) -> Result<ExitStatus> {
    let executable = resolve(program)?;
    debug!(command = %render(program, args), dir = ?dir, "spawning child");

    let mut expression = cmd(executable, args.iter().map(|a| a.as_ref())).unchecked();
    if let Some(dir) = dir {
        expression = expression.dir(dir);
    }

    let output = expression.run().map_err(|e| {
        TomError::Command(format!("Failed to run '{}': {}", render(program, args), e))
    })?;
    debug!(status = ?output.status, "child finished");
    Ok(output.status)
}

/// Runs a program attached to the terminal and relays a failing exit status
/// as [`TomError::ChildExited`].
pub fn run_relayed<A: AsRef<OsStr>>(program: &str, args: &[A], dir: Option<&Path>) -> Result<()> {
    let status = run_attached(program, args, dir)?;
    if status.success() {
        Ok(())
    } else {
        Err(TomError::ChildExited {
            program: program.to_string(),
            // Killed by a signal: no code to relay.
            code: status.code().unwrap_or(1),
        })
    }
}

/// Runs a program and returns its captured stdout. Stderr still reaches the terminal.
pub fn capture_stdout<A: AsRef<OsStr>>(program: &str, args: &[A]) -> Result<String> {
    let executable = resolve(program)?;
    debug!(command = %render(program, args), "capturing child output");

    let output = cmd(executable, args.iter().map(|a| a.as_ref()))
        .stdout_capture()
        .unchecked()
        .run()
        .map_err(|e| {
            TomError::Command(format!("Failed to run '{}': {}", render(program, args), e))
        })?;

    if !output.status.success() {
        return Err(TomError::ChildExited {
            program: program.to_string(),
            code: output.status.code().unwrap_or(1),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_program_and_args() {
        assert_eq!(
            render("docker", &["compose", "up", "-d"]),
            "docker compose up -d"
        );
        assert_eq!(render::<&str>("docker", &[]), "docker");
    }

    #[test]
    fn missing_tool_is_a_dependency_error() {
        let missing = "tom-definitely-not-installed-binary";
        match run_attached::<&str>(missing, &[], None) {
            Err(TomError::Dependency(name)) => assert_eq!(name, missing),
            other => panic!("expected dependency error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn relayed_failure_carries_exit_code() {
        match run_relayed("sh", &["-c", "exit 3"], None) {
            Err(TomError::ChildExited { program, code }) => {
                assert_eq!(program, "sh");
                assert_eq!(code, 3);
            }
            other => panic!("expected child exit error, got {:?}", other),
        }
        assert!(run_relayed("sh", &["-c", "exit 0"], None).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn attached_run_uses_working_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let status = run_attached("sh", &["-c", "touch marker"], Some(dir.path()))
            .expect("sh should run");
        assert!(status.success());
        assert!(dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn capture_returns_stdout() {
        let out = capture_stdout("sh", &["-c", "printf 'a\\nb\\n'"]).expect("sh should run");
        assert_eq!(out, "a\nb\n");
    }
}
