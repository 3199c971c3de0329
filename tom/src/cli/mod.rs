// CLI argument parsing and definitions

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tom")]
#[command(about = "Common commands for daily project development with Docker")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create new projects
    New {
        /// Project name
        name: String,

        /// Main port mapping (default: 8080:80)
        #[arg(short, long)]
        port: Option<String>,

        /// Base image (default: hello-world:latest)
        #[arg(short, long)]
        image: Option<String>,

        /// Do not initialize a git repository
        #[arg(long)]
        no_git: bool,

        /// Editor to open the docker-compose.yml file with ("none" to skip)
        #[arg(long)]
        editor: Option<String>,
    },
    /// List projects
    Ls {
        /// Substring filters; "*" matches every project
        patterns: Vec<String>,
    },
    /// Print project absolute path
    Path {
        /// Project name
        name: String,
    },
    /// List all ports used by the projects
    Ports,
    /// Edit docker-compose.yml files
    Edit {
        /// Editor to open the file with
        #[arg(long)]
        editor: Option<String>,

        /// Project name (defaults to the current directory)
        name: Option<String>,
    },
    /// Remove projects
    Rm {
        /// Force delete without confirmation
        #[arg(short, long)]
        force: bool,

        /// Project name
        name: String,
    },
    /// Start containers
    Up {
        /// Optional project name followed by arguments for `docker compose up`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Stop containers
    Down {
        /// Stop all containers
        #[arg(short, long)]
        all: bool,

        /// Optional project name followed by arguments for `docker compose down`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List containers from a project or globally
    Ps {
        /// List global containers
        #[arg(short, long)]
        docker: bool,

        /// Optional project name followed by arguments for `ps`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Prune stopped containers
    Wash,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::New { .. } => "new",
            Command::Ls { .. } => "ls",
            Command::Path { .. } => "path",
            Command::Ports => "ports",
            Command::Edit { .. } => "edit",
            Command::Rm { .. } => "rm",
            Command::Up { .. } => "up",
            Command::Down { .. } => "down",
            Command::Ps { .. } => "ps",
            Command::Wash => "wash",
        }
    }
}
