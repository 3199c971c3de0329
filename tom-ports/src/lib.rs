//! Project registry and port conflict detection.
//!
//! A registry is a plain directory whose subdirectories are projects. Each
//! project may carry a `docker-compose.yml`; the host side of every declared
//! port binding counts as a claim, and [`ProjectRegistry::is_port_in_use`]
//! checks a candidate host port against the claims of all projects.

pub mod binding;
pub mod compose;
pub mod registry;

pub use binding::PortBinding;
pub use compose::{ComposeDocument, ComposeService, COMPOSE_FILE, IGNORE_FILE};
pub use registry::{CreateOutcome, ProjectRegistry};
