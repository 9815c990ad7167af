use clap::{Args as ClapArgs, Parser, Subcommand};
use springboot_setup::application::dto::{DEFAULT_GROUP_ID, DEFAULT_PORT, DEFAULT_PROJECT_VERSION};
use springboot_setup::project_generation::domain::Selection;
use std::path::PathBuf;

/// Create Spring Boot projects from a Spring Initializr service
#[derive(Parser, Debug)]
#[command(name = "springboot-setup")]
#[command(version)]
#[command(
    about = "Create Spring Boot projects from a Spring Initializr service",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a springboot-setup.config.yml file (default: auto-discover in the current directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new project into PATH
    New(NewArgs),
    /// List the dependencies offered by the catalog
    List(ListArgs),
    /// List the selectable Spring Boot versions
    Versions,
}

#[derive(ClapArgs, Debug)]
pub struct NewArgs {
    /// Target directory (created if missing; defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Spring Boot version (default: the configured default version)
    #[arg(long, value_name = "VERSION")]
    pub boot_version: Option<String>,

    /// Dependency ids or catalog indexes, comma separated or repeated:
    /// -d web,actuator -d 3
    #[arg(short, long, value_delimiter = ',', value_name = "ID|INDEX")]
    pub dependencies: Vec<Selection>,

    #[arg(long, default_value = DEFAULT_GROUP_ID)]
    pub group_id: String,

    /// Artifact id (default: target directory name)
    #[arg(long)]
    pub artifact_id: Option<String>,

    #[arg(long, default_value = DEFAULT_PROJECT_VERSION)]
    pub project_version: String,

    /// Base package (default: group id)
    #[arg(long)]
    pub package_name: Option<String>,

    /// Server port written to application.properties when not 8080
    #[arg(long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Add a static resource directory and make the application class a
    /// SpringBootServletInitializer
    #[arg(long)]
    pub static_content: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// Print shell-friendly names instead of "Group: Name" labels
    #[arg(long)]
    pub shell_names: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
