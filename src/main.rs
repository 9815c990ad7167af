mod cli;

use cli::{Args, Command, ListArgs, NewArgs};
use owo_colors::OwoColorize;
use springboot_setup::adapters::outbound::console::StderrProgressReporter;
use springboot_setup::adapters::outbound::filesystem::{
    FileSystemProjectPatcher, ZipProjectMaterializer,
};
use springboot_setup::adapters::outbound::network::{CachingCatalogRepository, InitializrClient};
use springboot_setup::application::dto::GenerationRequest;
use springboot_setup::application::use_cases::{GenerateProjectUseCase, ListDependenciesUseCase};
use springboot_setup::config::{load_config, SetupSettings};
use springboot_setup::project_generation::domain::Catalog;
use springboot_setup::shared::error::{ExitCode, SetupError};
use springboot_setup::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_file = load_config(args.config.as_deref(), &cwd)?;
    let settings = SetupSettings::from_environment(config_file.as_ref())?;
    log::debug!("Effective settings: {:?}", settings);

    match args.command {
        Command::New(new_args) => run_new(new_args, &settings, &cwd),
        Command::List(list_args) => run_list(list_args, &settings),
        Command::Versions => {
            print_versions(&settings);
            Ok(())
        }
    }
}

fn run_new(args: NewArgs, settings: &SetupSettings, cwd: &Path) -> Result<()> {
    let boot_version = args
        .boot_version
        .unwrap_or_else(|| settings.default_version.clone());
    settings.ensure_selectable(&boot_version)?;

    let target_directory = resolve_target_directory(args.path.as_deref(), cwd)?;

    let mut builder = GenerationRequest::builder(target_directory, boot_version)
        .selections(args.dependencies)
        .group_id(args.group_id)
        .version(args.project_version)
        .port(args.port)
        .create_static_content(args.static_content);
    if let Some(artifact_id) = args.artifact_id {
        builder = builder.artifact_id(artifact_id);
    }
    if let Some(package_name) = args.package_name {
        builder = builder.package_name(package_name);
    }
    let request = builder.build()?;

    // Composition root: the catalog cache lives for the whole invocation
    let catalog_repository =
        CachingCatalogRepository::new(InitializrClient::new(settings.starter_url.clone())?);
    let use_case = GenerateProjectUseCase::new(
        &catalog_repository,
        InitializrClient::new(settings.starter_url.clone())?,
        ZipProjectMaterializer::new(),
        FileSystemProjectPatcher::new(),
        StderrProgressReporter::new(),
        settings.catalog_source(),
    );

    let result = use_case.execute(&request)?;
    println!("{}", result.message);
    Ok(())
}

fn run_list(args: ListArgs, settings: &SetupSettings) -> Result<()> {
    let catalog_repository =
        CachingCatalogRepository::new(InitializrClient::new(settings.starter_url.clone())?);
    let use_case = ListDependenciesUseCase::new(
        &catalog_repository,
        StderrProgressReporter::new(),
        settings.catalog_source(),
    );

    let catalog = use_case.execute()?;
    print_catalog(&catalog, args.shell_names);
    Ok(())
}

fn print_catalog(catalog: &Catalog, shell_names: bool) {
    // Indexes are catalog positions, usable with `new -d <index>`
    let positions: std::collections::HashMap<&str, usize> = catalog
        .iter()
        .enumerate()
        .map(|(index, dependency)| (dependency.id(), index))
        .collect();

    for (group, members) in catalog.groups() {
        println!("{}", group.bold().cyan());
        for dependency in members {
            let index = positions.get(dependency.id()).copied().unwrap_or_default();
            let label = if shell_names {
                dependency.shell_name()
            } else {
                dependency.group_and_name()
            };
            match dependency.maven_coordinate() {
                Some(coordinate) => println!(
                    "  {:>3}  {:<28} {}  {}",
                    index.dimmed(),
                    dependency.id(),
                    label,
                    format!("[{}]", coordinate).dimmed()
                ),
                None => println!(
                    "  {:>3}  {:<28} {}",
                    index.dimmed(),
                    dependency.id(),
                    label
                ),
            }
        }
    }
}

fn print_versions(settings: &SetupSettings) {
    for version in &settings.versions {
        if *version == settings.default_version {
            println!("{} (default)", version.green());
        } else {
            println!("{}", version);
        }
    }
}

/// Resolves the target directory to an absolute path.
///
/// A missing directory is fine (the materializer creates it); an existing
/// one must be a real directory, not a file or a symbolic link.
fn resolve_target_directory(path: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let path = cwd.join(path.unwrap_or_else(|| Path::new(".")));

    let metadata = match std::fs::symlink_metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(path),
        Err(e) => {
            return Err(SetupError::InvalidProjectPath {
                path,
                reason: format!("Failed to read path metadata: {}", e),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(SetupError::InvalidProjectPath {
            path,
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(SetupError::InvalidProjectPath {
            path,
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    path.canonicalize().map_err(|e| {
        SetupError::InvalidProjectPath {
            path: path.clone(),
            reason: format!("Failed to canonicalize path: {}", e),
        }
        .into()
    })
}
