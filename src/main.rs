use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use git_revision::cli::{resolve_workflow, ResolveWorkflowArgs};
use git_revision::publish::PublishFormat;
use git_revision::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-revision",
    version,
    about = "Derive a build version from git tags and history"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Directory inside the git repository"
    )]
    path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Property name to publish the version under")]
    property: Option<String>,

    #[arg(short, long, value_enum, help = "Output format")]
    format: Option<PublishFormat>,

    #[arg(short, long, help = "Log how the version was derived")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let workflow_args = ResolveWorkflowArgs {
        path: args.path,
        config_path: args.config,
        property: args.property,
        format: args.format,
    };

    if args.verbose {
        ui::display_status(&format!(
            "Resolving version in {}",
            workflow_args.path.display()
        ));
    }

    let result = match resolve_workflow(&workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.verbose {
        ui::display_success(&ui::format_resolution(
            &result.publication.property,
            &result.publication.version,
            &result.resolution.source.to_string(),
        ));
    }

    println!("{}", result.line);
    Ok(())
}
