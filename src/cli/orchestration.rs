//! Resolve workflow orchestration
//!
//! Ties configuration, repository access, resolution and publication together
//! so the command line only parses arguments and prints the result.

use std::path::PathBuf;

use tracing::info;

use crate::config::{self, Config};
use crate::error::Result;
use crate::git::Git2Repository;
use crate::publish::{Publication, PublishFormat};
use crate::resolver::{Resolution, VersionResolver};

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveWorkflowArgs {
    /// Directory inside the repository
    pub path: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Overrides the configured property name
    pub property: Option<String>,

    /// Overrides the configured output format
    pub format: Option<PublishFormat>,
}

impl Default for ResolveWorkflowArgs {
    fn default() -> Self {
        ResolveWorkflowArgs {
            path: PathBuf::from("."),
            config_path: None,
            property: None,
            format: None,
        }
    }
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub resolution: Resolution,

    pub publication: Publication,

    /// The publication rendered in the selected format
    pub line: String,
}

/// Merge file configuration, environment and explicit arguments
///
/// Precedence, lowest first: file, `GIT_REVISION_PROPERTY`, arguments.
pub fn effective_config(args: &ResolveWorkflowArgs) -> Result<Config> {
    let mut config =
        config::load_config(args.config_path.as_deref(), &args.path)?.with_env_overrides();

    if let Some(property) = &args.property {
        config.property_name = property.clone();
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    config.validate()?;
    Ok(config)
}

/// Main resolve workflow
///
/// 1. Load configuration
/// 2. Open the repository (released when this function returns)
/// 3. Resolve the version
/// 4. Render it under the configured property name
pub fn resolve_workflow(args: &ResolveWorkflowArgs) -> Result<WorkflowResult> {
    let config = effective_config(args)?;

    let resolution = {
        let repo = Git2Repository::open(&args.path)?;
        VersionResolver::with_snapshot_qualifier(config.snapshot.qualifier.clone())
            .resolve_detailed(&repo)?
    };

    let publication = Publication::new(config.property_name.clone(), &resolution);
    let line = publication.render(config.format)?;

    info!(
        property = %publication.property,
        version = %publication.version,
        source = %resolution.source,
        "Resolved version"
    );

    Ok(WorkflowResult {
        resolution,
        publication,
        line,
    })
}
