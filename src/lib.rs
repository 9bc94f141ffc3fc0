pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod publish;
pub mod resolver;
pub mod ui;

pub use domain::VersionInformation;
pub use error::{Result, RevisionError};
pub use resolver::{Resolution, VersionResolver, VersionSource};

/// Resolve the version string of the repository containing `path`
///
/// The repository is opened for the duration of the call only.
pub fn resolve_version<P: AsRef<std::path::Path>>(path: P) -> Result<String> {
    let repo = git::Git2Repository::open(path)?;
    Ok(VersionResolver::new().resolve(&repo)?.to_string())
}
