//! Resolution engine deriving a build version from tags and history

pub mod version_resolver;

pub use version_resolver::{
    Resolution, VersionResolver, VersionSource, BASELINE_VERSION, DEFAULT_SNAPSHOT_QUALIFIER,
};
