//! Domain logic - version values, ordering and tag grammar, independent of git

pub mod ordering;
pub mod tag;
pub mod version;

pub use ordering::{compare_versions, ComparableVersion};
pub use tag::{select_highest, version_tags, VersionTag};
pub use version::VersionInformation;
