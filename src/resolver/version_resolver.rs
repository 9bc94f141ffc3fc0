use crate::domain::{select_highest, version_tags, VersionInformation, VersionTag};
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;
use std::fmt;
use tracing::debug;

/// Version used when history carries no version tag at all
pub const BASELINE_VERSION: &str = "0.0.1";

/// Default pre-release marker for versions derived from history
pub const DEFAULT_SNAPSHOT_QUALIFIER: &str = "SNAPSHOT";

/// How a version was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// HEAD carries a version tag
    Release { tag: String },
    /// An ancestor carries a version tag; `distance` commits sit on top of it
    Snapshot { tag: String, distance: usize },
    /// No version tag anywhere in the `commits` walked
    Untagged { commits: usize },
    /// The repository has no commits
    EmptyRepository,
}

impl VersionSource {
    /// Short machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            VersionSource::Release { .. } => "release",
            VersionSource::Snapshot { .. } => "snapshot",
            VersionSource::Untagged { .. } => "untagged",
            VersionSource::EmptyRepository => "empty",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::Release { tag } => write!(f, "release tag '{}'", tag),
            VersionSource::Snapshot { tag, distance } => {
                write!(f, "{} commit(s) since tag '{}'", distance, tag)
            }
            VersionSource::Untagged { commits } => {
                write!(f, "no version tag in {} commit(s)", commits)
            }
            VersionSource::EmptyRepository => write!(f, "repository has no commits"),
        }
    }
}

/// A resolved version together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: VersionInformation,
    pub source: VersionSource,
}

/// Derives the build version from repository tags and history
///
/// 1. No commits: `0.0.1` with the snapshot qualifier.
/// 2. HEAD carries version tags: the highest one, verbatim.
/// 3. An ancestor carries version tags: the highest one with patch and build
///    number bumped, with the snapshot qualifier.
/// 4. Otherwise: `0.0.1-<count>`, then stamped with the snapshot qualifier,
///    which replaces the count.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    snapshot_qualifier: String,
}

impl VersionResolver {
    /// Create a resolver stamping `-SNAPSHOT` on derived versions
    pub fn new() -> Self {
        VersionResolver {
            snapshot_qualifier: DEFAULT_SNAPSHOT_QUALIFIER.to_string(),
        }
    }

    /// Use a different pre-release marker (without the leading `-`)
    pub fn with_snapshot_qualifier(qualifier: impl Into<String>) -> Self {
        VersionResolver {
            snapshot_qualifier: qualifier.into(),
        }
    }

    /// Resolve the version for the repository's current HEAD
    pub fn resolve<R: Repository + ?Sized>(&self, repo: &R) -> Result<VersionInformation> {
        Ok(self.resolve_detailed(repo)?.version)
    }

    /// Resolve the version and report how it was derived
    pub fn resolve_detailed<R: Repository + ?Sized>(&self, repo: &R) -> Result<Resolution> {
        let Some(head) = repo.latest_commit()? else {
            debug!("No commits");
            let baseline = VersionInformation::parse(&format!("{}-0", BASELINE_VERSION))?;

            return Ok(Resolution {
                version: self.stamp_snapshot(&baseline),
                source: VersionSource::EmptyRepository,
            });
        };

        debug!("Latest commit: {}", head);

        if let Some(tag) = self.highest_version_tag(repo, head)? {
            debug!("Tag ref matches HEAD: {}", tag.ref_name);

            return Ok(Resolution {
                version: tag.version().clone(),
                source: VersionSource::Release {
                    tag: tag.name().to_string(),
                },
            });
        }

        debug!("Looking for version tagged commit");

        // Starts at 1 and is bumped before each commit, so it ends at commits + 1
        let mut count: usize = 1;

        for (distance, commit) in repo.walk_history(head)?.enumerate() {
            let commit = commit?;
            count += 1;

            if let Some(tag) = self.highest_version_tag(repo, commit)? {
                let version = tag
                    .version()
                    .with_patch_incremented()
                    .with_build_number_incremented();

                return Ok(Resolution {
                    version: self.stamp_snapshot(&version),
                    source: VersionSource::Snapshot {
                        tag: tag.name().to_string(),
                        distance,
                    },
                });
            }
        }

        debug!("No version tags in repository");

        // The count only survives until the snapshot qualifier replaces it
        let baseline = VersionInformation::parse(&format!("{}-{}", BASELINE_VERSION, count))?;

        Ok(Resolution {
            version: self.stamp_snapshot(&baseline),
            source: VersionSource::Untagged { commits: count - 1 },
        })
    }

    fn highest_version_tag<R: Repository + ?Sized>(
        &self,
        repo: &R,
        commit: Oid,
    ) -> Result<Option<VersionTag>> {
        let tags = version_tags(repo.tags_at(commit)?)?;

        debug!(
            "Version tags directly on commit {}: {:?}",
            commit,
            tags.iter().map(|t| t.candidate.as_str()).collect::<Vec<_>>()
        );

        Ok(select_highest(tags))
    }

    fn stamp_snapshot(&self, version: &VersionInformation) -> VersionInformation {
        if self.snapshot_qualifier.is_empty() {
            version.with_qualifier("")
        } else {
            version.with_qualifier(format!("-{}", self.snapshot_qualifier))
        }
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new()
    }
}
