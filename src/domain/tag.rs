use crate::domain::{ComparableVersion, VersionInformation};
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

static TAG_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^refs/tags/v?((?s)[0-9]+\.[0-9]+\.[0-9]+.*)$").expect("tag pattern is valid")
});

/// A tag ref whose name carries a version, e.g. `refs/tags/v1.2.3-rc1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    /// Full ref name as read from the repository
    pub ref_name: String,
    /// The `major.minor.patch<rest>` part of the name
    pub candidate: String,
    version: VersionInformation,
}

impl VersionTag {
    /// Extract a version tag from a raw ref name
    ///
    /// # Returns
    /// * `Ok(None)` - The ref is not a version tag
    /// * `Ok(Some(tag))` - The ref matches the tag grammar
    /// * `Err` - The ref matches the grammar but its version does not parse
    pub fn from_ref(ref_name: &str) -> Result<Option<Self>> {
        let Some(captures) = TAG_VERSION_PATTERN.captures(ref_name) else {
            return Ok(None);
        };

        let candidate = captures[1].to_string();
        let version = VersionInformation::parse(&candidate)?;

        Ok(Some(VersionTag {
            ref_name: ref_name.to_string(),
            candidate,
            version,
        }))
    }

    /// Short tag name without the `refs/tags/` prefix
    pub fn name(&self) -> &str {
        self.ref_name
            .strip_prefix("refs/tags/")
            .unwrap_or(&self.ref_name)
    }

    pub fn version(&self) -> &VersionInformation {
        &self.version
    }

    pub fn comparable(&self) -> ComparableVersion {
        ComparableVersion::new(self.candidate.as_str())
    }
}

/// Keep only the refs that are version tags, in their original order
///
/// Fails on the first ref that matches the grammar but carries an unusable
/// version.
pub fn version_tags<I, S>(ref_names: I) -> Result<Vec<VersionTag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = Vec::new();
    for name in ref_names {
        if let Some(tag) = VersionTag::from_ref(name.as_ref())? {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Pick the highest candidate by [`ComparableVersion`] order
///
/// When several candidates compare equal (`v1.0.0` and `1.0.0`, or `1.0` style
/// spellings of the same version) the first one wins.
pub fn select_highest(tags: Vec<VersionTag>) -> Option<VersionTag> {
    tags.into_iter()
        .map(|tag| (tag.comparable(), tag))
        .reduce(|highest, candidate| {
            if candidate.0 > highest.0 {
                candidate
            } else {
                highest
            }
        })
        .map(|(_, tag)| tag)
}
