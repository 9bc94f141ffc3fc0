use crate::error::{Result, RevisionError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)([0-9]+)\.([0-9]+)\.([0-9]+)(.*)$").expect("version pattern is valid")
});

/// A resolved build version: `major.minor.patch` followed by a verbatim qualifier.
///
/// The qualifier carries its own separator (`-rc1`, `-SNAPSHOT`, `.Final`), so
/// formatting is plain concatenation and `parse(s).to_string() == s` for every
/// string that parses.
///
/// `build_number` is metadata kept alongside the version. It is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionInformation {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub qualifier: String,
    pub build_number: u64,
}

impl VersionInformation {
    /// Create a version without qualifier
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionInformation {
            major,
            minor,
            patch,
            qualifier: String::new(),
            build_number: 0,
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[qualifier]` (e.g. "1.2.3", "1.2.3-rc1")
    ///
    /// A leading `v` is not accepted here; tag prefixes are stripped by
    /// [`VersionTag`](crate::domain::VersionTag).
    pub fn parse(raw: &str) -> Result<Self> {
        let captures = VERSION_PATTERN.captures(raw).ok_or_else(|| {
            RevisionError::malformed(format!(
                "'{}' - expected MAJOR.MINOR.PATCH[qualifier]",
                raw
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                RevisionError::malformed(format!(
                    "'{}' - {} component '{}' is out of range",
                    raw, name, &captures[index]
                ))
            })
        };

        Ok(VersionInformation {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
            qualifier: captures[4].to_string(),
            build_number: 0,
        })
    }

    /// Copy with `patch + 1`
    ///
    /// # Panics
    /// If the patch component is already `u64::MAX`.
    pub fn with_patch_incremented(&self) -> Self {
        let patch = self
            .patch
            .checked_add(1)
            .unwrap_or_else(|| panic!("patch component of {} overflowed", self));

        VersionInformation {
            patch,
            ..self.clone()
        }
    }

    /// Copy with `build_number + 1`
    ///
    /// # Panics
    /// If the build number is already `u64::MAX`.
    pub fn with_build_number_incremented(&self) -> Self {
        let build_number = self
            .build_number
            .checked_add(1)
            .unwrap_or_else(|| panic!("build number of {} overflowed", self));

        VersionInformation {
            build_number,
            ..self.clone()
        }
    }

    /// Copy with the whole qualifier replaced by `qualifier`
    pub fn with_qualifier(&self, qualifier: impl Into<String>) -> Self {
        VersionInformation {
            qualifier: qualifier.into(),
            ..self.clone()
        }
    }

    /// True when there is no qualifier, i.e. a plain release triple
    pub fn is_release(&self) -> bool {
        self.qualifier.is_empty()
    }
}

impl FromStr for VersionInformation {
    type Err = RevisionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionInformation::parse(s)
    }
}

impl fmt::Display for VersionInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}",
            self.major, self.minor, self.patch, self.qualifier
        )
    }
}
