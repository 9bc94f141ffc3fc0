use crate::error::{Result, RevisionError};
use crate::git::{History, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is linear: every new commit becomes HEAD with the previous HEAD as
/// its only parent.
pub struct MockRepository {
    /// Oldest first
    commits: Vec<Oid>,
    tags: HashMap<Oid, Vec<String>>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            failure: None,
        }
    }

    /// Append a commit and make it HEAD
    pub fn commit(&mut self) -> Result<Oid> {
        let mut bytes = [0u8; 20];
        bytes[..8].copy_from_slice(&(self.commits.len() as u64 + 1).to_be_bytes());

        let oid = Oid::from_bytes(&bytes)?;
        self.commits.push(oid);
        Ok(oid)
    }

    /// Append a commit carrying the given tags (short names like "v1.2.3")
    pub fn commit_with_tags(&mut self, tag_names: &[&str]) -> Result<Oid> {
        let oid = self.commit()?;
        for name in tag_names {
            self.add_tag(*name, oid);
        }
        Ok(oid)
    }

    /// Add a tag pointing to an OID
    ///
    /// Short names are stored as `refs/tags/<name>`; full refs are kept as given.
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        let name = name.into();
        let ref_name = if name.starts_with("refs/") {
            name
        } else {
            format!("refs/tags/{}", name)
        };
        self.tags.entry(oid).or_default().push(ref_name);
    }

    /// Make every query fail with a repository access error
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(RevisionError::repository(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn latest_commit(&self) -> Result<Option<Oid>> {
        self.check()?;
        Ok(self.commits.last().copied())
    }

    fn tags_at(&self, commit: Oid) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.tags.get(&commit).cloned().unwrap_or_default())
    }

    fn walk_history(&self, from: Oid) -> Result<History<'_>> {
        self.check()?;

        let position = self
            .commits
            .iter()
            .position(|oid| *oid == from)
            .ok_or_else(|| RevisionError::repository(format!("Unknown commit {}", from)))?;

        Ok(Box::new(
            self.commits[..=position].iter().rev().copied().map(Ok::<Oid, RevisionError>),
        ))
    }
}
