use crate::error::{Result, RevisionError};
use crate::git::History;
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
///
/// Tags are indexed by the commit they point at when the repository is opened.
/// The underlying handle is released on drop.
pub struct Git2Repository {
    repo: Git2Repo,
    tags_by_commit: HashMap<Oid, Vec<String>>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let tags_by_commit = index_tags(&repo)?;

        Ok(Git2Repository {
            repo,
            tags_by_commit,
        })
    }
}

fn index_tags(repo: &Git2Repo) -> Result<HashMap<Oid, Vec<String>>> {
    let mut index: HashMap<Oid, Vec<String>> = HashMap::new();

    for reference in repo.references_glob("refs/tags/*")? {
        let reference = reference?;

        let Some(name) = reference.name() else {
            continue;
        };

        // Tags on trees or blobs cannot mark a commit
        match reference.peel(ObjectType::Commit) {
            Ok(commit) => index.entry(commit.id()).or_default().push(name.to_string()),
            Err(e) => debug!("Skipping tag {}: {}", name, e),
        }
    }

    for names in index.values_mut() {
        names.sort();
    }

    Ok(index)
}

impl super::Repository for Git2Repository {
    fn latest_commit(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn tags_at(&self, commit: Oid) -> Result<Vec<String>> {
        Ok(self
            .tags_by_commit
            .get(&commit)
            .cloned()
            .unwrap_or_default())
    }

    fn walk_history(&self, from: Oid) -> Result<History<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(from)?;

        Ok(Box::new(revwalk.map(|oid| oid.map_err(RevisionError::from))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_open_fresh_repository_has_no_commits() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::open(dir.path()).unwrap();
        assert_eq!(repo.latest_commit().unwrap(), None);
    }

    #[test]
    fn test_unresolvable_head_is_access_error() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        std::fs::write(
            repo.path().join("HEAD"),
            "0123456789abcdef0123456789abcdef01234567\n",
        )
        .unwrap();

        let repo = Git2Repository::open(dir.path()).unwrap();
        let err = repo.latest_commit().unwrap_err();
        assert!(err.is_repository_access());
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let err = Git2Repository::open(dir.path().join("missing")).err().unwrap();
        assert!(err.is_repository_access());
    }
}
