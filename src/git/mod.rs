//! Git access layer
//!
//! The resolver only needs three read operations on a repository, captured by
//! the [Repository] trait:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory linear history for tests
//!
//! ```rust
//! # use git_revision::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_revision::Result<()> {
//! if let Some(head) = repo.latest_commit()? {
//!     for commit in repo.walk_history(head)? {
//!         let commit = commit?;
//!         println!("{}: {:?}", commit, repo.tags_at(commit)?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Lazy, newest-first sequence of commits
pub type History<'a> = Box<dyn Iterator<Item = Result<Oid>> + 'a>;

/// Read-only repository queries needed for version resolution
///
/// Every failure is reported as a repository access error
/// ([crate::error::RevisionError::is_repository_access]).
pub trait Repository {
    /// The commit HEAD points at
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - HEAD commit
    /// * `Ok(None)` - The repository has no commits yet
    /// * `Err` - If HEAD cannot be read
    fn latest_commit(&self) -> Result<Option<Oid>>;

    /// Raw ref names of all tags that point at `commit`
    ///
    /// Names are full refs (`refs/tags/v1.2.3`). Annotated tags are matched
    /// through the commit they tag.
    fn tags_at(&self, commit: Oid) -> Result<Vec<String>>;

    /// Walk history from `from` (inclusive), newest first
    ///
    /// The sequence is finite and can be consumed once.
    fn walk_history(&self, from: Oid) -> Result<History<'_>>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn latest_commit(&self) -> Result<Option<Oid>> {
        (**self).latest_commit()
    }

    fn tags_at(&self, commit: Oid) -> Result<Vec<String>> {
        (**self).tags_at(commit)
    }

    fn walk_history(&self, from: Oid) -> Result<History<'_>> {
        (**self).walk_history(from)
    }
}
