#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

/// A throwaway git repository on disk
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { dir, repo }
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test Author", "test@example.com").unwrap()
    }

    /// Commit an empty tree on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag(name, &object, &self.signature(), "release", false)
            .unwrap();
    }
}
