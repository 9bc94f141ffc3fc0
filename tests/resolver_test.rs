// tests/resolver_test.rs
use git_revision::domain::compare_versions;
use git_revision::git::MockRepository;
use git_revision::{RevisionError, VersionResolver, VersionSource};
use std::cmp::Ordering;

fn resolve(repo: &MockRepository) -> String {
    VersionResolver::new().resolve(repo).unwrap().to_string()
}

#[test]
fn test_ordering_of_release_and_prereleases() {
    let ranked = ["1.0.0", "1.0.0-rc1", "1.0.0-alpha", "0.9.9"];
    for pair in ranked.windows(2) {
        assert_eq!(compare_versions(pair[0], pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_release_build_single_tag() {
    let mut repo = MockRepository::new();
    repo.commit().unwrap();
    repo.commit_with_tags(&["v2.3.1"]).unwrap();

    assert_eq!(resolve(&repo), "2.3.1");
}

#[test]
fn test_release_build_highest_of_multiple_tags() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.0.0", "v1.1.0-rc1"]).unwrap();

    assert_eq!(resolve(&repo), "1.1.0-rc1");
}

#[test]
fn test_release_build_keeps_tag_qualifier_verbatim() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["3.0.0-rc2"]).unwrap();

    let version = VersionResolver::new().resolve(&repo).unwrap();
    assert_eq!(version.to_string(), "3.0.0-rc2");
    assert_eq!(version.qualifier, "-rc2");
}

#[test]
fn test_release_build_ignores_non_version_tags() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["latest", "release-9.9.9", "v1.2.3", "deploy/prod"])
        .unwrap();

    assert_eq!(resolve(&repo), "1.2.3");
}

#[test]
fn test_snapshot_after_tagged_ancestor() {
    // C1 -> C2 (v1.2.0) -> C3 (HEAD)
    let mut repo = MockRepository::new();
    repo.commit().unwrap();
    repo.commit_with_tags(&["v1.2.0"]).unwrap();
    repo.commit().unwrap();

    let resolution = VersionResolver::new().resolve_detailed(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), "1.2.1-SNAPSHOT");
    assert_eq!(resolution.version.patch, 1);
    assert_eq!(resolution.version.build_number, 1);
    assert_eq!(
        resolution.source,
        VersionSource::Snapshot {
            tag: "v1.2.0".to_string(),
            distance: 1
        }
    );
}

#[test]
fn test_snapshot_uses_nearest_tagged_ancestor() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v5.0.0"]).unwrap();
    repo.commit_with_tags(&["v1.0.0"]).unwrap();
    repo.commit().unwrap();
    repo.commit().unwrap();

    assert_eq!(resolve(&repo), "1.0.1-SNAPSHOT");
}

#[test]
fn test_snapshot_picks_highest_tag_on_ancestor() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v2.0.0-rc1", "v2.0.0", "v1.9.0"]).unwrap();
    repo.commit().unwrap();

    assert_eq!(resolve(&repo), "2.0.1-SNAPSHOT");
}

#[test]
fn test_snapshot_replaces_tag_qualifier() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.0.0-rc1"]).unwrap();
    repo.commit().unwrap();

    assert_eq!(resolve(&repo), "1.0.1-SNAPSHOT");
}

#[test]
fn test_untagged_history_falls_back_to_baseline() {
    let mut repo = MockRepository::new();
    for _ in 0..5 {
        repo.commit().unwrap();
    }

    let resolution = VersionResolver::new().resolve_detailed(&repo).unwrap();
    // The commit count only lives in the pre-stamp qualifier and is replaced.
    assert_eq!(resolution.version.to_string(), "0.0.1-SNAPSHOT");
    assert_eq!(resolution.version.patch, 1);
    assert_eq!(resolution.version.build_number, 0);
    assert_eq!(resolution.source, VersionSource::Untagged { commits: 5 });
}

#[test]
fn test_empty_repository() {
    let repo = MockRepository::new();

    let resolution = VersionResolver::new().resolve_detailed(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), "0.0.1-SNAPSHOT");
    assert_eq!(resolution.source, VersionSource::EmptyRepository);
}

#[test]
fn test_resolution_is_idempotent() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v0.4.0"]).unwrap();
    repo.commit().unwrap();

    let resolver = VersionResolver::new();
    let first = resolver.resolve_detailed(&repo).unwrap();
    let second = resolver.resolve_detailed(&repo).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_repository_failure_aborts_resolution() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.0.0"]).unwrap();
    repo.fail_with("cannot read refs");

    let err = VersionResolver::new().resolve(&repo).unwrap_err();
    assert!(err.is_repository_access());
    assert!(err.to_string().contains("cannot read refs"));
}

#[test]
fn test_malformed_version_tag_on_head_fails_resolution() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.0.0"]).unwrap();
    repo.commit_with_tags(&["v99999999999999999999.0.0"]).unwrap();

    let err = VersionResolver::new().resolve(&repo).unwrap_err();
    assert!(matches!(err, RevisionError::MalformedVersion(_)));
}

#[test]
fn test_malformed_version_tag_on_ancestor_fails_resolution() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.99999999999999999999.0"]).unwrap();
    repo.commit().unwrap();

    let err = VersionResolver::new().resolve(&repo).unwrap_err();
    assert!(matches!(err, RevisionError::MalformedVersion(_)));
}

#[test]
fn test_non_ascii_digit_after_patch_is_released_as_qualifier() {
    let mut repo = MockRepository::new();
    repo.commit_with_tags(&["v1.2.3\u{0663}"]).unwrap();

    let resolution = VersionResolver::new().resolve_detailed(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), "1.2.3\u{0663}");
    assert_eq!(resolution.version.qualifier, "\u{0663}");
    assert_eq!(resolution.source.kind(), "release");
}
