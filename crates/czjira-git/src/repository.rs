//! Git repository access.

use std::path::Path;

use chrono::{DateTime, Utc};
use czjira_commit::RawCommit;
use git2::{Commit, ErrorCode, Repository as Git2Repo};
use semver::Version;
use tracing::debug;

use crate::{GitError, GitResult};

/// Repository the commits are read from and written to.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens the repository containing `path`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepo`] if no repository encloses `path`.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        Git2Repo::discover(path)
            .map(|inner| Self { inner })
            .map_err(|_| GitError::NotARepo(path.to_path_buf()))
    }

    /// Working tree root, or the git directory of a bare repository.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Tags of the form `{prefix}{semver}`, highest version first.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag list cannot be read.
    pub fn version_tags(&self, prefix: &str) -> GitResult<Vec<(Version, String)>> {
        let names = self.inner.tag_names(None)?;

        let mut tags: Vec<(Version, String)> = names
            .iter()
            .flatten()
            .filter_map(|name| {
                let version = Version::parse(name.strip_prefix(prefix)?).ok()?;
                Some((version, name.to_string()))
            })
            .collect();
        tags.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(tags)
    }

    /// The highest `{prefix}{semver}` tag, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag list cannot be read.
    pub fn latest_version_tag(&self, prefix: &str) -> GitResult<Option<String>> {
        Ok(self
            .version_tags(prefix)?
            .into_iter()
            .next()
            .map(|(_, name)| name))
    }

    /// Commits reachable from HEAD but not from `since`, newest first.
    ///
    /// `since` is any revision git understands; `None` walks the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnknownRevision`] if `since` does not resolve to a
    /// commit.
    pub fn commits_since(&self, since: Option<&str>) -> GitResult<Vec<RawCommit>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;

        if let Some(rev) = since {
            let boundary = self
                .inner
                .revparse_single(rev)
                .and_then(|object| object.peel_to_commit())
                .map_err(|_| GitError::UnknownRevision(rev.to_string()))?;
            revwalk.hide(boundary.id())?;
        }

        let commits = revwalk
            .map(|oid| Ok(to_raw_commit(&self.inner.find_commit(oid?)?)))
            .collect::<GitResult<Vec<_>>>()?;

        debug!(count = commits.len(), since = ?since, "read commits");
        Ok(commits)
    }

    /// Commits the index on top of HEAD, returning the new commit hash.
    ///
    /// The committer identity comes from the git configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NothingStaged`] when the index matches HEAD (or is
    /// empty on an unborn branch).
    pub fn commit_staged(&self, message: &str) -> GitResult<String> {
        let mut index = self.inner.index()?;
        let tree_oid = index.write_tree()?;

        let head = match self.inner.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
            Err(e) => return Err(e.into()),
        };

        let unchanged = head
            .as_ref()
            .map_or_else(|| index.is_empty(), |head| head.tree_id() == tree_oid);
        if unchanged {
            return Err(GitError::NothingStaged);
        }

        let tree = self.inner.find_tree(tree_oid)?;
        let signature = self.inner.signature()?;
        let parents: Vec<&Commit<'_>> = head.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        debug!(%oid, "created commit");
        Ok(oid.to_string())
    }
}

fn to_raw_commit(commit: &Commit<'_>) -> RawCommit {
    let author = commit.author();
    let date = DateTime::from_timestamp(commit.time().seconds(), 0).unwrap_or_else(Utc::now);

    RawCommit::new(
        commit.id().to_string(),
        commit.message().unwrap_or_default(),
        author.name().unwrap_or("Unknown"),
        date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::fs;
    use tempfile::TempDir;

    /// A repository in a temporary directory with a configured identity.
    struct Fixture {
        repo: Repository,
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let inner = Git2Repo::init(dir.path()).unwrap();
            {
                let mut config = inner.config().unwrap();
                config.set_str("user.name", "Test User").unwrap();
                config.set_str("user.email", "test@example.com").unwrap();
            }
            Self {
                repo: Repository { inner },
                dir,
            }
        }

        fn git(&self) -> &Git2Repo {
            &self.repo.inner
        }

        fn stage(&self, name: &str, content: &str) {
            fs::write(self.dir.path().join(name), content).unwrap();
            let mut index = self.git().index().unwrap();
            index.add_path(Path::new(name)).unwrap();
            index.write().unwrap();
        }

        /// Commits the current index without going through `commit_staged`.
        fn commit(&self, message: &str) {
            let sig = Signature::now("Test User", "test@example.com").unwrap();
            let tree_oid = self.git().index().unwrap().write_tree().unwrap();
            let tree = self.git().find_tree(tree_oid).unwrap();
            let head = self.git().head().ok().and_then(|h| h.peel_to_commit().ok());
            let parents: Vec<&Commit<'_>> = head.iter().collect();

            self.git()
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
                .unwrap();
        }

        fn tag(&self, name: &str) {
            let head = self.git().head().unwrap().peel_to_commit().unwrap();
            self.git()
                .tag_lightweight(name, head.as_object(), false)
                .unwrap();
        }

        fn subjects(&self, since: Option<&str>) -> Vec<String> {
            self.repo
                .commits_since(since)
                .unwrap()
                .iter()
                .map(|commit| commit.subject().to_string())
                .collect()
        }
    }

    #[test]
    fn test_discover_outside_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::discover(dir.path());
        assert!(matches!(result, Err(GitError::NotARepo(_))));
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let fixture = Fixture::new();
        let nested = fixture.dir.path().join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let repo = Repository::discover(&nested).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            fixture.dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_whole_history_newest_first() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");
        fixture.commit("feat: export [CZ-2]");

        assert_eq!(
            fixture.subjects(None),
            ["feat: export [CZ-2]", "init: bootstrap [CZ-1]"]
        );
    }

    #[test]
    fn test_commits_since_tag() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");
        fixture.tag("v1.0.0");
        fixture.commit("fix: timeout [CZ-2]");
        fixture.commit("feat: export [CZ-3]");

        assert_eq!(
            fixture.subjects(Some("v1.0.0")),
            ["feat: export [CZ-3]", "fix: timeout [CZ-2]"]
        );
    }

    #[test]
    fn test_commits_since_revision() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");
        fixture.commit("fix: timeout [CZ-2]");

        assert_eq!(fixture.subjects(Some("HEAD~1")), ["fix: timeout [CZ-2]"]);
    }

    #[test]
    fn test_commits_since_unknown_revision() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");

        let err = fixture.repo.commits_since(Some("v9.9.9")).err().unwrap();
        assert_eq!(err.to_string(), "unknown revision: v9.9.9");
    }

    #[test]
    fn test_raw_commit_fields() {
        let fixture = Fixture::new();
        fixture.commit("feat: add export [CZ-1]\n\nissue epic: [CZ-9]");

        let commits = fixture.repo.commits_since(None).unwrap();
        assert_eq!(commits[0].body(), Some("issue epic: [CZ-9]"));
        assert_eq!(commits[0].author, "Test User");
        assert_eq!(commits[0].hash.len(), 40);
    }

    #[test]
    fn test_version_tags_sorted_by_semver() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");
        for tag in ["v1.2.0", "v1.10.0", "v1.9.1", "release-3.0.0", "vnext"] {
            fixture.tag(tag);
        }

        let names: Vec<String> = fixture
            .repo
            .version_tags("v")
            .unwrap()
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names, ["v1.10.0", "v1.9.1", "v1.2.0"]);
        assert_eq!(
            fixture.repo.latest_version_tag("release-").unwrap().as_deref(),
            Some("release-3.0.0")
        );
    }

    #[test]
    fn test_latest_version_tag_none() {
        let fixture = Fixture::new();
        fixture.commit("init: bootstrap [CZ-1]");
        assert!(fixture.repo.latest_version_tag("v").unwrap().is_none());
    }

    #[test]
    fn test_commit_staged() {
        let fixture = Fixture::new();
        fixture.stage("report.rs", "// v1");
        let first = fixture.repo.commit_staged("feat: exporter [CZ-1]").unwrap();
        fixture.stage("report.rs", "// v2");
        fixture.repo.commit_staged("fix: exporter [CZ-2]").unwrap();

        let commits = fixture.repo.commits_since(None).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "fix: exporter [CZ-2]");
        assert_eq!(commits[1].hash, first);
    }

    #[test]
    fn test_commit_staged_requires_changes() {
        let fixture = Fixture::new();
        assert!(matches!(
            fixture.repo.commit_staged("feat: empty [CZ-1]"),
            Err(GitError::NothingStaged)
        ));

        fixture.stage("a.txt", "hello");
        fixture.repo.commit_staged("feat: first [CZ-1]").unwrap();
        assert!(matches!(
            fixture.repo.commit_staged("feat: again [CZ-2]"),
            Err(GitError::NothingStaged)
        ));
    }
}
