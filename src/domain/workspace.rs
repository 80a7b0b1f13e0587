//! Naming of the working directory that holds the generated repository.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use url::Url;

const GIT_SUFFIX: &str = ".git";

/// Repository name taken from the last path segment of a remote, without `.git`.
///
/// Handles URLs (`https://host/user/repo.git`), scp-like remotes
/// (`git@host:user/repo.git`), and plain filesystem paths.
pub fn repository_name(remote: &str) -> Option<String> {
    let remote = remote.trim().trim_end_matches('/');

    let segment = match Url::parse(remote) {
        Ok(url) if !url.cannot_be_a_base() => {
            url.path_segments().and_then(|mut segments| segments.rfind(|s| !s.is_empty()))?.to_string()
        }
        _ => remote.rsplit(['/', ':', '\\']).next()?.to_string(),
    };

    let name = segment.strip_suffix(GIT_SUFFIX).unwrap_or(&segment);
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

/// Directory name for a run: the repository name when one can be derived,
/// otherwise `repository-<local timestamp>`.
pub fn directory_name<Tz>(repository: Option<&str>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    repository
        .and_then(repository_name)
        .unwrap_or_else(|| format!("repository-{}", now.format("%Y-%m-%d-%H-%M-%S")))
}
