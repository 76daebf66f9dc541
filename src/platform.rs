//! Hosting platform detection and pull request links
//!
//! Only used for the completion message: turns the `origin` push URL into a
//! web link where a pull/merge request for the working branch can be opened.

use crate::types::Platform;
use url::Url;

/// Repository location parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    /// Host name, without user or port
    pub host: String,
    /// Repository path without leading slash or `.git` suffix
    /// (e.g., `owner/repo` or `group/subgroup/repo`)
    pub path: String,
}

/// Parse an HTTPS, SSH or scp-style (`git@host:owner/repo.git`) remote URL.
///
/// Returns `None` for local paths and anything else without a host.
pub fn parse_remote_url(remote_url: &str) -> Option<RemoteLocation> {
    let trimmed = remote_url.trim().trim_end_matches('/');

    let (host, path) = match Url::parse(trimmed) {
        Ok(url) => match url.scheme() {
            "https" | "http" | "ssh" | "git" | "git+ssh" => {
                (url.host_str()?.to_string(), url.path().to_string())
            }
            _ => return None,
        },
        Err(_) => {
            let (user_host, path) = trimmed.split_once(':')?;
            let host = user_host.rsplit('@').next()?;
            if host.is_empty() || host.contains('/') {
                return None;
            }
            (host.to_string(), path.to_string())
        }
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    if !path.contains('/') {
        return None;
    }

    Some(RemoteLocation {
        host,
        path: path.to_string(),
    })
}

/// Detect the hosting platform from a host name
pub fn detect_platform(host: &str) -> Option<Platform> {
    let host = host.to_ascii_lowercase();
    if host.contains("github") {
        Some(Platform::GitHub)
    } else if host.contains("gitlab") {
        Some(Platform::GitLab)
    } else {
        None
    }
}

/// Web link for opening a pull/merge request from `branch`.
///
/// `None` when the remote is not on a recognised platform.
pub fn pull_request_url(remote_url: &str, branch: &str) -> Option<String> {
    let location = parse_remote_url(remote_url)?;
    let platform = detect_platform(&location.host)?;

    let mut url = Url::parse(&format!("https://{}/{}", location.host, location.path)).ok()?;

    match platform {
        Platform::GitHub => {
            url.path_segments_mut()
                .ok()?
                .push("compare")
                .extend(branch.split('/'));
            url.query_pairs_mut().append_pair("expand", "1");
        }
        Platform::GitLab => {
            url.path_segments_mut()
                .ok()?
                .extend(["-", "merge_requests", "new"]);
            url.query_pairs_mut()
                .append_pair("merge_request[source_branch]", branch);
        }
    }

    Some(url.into())
}
