//! [`GitClient`] backed by the system `git` binary.

use crate::error::{Error, Result};
use crate::git::GitClient;
use crate::types::{GitRemote, MergeOptions, RepoStatus};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Marker git prints in `branch.head` when HEAD is detached
const DETACHED_HEAD: &str = "(detached)";

/// Runs git commands inside a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a client operating on `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Directory git is run in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with `args`, returning stdout on success.
    ///
    /// stdin is inherited so credential helpers can still prompt during
    /// fetch and push.
    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        debug!(%command, workdir = %self.workdir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Merge conflicts are reported on stdout, so keep both streams
            let details = [stdout.trim(), stderr.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::Git {
                command,
                stderr: if details.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    details
                },
            });
        }

        Ok(stdout)
    }
}

#[async_trait]
impl GitClient for GitCli {
    async fn is_repository(&self) -> Result<bool> {
        match self.run(&["rev-parse", "--is-inside-work-tree"]).await {
            Ok(out) => Ok(out.trim() == "true"),
            Err(Error::Git { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn status(&self) -> Result<RepoStatus> {
        let out = self.run(&["status", "--porcelain=v2", "--branch"]).await?;
        parse_status(&out)
    }

    async fn local_branches(&self) -> Result<Vec<String>> {
        let out = self
            .run(&["for-each-ref", "--format=%(refname:short)", "refs/heads"])
            .await?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    async fn create_branch(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch]).await.map(drop)
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).await.map(drop)
    }

    async fn remotes(&self) -> Result<Vec<GitRemote>> {
        let out = self.run(&["remote", "-v"]).await?;
        parse_remotes(&out)
    }

    async fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "add", name, url]).await.map(drop)
    }

    async fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["fetch", remote, branch]).await.map(drop)
    }

    async fn merge(&self, refspec: &str, options: MergeOptions) -> Result<()> {
        let mut args = vec!["merge", refspec];
        if options.allow_unrelated_histories {
            args.push("--allow-unrelated-histories");
        }
        if options.squash {
            args.push("--squash");
        }
        self.run(&args).await.map(drop)
    }

    async fn add_all(&self) -> Result<()> {
        self.run(&["add", "--all"]).await.map(drop)
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await.map(drop)
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).await.map(drop)
    }
}

/// Parse `git status --porcelain=v2 --branch` output.
///
/// Header lines start with `#`; any other line is a changed, unmerged or
/// untracked path and makes the tree dirty.
pub fn parse_status(output: &str) -> Result<RepoStatus> {
    let mut head = None;
    let mut is_clean = true;

    for line in output.lines().filter(|l| !l.is_empty()) {
        if let Some(header) = line.strip_prefix("# ") {
            if let Some(name) = header.strip_prefix("branch.head ") {
                head = Some(name.trim().to_string());
            }
        } else {
            is_clean = false;
        }
    }

    let head = head.ok_or_else(|| Error::Parse("missing branch.head header".to_string()))?;
    let current = (head != DETACHED_HEAD).then_some(head);

    Ok(RepoStatus { current, is_clean })
}

/// Parse `git remote -v` output.
///
/// Each remote appears once with `(fetch)` and once with `(push)`; order
/// of first appearance is kept.
pub fn parse_remotes(output: &str) -> Result<Vec<GitRemote>> {
    let mut remotes: Vec<GitRemote> = Vec::new();

    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        let (name, rest) = line
            .split_once('\t')
            .ok_or_else(|| Error::Parse(format!("remote line without tab: {line}")))?;
        let (url, kind) = rest
            .rsplit_once(' ')
            .ok_or_else(|| Error::Parse(format!("remote line without kind: {line}")))?;

        let idx = if let Some(i) = remotes.iter().position(|r| r.name == name) {
            i
        } else {
            remotes.push(GitRemote {
                name: name.to_string(),
                fetch_url: String::new(),
                push_url: String::new(),
            });
            remotes.len() - 1
        };
        let remote = &mut remotes[idx];

        match kind {
            "(fetch)" => remote.fetch_url = url.to_string(),
            "(push)" => remote.push_url = url.to_string(),
            other => return Err(Error::Parse(format!("unknown remote kind {other}"))),
        }
    }

    Ok(remotes)
}
