//! Resource bundle shipped alongside the installer binary.
//!
//! The bundle is a read-only directory tree packaged at release time. Each
//! subtree is optional; install steps check for existence before copying.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Name of the bundle directory next to the executable.
pub const BUNDLE_DIR: &str = "bundle";

/// Bundle subtree holding the workflow method files.
pub const METHOD_SUBTREE: &str = "method";

/// Bundle subtree holding command definitions.
pub const COMMANDS_SUBTREE: &str = "commands";

/// Bundle subtree holding the builtin agent definitions.
pub const AGENTS_SUBTREE: &str = "agents";

/// Handle to the packaged resource tree.
#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    /// Create a bundle rooted at an explicit directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Locate the bundle adjacent to the current executable.
    pub fn from_exe() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().context("Could not determine executable path")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Executable path has no parent: {}", exe.display()))?;
        Ok(Self::new(dir.join(BUNDLE_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Workflow method subtree, copied into the target marker directory.
    pub fn method_dir(&self) -> PathBuf {
        self.root.join(METHOD_SUBTREE)
    }

    /// Command definitions subtree.
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join(COMMANDS_SUBTREE)
    }

    /// Builtin agent definitions subtree (optional install).
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join(AGENTS_SUBTREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtrees_are_rooted_in_bundle() {
        let bundle = Bundle::new(PathBuf::from("/opt/strew/bundle"));

        assert_eq!(bundle.method_dir(), Path::new("/opt/strew/bundle/method"));
        assert_eq!(
            bundle.commands_dir(),
            Path::new("/opt/strew/bundle/commands")
        );
        assert_eq!(bundle.agents_dir(), Path::new("/opt/strew/bundle/agents"));
    }
}
