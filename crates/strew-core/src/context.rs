//! Install context holding the paths an install operation works with.
//!
//! All path-dependent behavior is derived from the two stored roots, so tests
//! can point the installer at temporary directories instead of the real
//! working directory and executable location.

use std::path::{Path, PathBuf};

use crate::bundle::Bundle;

/// Marker directory whose presence in a target signals a prior installation.
pub const MARKER_DIR: &str = ".strew";

/// Target directory holding copied command and agent definitions.
pub const CONFIG_DIR: &str = ".assistant";

/// Documentation directories scaffolded during install.
pub const DOCS_ARCHITECTURE_DIR: &str = "docs/architecture";
pub const DOCS_TASKS_DIR: &str = "docs/tasks";

/// Paths for a single install run: the target project root and the bundle.
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Project directory being scaffolded
    target_root: PathBuf,
    /// Packaged resource tree
    bundle: Bundle,
}

impl InstallContext {
    /// Create an install context with explicit paths.
    pub fn new(target_root: PathBuf, bundle: Bundle) -> Self {
        Self {
            target_root,
            bundle,
        }
    }

    /// Create an install context with system defaults: the current working
    /// directory as target, the bundle adjacent to the executable.
    pub fn with_defaults() -> anyhow::Result<Self> {
        let target_root = std::env::current_dir()?;
        let bundle = Bundle::from_exe()?;
        Ok(Self::new(target_root, bundle))
    }

    // --- Accessors ---

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    // --- Target layout ---

    /// `.strew/` — prior-install sentinel and method file destination.
    pub fn marker_dir(&self) -> PathBuf {
        self.target_root.join(MARKER_DIR)
    }

    /// `.assistant/` — parent of command and agent definitions.
    pub fn config_dir(&self) -> PathBuf {
        self.target_root.join(CONFIG_DIR)
    }

    /// `.assistant/commands/` — command definition destination.
    pub fn commands_dir(&self) -> PathBuf {
        self.config_dir().join("commands")
    }

    /// `.assistant/agents/` — agent definition destination (opt-in).
    pub fn agents_dir(&self) -> PathBuf {
        self.config_dir().join("agents")
    }

    pub fn docs_architecture_dir(&self) -> PathBuf {
        self.target_root.join(DOCS_ARCHITECTURE_DIR)
    }

    pub fn docs_tasks_dir(&self) -> PathBuf {
        self.target_root.join(DOCS_TASKS_DIR)
    }

    /// Whether a prior installation is present in the target.
    pub fn is_installed(&self) -> bool {
        self.marker_dir().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> InstallContext {
        InstallContext::new(
            PathBuf::from("/work/project"),
            Bundle::new(PathBuf::from("/opt/strew/bundle")),
        )
    }

    #[test]
    fn target_layout_is_rooted_in_target() {
        let ctx = make_context();

        assert_eq!(ctx.marker_dir(), Path::new("/work/project/.strew"));
        assert_eq!(ctx.config_dir(), Path::new("/work/project/.assistant"));
        assert_eq!(
            ctx.commands_dir(),
            Path::new("/work/project/.assistant/commands")
        );
        assert_eq!(
            ctx.agents_dir(),
            Path::new("/work/project/.assistant/agents")
        );
        assert_eq!(
            ctx.docs_architecture_dir(),
            Path::new("/work/project/docs/architecture")
        );
        assert_eq!(ctx.docs_tasks_dir(), Path::new("/work/project/docs/tasks"));
    }

    #[test]
    fn is_installed_checks_marker_directory() {
        let tmp = tempfile::tempdir().expect("tempdir should succeed");
        let ctx = InstallContext::new(
            tmp.path().to_path_buf(),
            Bundle::new(tmp.path().join("bundle")),
        );

        assert!(!ctx.is_installed());
        std::fs::create_dir(ctx.marker_dir()).unwrap();
        assert!(ctx.is_installed());
    }
}
