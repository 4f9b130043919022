//! Strew Core Library
//!
//! Provides the domain logic for scaffolding a project with the strew
//! workflow method: locating the resource bundle, prompting the user,
//! and copying template trees into the target project.

pub mod bundle;
pub mod context;
pub mod fs;
pub mod installer;
pub mod prompt;

/// Re-exports of commonly used types
pub mod prelude {
    // Bundle
    pub use crate::bundle::Bundle;

    // Context
    pub use crate::context::InstallContext;

    // Installer
    pub use crate::installer::{AgentsOutcome, InstallOutcome, InstallReport, Installer};

    // Prompting
    pub use crate::prompt::{Prompter, ScriptedPrompter};
}
