//! The install flow: prompts, directory scaffolding, and tree copies.
//!
//! `Installer` is generic over the prompting capability and the status-line
//! sink so frontends wire up a terminal while tests use scripted answers and
//! an in-memory writer.

use std::io::Write;

use tracing::debug;

use crate::context::{InstallContext, MARKER_DIR};
use crate::fs::{copy_tree, ensure_dir};
use crate::prompt::{Prompter, is_affirmative_strict, is_negative_strict};

/// Terminal state of an install run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// All mandatory steps ran.
    Completed,
    /// User declined the overwrite prompt; nothing was changed.
    Cancelled,
}

/// What happened to the optional agents sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentsOutcome {
    /// Agents subtree copied into the target.
    Installed,
    /// User answered "n" to the agents prompt.
    Declined,
    /// User opted in but the bundle ships no agents subtree.
    Missing,
    /// Copy failed; downgraded to a warning, install still completed.
    Failed,
}

/// Report from an install run.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// How the run ended
    pub outcome: InstallOutcome,
    /// Agents sub-step result; `None` when the run was cancelled before
    /// the agents prompt
    pub agents: Option<AgentsOutcome>,
    /// Any warnings generated during installation
    pub warnings: Vec<String>,
}

impl InstallReport {
    fn cancelled() -> Self {
        Self {
            outcome: InstallOutcome::Cancelled,
            agents: None,
            warnings: Vec::new(),
        }
    }
}

/// Install orchestrator.
///
/// Runs the whole flow sequentially on the calling thread: overwrite check,
/// agents prompt, then the filesystem steps in a fixed order. Errors in
/// mandatory steps abort immediately with no rollback; errors in the agents
/// sub-step are downgraded to warnings.
pub struct Installer<'a, P, W> {
    ctx: &'a InstallContext,
    prompter: P,
    writer: W,
}

impl<'a, P: Prompter, W: Write> Installer<'a, P, W> {
    pub fn new(ctx: &'a InstallContext, prompter: P, writer: W) -> Self {
        Self {
            ctx,
            prompter,
            writer,
        }
    }

    /// Run the install flow.
    ///
    /// Flow:
    /// 1. If the marker directory exists, confirm overwrite (default no)
    /// 2. Ask about builtin agents (default yes)
    /// 3. Copy the method subtree into the marker directory
    /// 4. Ensure the commands directory and copy command definitions
    /// 5. Scaffold the documentation directories
    /// 6. Copy agents if opted in; missing or failing agents only warn
    pub fn run(&mut self) -> anyhow::Result<InstallReport> {
        if self.ctx.is_installed() {
            writeln!(self.writer, "strew is already installed in this project.")?;
            let answer = self.prompter.ask("Do you want to overwrite? (y/N): ")?;
            if !is_affirmative_strict(&answer) {
                writeln!(self.writer, "Installation cancelled.")?;
                return Ok(InstallReport::cancelled());
            }
        }

        let answer = self
            .prompter
            .ask("Do you want to install these builtin agents? (Y/n): ")?;
        let install_agents = !is_negative_strict(&answer);
        if install_agents {
            writeln!(self.writer, "✓ Will install builtin agents")?;
        } else {
            writeln!(self.writer, "• Skipping builtin agents installation")?;
            writeln!(
                self.writer,
                "  You can install agents later or use your own custom agents"
            )?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Installing workflow method files...")?;

        self.install_method()?;
        self.install_commands()?;
        self.scaffold_docs()?;

        let mut warnings = Vec::new();
        let agents = if install_agents {
            self.install_agents(&mut warnings)?
        } else {
            AgentsOutcome::Declined
        };

        Ok(InstallReport {
            outcome: InstallOutcome::Completed,
            agents: Some(agents),
            warnings,
        })
    }

    fn install_method(&mut self) -> anyhow::Result<()> {
        let src = self.ctx.bundle().method_dir();
        if src.exists() {
            debug!(src = %src.display(), "copying method subtree");
            copy_tree(&src, &self.ctx.marker_dir())?;
            writeln!(self.writer, "✓ Created {MARKER_DIR} directory")?;
        }
        Ok(())
    }

    fn install_commands(&mut self) -> anyhow::Result<()> {
        ensure_dir(&self.ctx.config_dir())?;
        ensure_dir(&self.ctx.commands_dir())?;

        let src = self.ctx.bundle().commands_dir();
        if src.exists() {
            debug!(src = %src.display(), "copying commands subtree");
            copy_tree(&src, &self.ctx.commands_dir())?;
            writeln!(self.writer, "✓ Installed command definitions")?;
        }
        Ok(())
    }

    fn scaffold_docs(&mut self) -> anyhow::Result<()> {
        if ensure_dir(&self.ctx.docs_architecture_dir())? {
            writeln!(self.writer, "✓ Created docs/architecture directory")?;
        }
        if ensure_dir(&self.ctx.docs_tasks_dir())? {
            writeln!(self.writer, "✓ Created docs/tasks directory")?;
        }
        Ok(())
    }

    fn install_agents(&mut self, warnings: &mut Vec<String>) -> anyhow::Result<AgentsOutcome> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Installing builtin agents...")?;

        let src = self.ctx.bundle().agents_dir();
        if !src.exists() {
            let warning =
                "Agent files not found in bundle; you can install them later".to_string();
            writeln!(self.writer, "⚠ {warning}")?;
            warnings.push(warning);
            return Ok(AgentsOutcome::Missing);
        }

        debug!(src = %src.display(), "copying agents subtree");
        match copy_tree(&src, &self.ctx.agents_dir()) {
            Ok(()) => {
                writeln!(self.writer, "✓ Builtin agents installed successfully")?;
                Ok(AgentsOutcome::Installed)
            }
            Err(err) => {
                let warning = format!("Could not install builtin agents automatically: {err:#}");
                writeln!(self.writer, "⚠ {warning}")?;
                writeln!(self.writer, "  You can install them later")?;
                warnings.push(warning);
                Ok(AgentsOutcome::Failed)
            }
        }
    }
}
