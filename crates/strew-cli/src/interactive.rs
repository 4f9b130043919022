//! Terminal prompting and styled output for the install flow.
//!
//! The core installer writes plain status lines to an injected sink; this
//! module adds the banner, the agent overview, and the closing summary, and
//! provides the stdin-backed `Prompter`.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use console::style;

use strew_core::installer::{AgentsOutcome, InstallReport};
use strew_core::prompt::Prompter;

/// Builtin agents shipped in the bundle, shown before the agents prompt.
const BUILTIN_AGENTS: &[(&str, &str)] = &[
    ("api-contract-reviewer", "API surface and contract review"),
    ("ui-mockup-sketcher", "UI mockups and wireframes"),
    ("component-test-writer", "Component test scaffolding"),
    ("e2e-test-runner", "End-to-end test flows"),
    ("code-quality-auditor", "Code quality analysis"),
];

/// Prompter backed by the process stdin/stdout.
///
/// Prints the question without a trailing newline, then blocks until a full
/// line of input arrives. The answer is returned trimmed.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        let mut out = io::stdout();
        write!(out, "{question}")?;
        out.flush()?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read answer from stdin")?;
        Ok(answer.trim().to_string())
    }
}

pub fn print_banner<W: Write>(writer: &mut W) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        style("  Strew Workflow Installer").bold().cyan()
    )?;
    writeln!(writer, "  =========================")?;
    writeln!(writer)?;
    Ok(())
}

pub fn print_agent_overview<W: Write>(writer: &mut W) -> anyhow::Result<()> {
    writeln!(writer, "{}", style("Agent Configuration").bold().cyan())?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Strew ships specialized agents that plug into the workflow method."
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", style("Available builtin agents:").yellow())?;
    for (name, blurb) in BUILTIN_AGENTS {
        writeln!(writer, "• {name:<24} - {blurb}")?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "These agents keep context small and bring specialized expertise."
    )?;
    Ok(())
}

pub fn print_success<W: Write>(writer: &mut W, report: &InstallReport) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        style("✨ Workflow method installed successfully!")
            .bold()
            .green()
    )?;

    for warning in &report.warnings {
        writeln!(writer, "  ⚠ {warning}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", style("Next steps:").cyan())?;
    writeln!(writer, "1. Open your assistant in this project")?;
    writeln!(writer, "2. Run /create-task to start the first workflow")?;
    writeln!(writer, "3. Track progress under docs/tasks/")?;

    writeln!(writer)?;
    if report.agents == Some(AgentsOutcome::Installed) {
        writeln!(writer, "{}", style("Builtin agents ready to use:").cyan())?;
        writeln!(
            writer,
            "• Specialized agents run automatically inside missions"
        )?;
    } else {
        writeln!(
            writer,
            "{}",
            style("To install builtin agents later:").cyan()
        )?;
        writeln!(
            writer,
            "• Re-run the installer, or use your own custom agents"
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strew_core::installer::InstallOutcome;

    fn completed_report(agents: AgentsOutcome, warnings: Vec<String>) -> InstallReport {
        InstallReport {
            outcome: InstallOutcome::Completed,
            agents: Some(agents),
            warnings,
        }
    }

    #[test]
    fn banner_names_the_installer() {
        let mut output = Vec::new();
        print_banner(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Strew Workflow Installer"));
    }

    #[test]
    fn agent_overview_lists_every_builtin_agent() {
        let mut output = Vec::new();
        print_agent_overview(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        for (name, _) in BUILTIN_AGENTS {
            assert!(text.contains(name), "missing agent {name}");
        }
    }

    #[test]
    fn success_mentions_agents_when_installed() {
        let mut output = Vec::new();
        let report = completed_report(AgentsOutcome::Installed, Vec::new());
        print_success(&mut output, &report).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("installed successfully"));
        assert!(text.contains("Builtin agents ready to use"));
    }

    #[test]
    fn success_offers_later_install_when_declined() {
        let mut output = Vec::new();
        let report = completed_report(AgentsOutcome::Declined, Vec::new());
        print_success(&mut output, &report).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("To install builtin agents later"));
    }

    #[test]
    fn success_echoes_warnings() {
        let mut output = Vec::new();
        let report = completed_report(
            AgentsOutcome::Missing,
            vec!["Agent files not found in bundle".to_string()],
        );
        print_success(&mut output, &report).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Agent files not found in bundle"));
    }
}
