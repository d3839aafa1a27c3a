//! The interactive session: one input stream, one output stream.
//!
//! A [`Session`] owns both handles for the whole run. Every prompt writes its
//! explanatory block, reads exactly one line and hands back the trimmed
//! answer; end of input surfaces as [`Abort::InputClosed`].

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Abort, Stop};
use crate::materialize::{Materialized, MetadataPatch};
use crate::skill::{Location, Template, CONFIRM_TOKEN, SKILL_MD};

const RULE_WIDTH: usize = 50;

/// Line-oriented prompt session over a reader and a writer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Flush pending output and release both streams.
    pub fn finish(mut self) -> io::Result<(R, W)> {
        self.output.flush()?;
        Ok((self.input, self.output))
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "Skill Scaffolding Tool")?;
        writeln!(self.output, "{rule}\n")
    }

    /// Warn that the tool is running inside the guidelines repository and
    /// ask whether to carry on. Only an answer of `yes` (any case) proceeds.
    pub fn confirm_guideline_repo(&mut self) -> Result<bool, Stop> {
        writeln!(
            self.output,
            "⚠️  WARNING: You appear to be in the skilz guidelines repository!\n\n\
             This repository is for GUIDELINES ONLY, not specific skills.\n\n\
             Your skill should be created in:\n  \
             - Your project: ~/projects/my-app/.claude/skills/\n  \
             - Personal: ~/.claude/skills/\n  \
             - Separate repo: ~/projects/my-skill/\n"
        )?;
        let answer = self.ask("Continue anyway? (yes/no): ")?;
        let proceed = answer.to_lowercase() == CONFIRM_TOKEN;
        if proceed {
            writeln!(self.output)?;
        }
        Ok(proceed)
    }

    pub fn ask_name(&mut self) -> Result<String, Stop> {
        self.ask("Skill name (lowercase-with-hyphens): ")
    }

    pub fn ask_description(&mut self) -> Result<String, Stop> {
        self.ask("Brief description: ")
    }

    pub fn ask_template_choice(&mut self) -> Result<String, Stop> {
        writeln!(self.output, "\nAvailable templates:")?;
        for template in Template::ALL {
            writeln!(
                self.output,
                "{}. {} - {}",
                template.selector(),
                template.id(),
                template.summary()
            )?;
        }
        self.ask(&format!("\nChoose template (1-{}): ", Template::ALL.len()))
    }

    pub fn ask_location_choice(&mut self) -> Result<String, Stop> {
        writeln!(self.output, "\nWhere to create skill:")?;
        for (i, location) in Location::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, location.label())?;
        }
        self.ask(&format!("\nChoose location (1-{}): ", Location::ALL.len()))
    }

    pub fn ask_custom_path(&mut self) -> Result<String, Stop> {
        self.ask("Enter full path (e.g., ~/projects/my-app/.claude/skills): ")
    }

    pub fn announce_destination(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.output, "\nℹ️  Will create in: {}", root.display())
    }

    /// Print the diagnostic for a guard failure.
    pub fn report_abort(&mut self, abort: &Abort) -> io::Result<()> {
        match abort {
            Abort::RepositoryDeclined => writeln!(
                self.output,
                "\n{abort}\nExample: cd ~/projects/my-app && scaffold-skill\n"
            ),
            Abort::RestrictedDestination(path) => writeln!(
                self.output,
                "\n{abort}\n\n\
                 This path appears to be inside the skilz repo: {}\n\
                 Specific skills must be created elsewhere.\n",
                path.display()
            ),
            Abort::DestinationExists(_) | Abort::TemplateNotFound(_) => {
                writeln!(self.output, "\n{abort}")
            }
            _ => writeln!(self.output, "{abort}"),
        }
    }

    /// Print the success summary and suggested next steps.
    pub fn report_created(&mut self, template: Template, done: &Materialized) -> io::Result<()> {
        let dir = done.skill_dir.display();
        writeln!(self.output, "\n✓ Skill created successfully!")?;
        writeln!(self.output, "\nLocation: {dir}")?;
        writeln!(self.output, "Template: {template}")?;
        if let MetadataPatch::Unverified(reason) = &done.metadata {
            writeln!(self.output, "\n⚠️  Check {SKILL_MD} by hand: {reason}")?;
        }
        writeln!(self.output, "\nNext steps:")?;
        writeln!(
            self.output,
            "1. Edit {} to customize",
            done.skill_dir.join(SKILL_MD).display()
        )?;
        writeln!(self.output, "2. Add supporting files if needed")?;
        writeln!(self.output, "3. Validate: agent-skills-lint check {dir}")?;
        writeln!(self.output, "4. Try the skill in an agent session\n")
    }

    /// Show `prompt`, read one line and return it trimmed.
    fn ask(&mut self, prompt: &str) -> Result<String, Stop> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Abort::InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}
