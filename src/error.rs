//! Error types for skill-scaffold.

use std::path::PathBuf;
use thiserror::Error;

use crate::skill::Template;

/// Reasons a run stops before anything is written to disk.
///
/// These are expected outcomes, not failures: the diagnostic is printed and
/// the process exits with status zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Abort {
    /// The user declined to continue inside the guidelines repository.
    #[error("Suggestion: Navigate to your project first, then run this tool.")]
    RepositoryDeclined,

    /// The skill name is empty or contains disallowed characters.
    #[error("✗ Invalid name. Must contain only lowercase letters, numbers, and hyphens.")]
    InvalidName,

    /// The description was left blank.
    #[error("✗ Description is required.")]
    MissingDescription,

    /// The template selector is not in the catalog.
    #[error("✗ Invalid template choice.")]
    InvalidTemplate,

    /// The location selector is not 1, 2 or 3.
    #[error("✗ Invalid location choice.")]
    InvalidLocation,

    /// The destination resolves inside the guidelines repository.
    #[error("❌ ERROR: Cannot create specific skills in the skilz guidelines repository!")]
    RestrictedDestination(PathBuf),

    /// A directory with the skill's name already exists.
    #[error("✗ Skill directory already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// The chosen template is missing from the templates root.
    #[error("✗ Template not found: {0}")]
    TemplateNotFound(Template),

    /// No home directory could be determined for a home-relative location.
    #[error("✗ Could not determine your home directory.")]
    NoHomeDirectory,

    /// The input stream ended before every answer was collected.
    #[error("✗ Input closed before all answers were given.")]
    InputClosed,
}

/// Fatal I/O failures while prompting or materializing a skill.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Reading from or writing to the interactive session failed.
    #[error("Prompt I/O failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Failed to create a directory.
    #[error("Failed to create {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a file out of the template.
    #[error("Failed to copy {from} -> {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a template directory.
    #[error("Failed to read template directory: {0}")]
    WalkFailed(#[from] walkdir::Error),

    /// Failed to read a file.
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the file.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why the scaffolding sequence stopped early.
#[derive(Debug, Error)]
pub enum Stop {
    /// A guard rejected the input.
    #[error(transparent)]
    Abort(#[from] Abort),

    /// An I/O operation failed.
    #[error(transparent)]
    Fatal(#[from] ScaffoldError),
}

impl From<std::io::Error> for Stop {
    fn from(err: std::io::Error) -> Self {
        Self::Fatal(ScaffoldError::Prompt(err))
    }
}

/// Errors that can occur when parsing SKILL.md frontmatter.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file does not start with YAML frontmatter delimiter.
    #[error("SKILL.md must start with YAML frontmatter (---)")]
    MissingFrontmatter,

    /// The frontmatter is not properly closed with a second delimiter.
    #[error("SKILL.md frontmatter not properly closed with ---")]
    UnclosedFrontmatter,

    /// The YAML in the frontmatter is invalid.
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The frontmatter is not a YAML mapping.
    #[error("SKILL.md frontmatter must be a YAML mapping")]
    NotAMapping,
}
