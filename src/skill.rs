//! Core skill types and constants.

use std::fmt;
use std::path::PathBuf;

/// Name of the metadata file patched after the template is copied.
pub const SKILL_MD: &str = "SKILL.md";

/// Directory name fragment identifying the guidelines repository.
pub const GUIDELINE_REPO_SENTINEL: &str = "skilz";

/// Skill name that only exists inside the guidelines repository.
pub const SKILL_BUILDER_SENTINEL: &str = "skill-builder";

/// Project-local skills directory, relative to the current directory.
pub const PROJECT_SKILLS_DIR: [&str; 2] = [".claude", "skills"];

/// Affirmative answer accepted by the repository warning prompt.
pub const CONFIRM_TOKEN: &str = "yes";

/// The fixed catalog of skill templates.
///
/// Selectors run from 1 to 8 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Basic,
    Analysis,
    Generation,
    Workflow,
    ToolRestricted,
    MultiFile,
    ScriptBased,
    Validation,
}

impl Template {
    /// Every template, in selector order.
    pub const ALL: [Self; 8] = [
        Self::Basic,
        Self::Analysis,
        Self::Generation,
        Self::Workflow,
        Self::ToolRestricted,
        Self::MultiFile,
        Self::ScriptBased,
        Self::Validation,
    ];

    /// Resolve a raw selector such as `"3"` to a template.
    pub fn from_selector(selector: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.selector().to_string() == selector)
    }

    /// The 1-based selector shown in the template menu.
    pub fn selector(self) -> usize {
        Self::ALL
            .iter()
            .position(|t| *t == self)
            .map_or(0, |i| i + 1)
    }

    /// Directory name under the templates root.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Basic => "basic-skill",
            Self::Analysis => "analysis-skill",
            Self::Generation => "generation-skill",
            Self::Workflow => "workflow-skill",
            Self::ToolRestricted => "tool-restricted-skill",
            Self::MultiFile => "multi-file-skill",
            Self::ScriptBased => "script-based-skill",
            Self::Validation => "validation-skill",
        }
    }

    /// One-line summary shown next to the template in the menu.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Basic => "Simple instructions",
            Self::Analysis => "Analyzing code/data",
            Self::Generation => "Generating content",
            Self::Workflow => "Multi-step processes",
            Self::ToolRestricted => "Read-only operations",
            Self::MultiFile => "Complex with multiple files",
            Self::ScriptBased => "With utility scripts",
            Self::Validation => "Plan-validate-execute",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where the new skill directory is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `.claude/skills` under the current directory.
    Project,
    /// `~/.claude/skills`.
    Personal,
    /// A path typed in by the user.
    Custom,
}

impl Location {
    pub const ALL: [Self; 3] = [Self::Project, Self::Personal, Self::Custom];

    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(Self::Project),
            "2" => Some(Self::Personal),
            "3" => Some(Self::Custom),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => ".claude/skills/ (project-specific - in current directory)",
            Self::Personal => "~/.claude/skills/ (personal, all projects)",
            Self::Custom => "Custom path",
        }
    }
}

/// A fully collected and validated scaffolding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequest {
    /// Skill name, matching `^[a-z0-9-]+$`.
    pub name: String,
    /// Non-empty one-line description.
    pub description: String,
    /// Template to copy.
    pub template: Template,
    /// Directory the skill directory is created in.
    pub destination_root: PathBuf,
}

impl SkillRequest {
    /// The directory that will hold the new skill.
    pub fn skill_dir(&self) -> PathBuf {
        self.destination_root.join(&self.name)
    }
}
