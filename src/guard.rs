//! Fail-fast precondition checks.
//!
//! Each guard inspects answers that have already been collected (plus, for a
//! few of them, the filesystem) and either hands back the validated value or
//! an [`Abort`] describing why the run stops. None of them write anything.
//!
//! # Guard order
//!
//! 1. repository location (only warns and asks for confirmation)
//! 2. name format: non-empty, `^[a-z0-9-]+$`
//! 3. description: non-empty
//! 4. template selector: `1`-`8`
//! 5. location selector: `1`-`3`
//! 6. restricted destination
//! 7. destination does not exist yet
//! 8. template directory exists

use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::Abort;
use crate::skill::{
    Location, Template, GUIDELINE_REPO_SENTINEL, PROJECT_SKILLS_DIR, SKILL_BUILDER_SENTINEL,
};

/// Whether `current_dir` looks like the guidelines repository itself.
///
/// Both signals must be present: a `.claude/skills/skill-builder` directory
/// and the repository name somewhere in the path.
pub fn looks_like_guideline_repo(current_dir: &Path) -> bool {
    let marker = PROJECT_SKILLS_DIR
        .iter()
        .fold(current_dir.to_path_buf(), |dir, part| dir.join(part))
        .join(SKILL_BUILDER_SENTINEL);

    marker.is_dir() && current_dir.to_string_lossy().contains(GUIDELINE_REPO_SENTINEL)
}

/// Whether `name` is a non-empty run of `[a-z0-9-]`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn check_name(name: &str) -> Result<String, Abort> {
    if is_valid_name(name) {
        Ok(name.to_string())
    } else {
        Err(Abort::InvalidName)
    }
}

pub fn check_description(description: &str) -> Result<String, Abort> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Abort::MissingDescription);
    }
    Ok(description.to_string())
}

pub fn check_template(selector: &str) -> Result<Template, Abort> {
    Template::from_selector(selector).ok_or(Abort::InvalidTemplate)
}

pub fn check_location(selector: &str) -> Result<Location, Abort> {
    Location::from_selector(selector).ok_or(Abort::InvalidLocation)
}

/// Turn a location policy into an absolute destination root.
///
/// `custom` is only consulted for [`Location::Custom`].
pub fn resolve_destination_root(
    location: Location,
    custom: Option<&str>,
    env: &Environment,
) -> Result<PathBuf, Abort> {
    let root = match location {
        Location::Project => PROJECT_SKILLS_DIR.iter().collect::<PathBuf>(),
        Location::Personal => {
            let home = env.home_dir.as_ref().ok_or(Abort::NoHomeDirectory)?;
            PROJECT_SKILLS_DIR
                .iter()
                .fold(home.clone(), |dir, part| dir.join(part))
        }
        Location::Custom => PathBuf::from(env.expand_home(custom.unwrap_or_default())),
    };
    Ok(env.resolve(&root))
}

/// Refuse destinations that textually sit inside the guidelines repository.
///
/// This is a substring heuristic: any path mentioning both sentinels is
/// rejected, even one that is unrelated to the repository.
pub fn check_restricted(destination_root: &Path) -> Result<(), Abort> {
    let text = destination_root.to_string_lossy();
    if text.contains(GUIDELINE_REPO_SENTINEL) && text.contains(SKILL_BUILDER_SENTINEL) {
        return Err(Abort::RestrictedDestination(destination_root.to_path_buf()));
    }
    Ok(())
}

/// Refuse to reuse a path that already has something at it.
pub fn check_destination_free(skill_dir: &Path) -> Result<(), Abort> {
    if skill_dir.symlink_metadata().is_ok() {
        return Err(Abort::DestinationExists(skill_dir.to_path_buf()));
    }
    Ok(())
}

/// Locate the template's source directory under `templates_root`.
pub fn check_template_exists(templates_root: &Path, template: Template) -> Result<PathBuf, Abort> {
    let dir = templates_root.join(template.id());
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(Abort::TemplateNotFound(template))
    }
}
