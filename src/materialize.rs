//! Copy a template into place and patch its SKILL.md.
//!
//! Nothing here is rolled back: if a copy fails halfway the files written so
//! far stay on disk and the error is returned to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScaffoldError;
use crate::formatting::{parse_frontmatter, trim_line_ending};
use crate::skill::{SkillRequest, SKILL_MD};

/// What the materializer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// The newly created skill directory.
    pub skill_dir: PathBuf,
    /// Number of files copied out of the template.
    pub files_copied: usize,
    /// Result of patching SKILL.md.
    pub metadata: MetadataPatch,
}

/// Outcome of [`patch_metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataPatch {
    /// The template has no SKILL.md.
    Absent,
    /// SKILL.md was rewritten and its frontmatter reads back correctly.
    Patched,
    /// SKILL.md was rewritten but its frontmatter does not parse or does
    /// not read back the values written into it.
    Unverified(String),
}

/// Create the skill directory from `template_dir`.
pub fn materialize(
    request: &SkillRequest,
    template_dir: &Path,
) -> Result<Materialized, ScaffoldError> {
    let skill_dir = request.skill_dir();
    let files_copied = copy_tree(template_dir, &skill_dir)?;
    let metadata = patch_metadata(&skill_dir, &request.name, &request.description)?;

    Ok(Materialized {
        skill_dir,
        files_copied,
        metadata,
    })
}

/// Recursively copy `src` into `dest`, creating `dest` and its parents.
///
/// Every entry is copied; directories are recreated and everything else is
/// copied byte for byte. Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, ScaffoldError> {
    create_dir(dest)?;

    let mut files = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| ScaffoldError::CopyFailed {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
            files += 1;
        }
    }

    Ok(files)
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDirFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite the `name:` and `description:` lines of `skill_dir/SKILL.md`.
///
/// A missing SKILL.md is not an error.
pub fn patch_metadata(
    skill_dir: &Path,
    name: &str,
    description: &str,
) -> Result<MetadataPatch, ScaffoldError> {
    let path = skill_dir.join(SKILL_MD);
    if !path.is_file() {
        return Ok(MetadataPatch::Absent);
    }

    let content = fs::read_to_string(&path).map_err(|source| ScaffoldError::ReadFailed {
        path: path.clone(),
        source,
    })?;
    let patched = patch_metadata_text(&content, name, description);
    fs::write(&path, &patched).map_err(|source| ScaffoldError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    Ok(verify(&patched, name, description))
}

/// Replace the first `name: <value>` and `description: <value>` lines.
///
/// Only lines starting exactly with the key, a colon and a space, followed by
/// a non-empty value, are replaced. Values are written verbatim and line
/// endings are kept as they were.
pub fn patch_metadata_text(content: &str, name: &str, description: &str) -> String {
    let mut out = String::with_capacity(content.len() + description.len());
    let mut name_done = false;
    let mut description_done = false;

    for line in content.split_inclusive('\n') {
        let body = trim_line_ending(line);
        let ending = &line[body.len()..];

        if !name_done && has_value(body, "name") {
            out.push_str(&format!("name: {name}{ending}"));
            name_done = true;
        } else if !description_done && has_value(body, "description") {
            out.push_str(&format!("description: {description}{ending}"));
            description_done = true;
        } else {
            out.push_str(line);
        }
    }

    out
}

fn has_value(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(": "))
        .is_some_and(|value| !value.is_empty())
}

fn verify(content: &str, name: &str, description: &str) -> MetadataPatch {
    let map = match parse_frontmatter(content) {
        Ok(map) => map,
        Err(err) => return MetadataPatch::Unverified(err.to_string()),
    };

    let unreadable: Vec<&str> = [("name", name), ("description", description)]
        .into_iter()
        .filter(|(key, value)| map.get(*key).and_then(serde_yaml::Value::as_str) != Some(*value))
        .map(|(key, _)| key)
        .collect();

    if unreadable.is_empty() {
        MetadataPatch::Patched
    } else {
        MetadataPatch::Unverified(format!(
            "YAML does not read back {} as written",
            unreadable.join(" and ")
        ))
    }
}
