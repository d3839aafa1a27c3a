//! Process environment the scaffolder runs against.
//!
//! Everything the guards and the materializer need to know about the outside
//! world (working directory, home directory, templates location) is resolved
//! once into an [`Environment`] so the rest of the crate never reads ambient
//! process state.

use std::env;
use std::path::{Path, PathBuf};

/// Overrides the templates root when set.
pub const TEMPLATES_ENV_VAR: &str = "SCAFFOLD_SKILL_TEMPLATES";

const TEMPLATES_DIR: &str = "templates";

/// Resolved runtime context for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Directory the tool was launched from.
    pub current_dir: PathBuf,
    /// The user's home directory, if one could be found.
    pub home_dir: Option<PathBuf>,
    /// Directory holding one subdirectory per template.
    pub templates_root: PathBuf,
}

impl Environment {
    /// Resolve the environment from the running process.
    pub fn from_process() -> std::io::Result<Self> {
        let current_dir = env::current_dir()?;
        let templates_root = match env::var_os(TEMPLATES_ENV_VAR) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_templates_root(&current_dir),
        };

        Ok(Self {
            current_dir,
            home_dir: dirs::home_dir(),
            templates_root,
        })
    }

    /// Make `path` absolute against the current directory.
    ///
    /// Purely lexical: `.` and `..` components are folded without touching
    /// the filesystem, so paths that do not exist yet resolve too.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        };
        normalize(&joined)
    }

    /// Replace the first `~` in `raw` with the home directory.
    pub fn expand_home(&self, raw: &str) -> String {
        match &self.home_dir {
            Some(home) => raw.replacen('~', &home.to_string_lossy(), 1),
            None => raw.to_string(),
        }
    }
}

/// Locate the templates directory shipped next to the binary.
///
/// Checks `<exe>/../templates` (installed layout), `<exe>/../../templates`
/// (cargo `target/<profile>` layout) and `<exe>/templates`, then falls back
/// to `./templates`.
fn default_templates_root(current_dir: &Path) -> PathBuf {
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let candidates = [
            exe_dir.join("..").join(TEMPLATES_DIR),
            exe_dir.join("..").join("..").join(TEMPLATES_DIR),
            exe_dir.join(TEMPLATES_DIR),
        ];
        if let Some(found) = candidates.into_iter().find(|dir| dir.is_dir()) {
            return normalize(&found);
        }
    }
    current_dir.join(TEMPLATES_DIR)
}

fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
