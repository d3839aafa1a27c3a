use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn bin(dir: &TempDir) -> Command {
    let project = dir.path().join("project");
    let home = dir.path().join("home");
    fs::create_dir_all(&project).expect("mkdir project");
    fs::create_dir_all(&home).expect("mkdir home");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scaffold-skill"));
    cmd.current_dir(project)
        .env("HOME", home)
        .env("SCAFFOLD_SKILL_TEMPLATES", templates_root());
    cmd
}

fn tree(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.expect("walk"))
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).expect("prefix").to_path_buf();
            let data = entry
                .file_type()
                .is_file()
                .then(|| fs::read(entry.path()).expect("read"));
            (rel, data)
        })
        .collect()
}

#[test]
fn cli_version() {
    let dir = TempDir::new().expect("temp dir");
    bin(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(VERSION));
}

#[test]
fn cli_rejects_arguments() {
    let dir = TempDir::new().expect("temp dir");
    bin(&dir).arg("extra").assert().failure();
}

#[test]
fn cli_creates_project_skill() {
    let dir = TempDir::new().expect("temp dir");
    let skill_dir = dir.path().join("project/.claude/skills/my-api-skill");

    bin(&dir)
        .write_stdin("my-api-skill\nCalls the weather API\n1\n1\n")
        .assert()
        .success()
        .stdout(contains("Skill Scaffolding Tool"))
        .stdout(contains("✓ Skill created successfully!"))
        .stdout(contains("Template: basic-skill"))
        .stdout(contains("my-api-skill"));

    let skill_md = fs::read_to_string(skill_dir.join("SKILL.md")).expect("read SKILL.md");
    let mut lines = skill_md.lines();
    assert_eq!(lines.next(), Some("---"));
    assert_eq!(lines.next(), Some("name: my-api-skill"));
    assert_eq!(lines.next(), Some("description: Calls the weather API"));
}

#[test]
fn cli_copy_matches_template_except_metadata() {
    let dir = TempDir::new().expect("temp dir");
    let skill_dir = dir.path().join("project/.claude/skills/copied");

    bin(&dir)
        .write_stdin("copied\nCopy check\n1\n1\n")
        .assert()
        .success();

    let source = tree(&templates_root().join("basic-skill"));
    let created = tree(&skill_dir);
    assert_eq!(
        source.keys().collect::<Vec<_>>(),
        created.keys().collect::<Vec<_>>()
    );

    for (rel, data) in &source {
        if rel == Path::new("SKILL.md") {
            continue;
        }
        assert_eq!(data, &created[rel], "{} differs", rel.display());
    }

    let before = fs::read_to_string(templates_root().join("basic-skill/SKILL.md")).expect("read");
    let after = fs::read_to_string(skill_dir.join("SKILL.md")).expect("read");
    let before: Vec<&str> = before.lines().collect();
    let after: Vec<&str> = after.lines().collect();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        if old.starts_with("name: ") {
            assert_eq!(*new, "name: copied");
        } else if old.starts_with("description: ") {
            assert_eq!(*new, "description: Copy check");
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn cli_copies_nested_template_files() {
    let dir = TempDir::new().expect("temp dir");
    let skill_dir = dir.path().join("home/.claude/skills/scripted");

    bin(&dir)
        .write_stdin("scripted\nRuns helpers\n7\n2\n")
        .assert()
        .success()
        .stdout(contains("Template: script-based-skill"));

    assert!(skill_dir.join("scripts/helper.py").is_file());
}

#[test]
fn cli_custom_path_expands_home() {
    let dir = TempDir::new().expect("temp dir");

    bin(&dir)
        .write_stdin("custom-one\nSomewhere else\n6\n3\n~/work/skills\n")
        .assert()
        .success()
        .stdout(contains("Will create in:"));

    let skill_dir = dir.path().join("home/work/skills/custom-one");
    assert!(skill_dir.join("SKILL.md").is_file());
    assert!(skill_dir.join("reference.md").is_file());
}

#[test]
fn cli_invalid_name_aborts_cleanly() {
    let dir = TempDir::new().expect("temp dir");

    bin(&dir)
        .write_stdin("My Skill\nCalls the weather API\n1\n1\n")
        .assert()
        .success()
        .stdout(contains("Invalid name"))
        .stdout(contains("Brief description").not());

    assert!(!dir.path().join("project/.claude").exists());
}

#[test]
fn cli_invalid_choices_abort() {
    for (input, message) in [
        ("ok\n\n", "Description is required"),
        ("ok\nText\n0\n", "Invalid template choice"),
        ("ok\nText\n1\n9\n", "Invalid location choice"),
    ] {
        let dir = TempDir::new().expect("temp dir");
        bin(&dir)
            .write_stdin(input)
            .assert()
            .success()
            .stdout(contains(message));
        assert!(!dir.path().join("project/.claude").exists());
    }
}

#[test]
fn cli_refuses_existing_skill_directory() {
    let dir = TempDir::new().expect("temp dir");
    let skill_dir = dir.path().join("project/.claude/skills/taken");
    fs::create_dir_all(&skill_dir).expect("mkdir");
    fs::write(skill_dir.join("SKILL.md"), "hand written\n").expect("write");

    bin(&dir)
        .write_stdin("taken\nAnother attempt\n1\n1\n")
        .assert()
        .success()
        .stdout(contains("Skill directory already exists"));

    assert_eq!(
        fs::read_to_string(skill_dir.join("SKILL.md")).expect("read"),
        "hand written\n"
    );
    assert_eq!(tree(&skill_dir).len(), 1);
}

#[test]
fn cli_refuses_guideline_repository_destination() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("skilz/.claude/skills/skill-builder/generated");

    bin(&dir)
        .write_stdin(format!("blocked\nText\n1\n3\n{}\n", target.display()))
        .assert()
        .success()
        .stdout(contains("Cannot create specific skills"));

    assert!(!dir.path().join("skilz").exists());
}

#[test]
fn cli_warns_inside_guideline_repository() {
    let dir = TempDir::new().expect("temp dir");
    let repo = dir.path().join("project/skilz");
    fs::create_dir_all(repo.join(".claude/skills/skill-builder")).expect("mkdir");

    bin(&dir)
        .current_dir(&repo)
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("WARNING"))
        .stdout(contains("Navigate to your project first"));
}

#[test]
fn cli_missing_template_reported() {
    let dir = TempDir::new().expect("temp dir");
    let empty_templates = dir.path().join("no-templates");
    fs::create_dir_all(&empty_templates).expect("mkdir");

    bin(&dir)
        .env("SCAFFOLD_SKILL_TEMPLATES", &empty_templates)
        .write_stdin("fresh\nText\n2\n1\n")
        .assert()
        .success()
        .stdout(contains("Template not found: analysis-skill"));

    assert!(!dir.path().join("project/.claude/skills/fresh").exists());
}

#[test]
#[cfg(unix)]
fn cli_copy_failure_exits_nonzero() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("temp dir");
    let templates = dir.path().join("templates");
    let secret = templates.join("basic-skill/secret.md");
    fs::create_dir_all(secret.parent().unwrap()).expect("mkdir");
    fs::write(&secret, "no peeking").expect("write");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Root can read anything; the failure cannot be provoked there.
    if fs::read(&secret).is_ok() {
        return;
    }

    bin(&dir)
        .env("SCAFFOLD_SKILL_TEMPLATES", &templates)
        .write_stdin("broken\nText\n1\n1\n")
        .assert()
        .failure()
        .stderr(contains("Error: Failed to copy"));
}

#[test]
fn cli_closed_input_aborts() {
    let dir = TempDir::new().expect("temp dir");

    bin(&dir)
        .write_stdin("half-done\n")
        .assert()
        .success()
        .stdout(contains("Input closed"));

    assert!(!dir.path().join("project/.claude").exists());
}

#[test]
fn cli_writes_metadata_values_verbatim() {
    let dir = TempDir::new().expect("temp dir");
    let skill_dir = dir.path().join("project/.claude/skills/42");

    bin(&dir)
        .write_stdin("42\nCalls the weather API: v2\n1\n1\n")
        .assert()
        .success()
        .stdout(contains("✓ Skill created successfully!"))
        .stdout(contains("Check SKILL.md by hand"));

    let skill_md = fs::read_to_string(skill_dir.join("SKILL.md")).expect("read SKILL.md");
    let lines: Vec<&str> = skill_md.lines().take(3).collect();
    assert_eq!(
        lines,
        vec!["---", "name: 42", "description: Calls the weather API: v2"]
    );
}
