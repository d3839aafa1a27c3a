//! Interactive scaffolder for Agent Skills.
//!
//! A run has three stages executed strictly in order:
//!
//! 1. prompts collect the name, description, template and location;
//! 2. guards validate each answer as soon as it arrives and stop the run on
//!    the first failure;
//! 3. the materializer copies the template and patches `SKILL.md`.
//!
//! Nothing is written to disk until every guard has passed.

pub mod config;
pub mod error;
pub mod formatting;
pub mod guard;
pub mod materialize;
pub mod prompt;
pub mod skill;

use std::io::{BufRead, Write};

pub use config::{Environment, TEMPLATES_ENV_VAR};
pub use error::{Abort, ParseError, ScaffoldError, Stop};
pub use formatting::parse_frontmatter;
pub use guard::is_valid_name;
pub use materialize::{copy_tree, patch_metadata, patch_metadata_text, Materialized, MetadataPatch};
pub use prompt::Session;
pub use skill::{Location, SkillRequest, Template};

/// How a run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The skill directory was created.
    Created {
        request: SkillRequest,
        materialized: Materialized,
    },
    /// A guard stopped the run; nothing was written.
    Aborted(Abort),
}

/// Run the whole prompt, guard and materialize sequence over `session`.
///
/// Guard failures are reported to the session and returned as
/// [`Outcome::Aborted`]; only I/O failures become errors.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    env: &Environment,
) -> Result<Outcome, ScaffoldError> {
    match scaffold(session, env) {
        Ok((request, materialized)) => {
            session
                .report_created(request.template, &materialized)
                .map_err(ScaffoldError::Prompt)?;
            Ok(Outcome::Created {
                request,
                materialized,
            })
        }
        Err(Stop::Abort(abort)) => {
            session.report_abort(&abort).map_err(ScaffoldError::Prompt)?;
            Ok(Outcome::Aborted(abort))
        }
        Err(Stop::Fatal(err)) => Err(err),
    }
}

fn scaffold<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    env: &Environment,
) -> Result<(SkillRequest, Materialized), Stop> {
    session.banner()?;

    if guard::looks_like_guideline_repo(&env.current_dir) && !session.confirm_guideline_repo()? {
        return Err(Abort::RepositoryDeclined.into());
    }

    let name = guard::check_name(&session.ask_name()?)?;
    let description = guard::check_description(&session.ask_description()?)?;
    let template = guard::check_template(&session.ask_template_choice()?)?;
    let location = guard::check_location(&session.ask_location_choice()?)?;

    let custom = match location {
        Location::Custom => Some(session.ask_custom_path()?),
        Location::Project | Location::Personal => None,
    };
    let destination_root = guard::resolve_destination_root(location, custom.as_deref(), env)?;
    session.announce_destination(&destination_root)?;
    guard::check_restricted(&destination_root)?;

    let request = SkillRequest {
        name,
        description,
        template,
        destination_root,
    };
    guard::check_destination_free(&request.skill_dir())?;
    let template_dir = guard::check_template_exists(&env.templates_root, template)?;

    let materialized = materialize::materialize(&request, &template_dir)?;
    Ok((request, materialized))
}
