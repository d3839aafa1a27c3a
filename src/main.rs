use std::io;

use clap::Parser;

use skill_scaffold::{run, Environment, Session};

#[derive(Parser)]
#[command(
    name = "scaffold-skill",
    version,
    about = "Interactively create a new Agent Skill from a template"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    std::process::exit(run_interactive());
}

fn run_interactive() -> i32 {
    let env = match Environment::from_process() {
        Ok(env) => env,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let result = run(&mut session, &env);
    let closed = session.finish();

    match (result, closed) {
        (Ok(_), Ok(_)) => 0,
        (Err(err), _) => {
            eprintln!("Error: {err}");
            1
        }
        (Ok(_), Err(err)) => {
            eprintln!("Error: {err}");
            1
        }
    }
}
