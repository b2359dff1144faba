use anyhow::Result;
use clap::{Arg, Command};
use std::io;

use get_projects_root::get_projects_root;
use new_project::make_project;

fn main() -> Result<()> {
    let matches = Command::new("new_project")
        .version("0.1.0")
        .about("Creates a new Eagle project from the project template")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Name of project to create"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let name = matches.get_one::<String>("name").expect("required argument");
    let verbose = *matches.get_one::<bool>("verbose").unwrap();

    let root = get_projects_root().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if root.join(name).exists() {
        eprintln!("Project '{}' already exists", name);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    make_project(&root, name, &mut input, &mut out, verbose)
}
