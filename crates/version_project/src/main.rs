use anyhow::Result;
use clap::{Arg, Command};
use std::io;

use get_projects_root::get_projects_root;
use version_project::up_project_version;

fn main() -> Result<()> {
    let matches = Command::new("version_project")
        .version("0.1.0")
        .about("Copies an Eagle project's highest version directory forward")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Name of project to version"),
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

    if !root.join(name).exists() {
        eprintln!("Project '{}' does not exist", name);
        std::process::exit(1);
    }

    up_project_version(&root, name, &mut io::stdout(), verbose)?;
    Ok(())
}
