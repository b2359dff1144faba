use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use copy_template::copy_tree;
use description_codec::ProjectDescription;
use prompt_input::{read_content_lines, read_creator};

/// Directory under the projects root that new projects are copied from.
pub const TEMPLATE_DIR: &str = "Project_Template";

/// Creates `<root>/<name>` from the project template: prompts for the
/// description lines (the first is the title) and the creator, copies the
/// template tree, then writes the project DESCRIPTION file. The caller has
/// already checked that the target does not exist.
pub fn make_project<R: BufRead, W: Write>(
    root: &Path,
    name: &str,
    input: &mut R,
    out: &mut W,
    verbose: bool,
) -> Result<()> {
    writeln!(out, "Creating project '{}'", name).context("Failed to write output")?;

    let entered = read_content_lines(input, out)?;
    let creator = read_creator(input, out)?;

    let mut entered = entered.into_iter();
    let title = entered.next().unwrap_or_default();
    let content: Vec<String> = entered.collect();

    let template = root.join(TEMPLATE_DIR);
    let target = root.join(name);
    if verbose {
        writeln!(
            out,
            "Copying {} to {}",
            template.display(),
            target.display()
        )
        .context("Failed to write output")?;
    }
    copy_tree(&template, &target)
        .with_context(|| format!("Failed to copy project template {}", template.display()))?;

    let description = ProjectDescription::new(name, &title, content, creator, None);
    description.write_to_project(root)?;

    writeln!(out, "Created project '{}'", name).context("Failed to write output")?;
    Ok(())
}
