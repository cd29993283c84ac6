//! Render command - template + JSON values to rendered text

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use stencil_core::render::scan_directives;
use stencil_core::{RenderOptions, Renderer};

use crate::cli::Cli;
use crate::output;

/// Render the template and write the result
///
/// The rendered text goes to the output file and is echoed on stdout, so it
/// can be piped; status lines go to stderr.
pub fn run(cli: Cli) -> Result<()> {
    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("failed to read template '{}'", cli.template.display()))?;
    let values_text = fs::read_to_string(&cli.values)
        .with_context(|| format!("failed to read values '{}'", cli.values.display()))?;
    let doc: Value = serde_json::from_str(&values_text)
        .with_context(|| format!("failed to parse JSON values in '{}'", cli.values.display()))?;

    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => template_dir(&cli.template),
    };

    if cli.verbose {
        eprintln!(
            "{} Rendering '{}' ({} directives)",
            "→".cyan(),
            cli.template.display(),
            scan_directives(&template).len()
        );
    }

    let renderer = Renderer::new(RenderOptions {
        strict: cli.strict,
        ..RenderOptions::default()
    });

    let started = Instant::now();
    let rendered = renderer.render(&template, &doc, &base_dir)?;
    let elapsed = started.elapsed();

    fs::write(&cli.output, &rendered)
        .with_context(|| format!("failed to write '{}'", cli.output.display()))?;

    output::print_rendered(&rendered)?;

    eprintln!(
        "{} Wrote {} ({} bytes)",
        "✓".green().bold(),
        cli.output.display(),
        rendered.len()
    );
    if cli.verbose {
        eprintln!("{} Rendered in {:.2?}", "→".cyan(), elapsed);
    }

    Ok(())
}

/// Directory of the template file, falling back to the current directory
fn template_dir(template: &Path) -> PathBuf {
    match template.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
