//! `nut upload` command - validate dataset files, then stage rows for upload
//!
//! Only files that pass the structural check are handed to the sink; a file
//! with vocabulary problems is staged with a warning, since its shape is
//! right and the offending values are already in the run log. The actual
//! database layer lives behind the `SampleSink` trait; this command drives
//! the in-memory sink so a batch can be rehearsed before anything touches
//! Neotoma.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::args::GlobalOpts;
use crate::core::{hash_file, Config, Manifest};
use crate::dataset::{scanner, Table};
use crate::schema::Schema;
use crate::upload::{insert_table, MemorySink};
use crate::validate;

#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// Directory containing the dataset files (default: data/)
    #[arg(long, visible_alias = "path")]
    pub data: Option<PathBuf>,

    /// YAML template file to validate against (default: template.yml)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Manifest of already-uploaded files
    #[arg(long, default_value = "uploaded.yml")]
    pub manifest: PathBuf,

    /// Skip files whose contents are unchanged since their last upload
    #[arg(long)]
    pub skip_processed: bool,
}

#[derive(Default)]
struct UploadStats {
    files_staged: usize,
    files_skipped: usize,
    rows_staged: usize,
}

pub fn run(args: UploadArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let data_dir = args.data.unwrap_or_else(|| config.data_dir());
    let template_path = args.template.unwrap_or_else(|| config.template_path());

    if !data_dir.is_dir() {
        return Err(miette::miette!(
            "there is no directory named '{}'; set the --data property",
            data_dir.display()
        ));
    }
    if !template_path.is_file() {
        return Err(miette::miette!(
            "the template '{}' could not be found; set the --template property",
            template_path.display()
        ));
    }

    let schema = Schema::from_path(&template_path).into_diagnostic()?;
    let filenames = scanner::scan(&data_dir).into_diagnostic()?;
    let mut manifest = Manifest::load(&args.manifest).into_diagnostic()?;

    let mut sink = MemorySink::new();
    let mut stats = UploadStats::default();

    for filename in &filenames {
        let path = data_dir.join(filename);

        let digest = match hash_file(&path) {
            Ok(d) => d,
            Err(e) => {
                if !global.quiet {
                    println!("{} {} - {}", style("✗").red(), filename, e);
                }
                stats.files_skipped += 1;
                continue;
            }
        };

        if args.skip_processed && manifest.is_processed(filename, &digest) {
            if !global.quiet {
                println!(
                    "{} {} - already uploaded, unchanged",
                    style("·").dim(),
                    filename
                );
            }
            stats.files_skipped += 1;
            continue;
        }

        let result = validate::validate_file(&data_dir, filename, &schema);

        if let Some(error) = &result.error {
            if !global.quiet {
                println!("{} {} - {}", style("✗").red(), filename, error);
            }
            stats.files_skipped += 1;
            continue;
        }

        if !result.structural.as_ref().is_some_and(|s| s.ok) {
            if !global.quiet {
                println!(
                    "{} {} - skipped, column names do not match the template",
                    style("✗").red(),
                    filename
                );
            }
            stats.files_skipped += 1;
            continue;
        }

        if result.vocab.iter().any(|v| !v.ok) && !global.quiet {
            println!(
                "{} {} - staging despite vocabulary problems",
                style("!").yellow(),
                filename
            );
        }

        // The structural check passed, so the file parses; a read error at
        // this point is a race with an external writer and skips the file.
        let table = match Table::from_path(&path) {
            Ok(t) => t,
            Err(e) => {
                if !global.quiet {
                    println!("{} {} - {}", style("✗").red(), filename, e);
                }
                stats.files_skipped += 1;
                continue;
            }
        };

        let outcome = insert_table(&mut sink, filename, &table)
            .map_err(|e| miette::miette!("upload of '{}' failed: {}", filename, e))?;

        manifest.mark(filename, &digest);
        stats.files_staged += 1;
        stats.rows_staged += outcome.samples.len();

        if !global.quiet {
            let marker = if outcome.valid {
                style("✓").green()
            } else {
                style("!").yellow()
            };
            println!(
                "{} {} - {} row(s) staged",
                marker,
                filename,
                outcome.samples.len()
            );
        }
    }

    manifest.save(&args.manifest).into_diagnostic()?;

    if !global.quiet {
        println!();
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", style("Upload Summary").bold());
        println!("{}", style("─".repeat(60)).dim());
        println!("  Files staged:   {}", style(stats.files_staged).green());
        println!("  Files skipped:  {}", style(stats.files_skipped).red());
        println!("  Rows staged:    {}", style(stats.rows_staged).cyan());
        println!("  Manifest:       {}", args.manifest.display());
        println!();
    }

    Ok(())
}
