//! `nut validate` command - check dataset files against the template

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::args::{GlobalOpts, LogFormat};
use crate::core::Config;
use crate::dataset::scanner;
use crate::report::{FileResult, ReportWriter};
use crate::schema::Schema;
use crate::validate::validate_file;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing the dataset files (default: data/)
    #[arg(long, visible_alias = "path")]
    pub data: Option<PathBuf>,

    /// YAML template file to validate against (default: template.yml)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Where to write the run log (default: application.log)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Run log format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: LogFormat,

    /// Exit non-zero if any file fails a check
    #[arg(long)]
    pub strict: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let data_dir = args.data.unwrap_or_else(|| config.data_dir());
    let template_path = args.template.unwrap_or_else(|| config.template_path());
    let log_path = args.log.unwrap_or_else(|| config.log_path());

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

    if !global.quiet {
        println!(
            "{} Validating {} file(s) against '{}'...\n",
            style("→").blue(),
            filenames.len(),
            template_path.display()
        );
    }

    let mut writer = ReportWriter::create(&log_path, args.format.into()).into_diagnostic()?;
    let mut stats = ValidationStats::default();

    for filename in &filenames {
        let result = validate_file(&data_dir, filename, &schema);
        stats.files_checked += 1;

        if result.passed() {
            stats.files_passed += 1;
        } else {
            stats.files_failed += 1;
        }

        if !global.quiet {
            echo_result(&result, global.verbose);
        }

        writer.write(&result).into_diagnostic()?;
    }

    writer.finish().into_diagnostic()?;

    if !global.quiet {
        print_summary(&stats, &log_path);
    }

    // Per-file problems are reported, not fatal; the run succeeds as long
    // as every file was enumerated and logged.
    if args.strict && stats.files_failed > 0 {
        if stats.files_failed == 1 {
            Err(miette::miette!("validation failed: 1 file has problems"))
        } else {
            Err(miette::miette!(
                "validation failed: {} files have problems",
                stats.files_failed
            ))
        }
    } else {
        Ok(())
    }
}

fn echo_result(result: &FileResult, verbose: bool) {
    if result.passed() {
        println!("{} {}", style("✓").green(), result.filename);
        return;
    }

    if let Some(error) = &result.error {
        println!("{} {} - {}", style("✗").red(), result.filename, error);
        return;
    }

    println!(
        "{} {} - {} check(s) failed",
        style("✗").red(),
        result.filename,
        result.failed_checks()
    );

    if verbose {
        if let Some(structural) = &result.structural {
            if !structural.ok {
                for column in &structural.missing {
                    println!("    {}", style(format!("missing column '{}'", column)).yellow());
                }
                for column in &structural.extra {
                    println!("    {}", style(format!("unexpected column '{}'", column)).yellow());
                }
            }
        }
        for check in &result.vocab {
            if !check.ok {
                for value in &check.offending {
                    println!(
                        "    {}",
                        style(format!("'{}' is not in the '{}' vocabulary", value, check.column))
                            .yellow()
                    );
                }
            }
        }
    }
}

fn print_summary(stats: &ValidationStats, log_path: &std::path::Path) {
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    println!("  Run log:        {}", log_path.display());
    println!();

    if stats.files_failed == 0 {
        println!("{} All files passed validation!", style("✓").green().bold());
    }
}
