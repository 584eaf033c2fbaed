//! `nut template` command - print a starter template document

use console::style;
use miette::Result;

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {}

const STARTER_TEMPLATE: &str = r#"# Neotoma upload template
#
# Each entry names one column the dataset files must carry. `vocab`
# restricts a column to an enumerated set of values; `vocab: null` leaves
# it unrestricted. Entries may carry extra fields (notes, database
# mappings); the validator ignores them.
metadata:
  - column: depth
    vocab: null
  - column: thickness
    vocab: null
  - column: unitsthickness
    vocab: ["cm", "m"]
  - column: labnumber
    vocab: null
  - column: sampledate
    vocab: null
  - column: taxonname
    vocab: null
"#;

pub fn run(_args: TemplateArgs) -> Result<()> {
    // Template to stdout (can be redirected to file), hint to stderr so it
    // doesn't interfere with redirected output.
    print!("{}", STARTER_TEMPLATE);

    eprintln!();
    eprintln!(
        "{} Starter template generated. Redirect to file: nut template > template.yml",
        style("→").blue()
    );

    Ok(())
}
