use std::path::Path;

use anyhow::Context;
use docstage::index::{GitLsFiles, IndexGenerator, IndexReporter};

use super::CommandOptions;

pub struct Index;

impl Index {
    pub fn execute(options: &CommandOptions<'_>, git_dir: &Path) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing index command");
            println!("Git directory: {}", git_dir.display());
        }

        let config = options.load_config()?;
        let report = IndexGenerator::new(config.index_config(), GitLsFiles::new(git_dir))
            .run()
            .context("Index generation failed")?;

        println!("{}", IndexReporter::generate_summary(&report));

        if !report.is_success() {
            anyhow::bail!(
                "{} of {} directories could not be indexed",
                report.errors.len(),
                report.errors.len() + report.written
            );
        }
        Ok(())
    }
}
