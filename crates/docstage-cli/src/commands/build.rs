use std::path::Path;

use super::{CommandOptions, Index, Mirror};

pub struct Build;

impl Build {
    pub fn execute(options: &CommandOptions<'_>, git_dir: &Path) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing build command");
        }

        Mirror::execute(options)?;
        Index::execute(options, git_dir)
    }
}
