use anyhow::Context;
use docstage::mirror::{Mirror as MirrorEngine, MirrorReporter};

use super::CommandOptions;

pub struct Mirror;

impl Mirror {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing mirror command");
        }

        let config = options.load_config()?;
        let report = MirrorEngine::new(config.mirror_config())
            .run()
            .context("Mirror operation failed")?;

        println!("{}", MirrorReporter::generate_summary(&report));
        Ok(())
    }
}
