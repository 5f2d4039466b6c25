use anyhow::Context;

use super::CommandOptions;

pub struct Config;

impl Config {
    pub fn execute(options: &CommandOptions<'_>) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing config command");
        }

        let config = options.load_config()?;
        let rendered =
            toml::to_string_pretty(&config).context("Failed to render configuration")?;

        println!("{rendered}");
        Ok(())
    }
}
