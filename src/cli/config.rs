use crate::config::ProbeConfig;
use crate::dirs;
use crate::error::Result;

/// Execute the `config` command: print the resolved configuration.
pub fn execute() -> Result<()> {
    let config = ProbeConfig::load()?;
    let rendered = toml::to_string_pretty(&config)?;

    println!("# {}", dirs::config_path().display());
    print!("{rendered}");

    Ok(())
}
