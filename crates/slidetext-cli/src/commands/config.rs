use anyhow::Result;

use slidetext_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            config.save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let source = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}\n", path.display(), source);
    print!("{}", config.to_toml()?);
    println!("\n# log file: {}", config.log_path().display());

    Ok(())
}
