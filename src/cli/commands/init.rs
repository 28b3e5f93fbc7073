use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!(
            "Created default config at {}",
            Config::default_config_path().display()
        );
    } else {
        println!(
            "Config already exists at {}",
            Config::default_config_path().display()
        );
    }
    Ok(())
}
