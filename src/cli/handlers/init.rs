use anyhow::Result;
use colored::Colorize;

use crate::config::{BlogConfig, CONFIG_FILE_NAME};
use crate::error::BlogError;

use super::CommandContext;

pub fn handle_init(ctx: CommandContext, force: bool) -> Result<()> {
    let config_path = ctx.root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(BlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    BlogConfig::default().save(&config_path)?;

    println!(
        "{} blogql config in {}",
        "Initialized".green(),
        ctx.root.display()
    );
    println!("  Config: {}", config_path.display());
    Ok(())
}
