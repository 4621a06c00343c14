use anyhow::Result;

use super::CommandContext;
use super::utils::schema_for;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    print!("{}", schema_for(&ctx.config).sdl());
    Ok(())
}
