mod init;
mod mutate;
mod query;
mod schema;
mod seed;
mod serve;
mod utils;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::handle_serve;

use crate::config::BlogConfig;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: BlogConfig, root: PathBuf) -> Self {
        Self { config, root }
    }
}
