use anyhow::{Context, Result};
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_seed,
    handle_serve,
};
use blogql::cli::{Cli, Commands};
use blogql::config::BlogConfig;
use blogql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let (mut config, config_path) = match cli.config {
        Some(path) => {
            let config = BlogConfig::load_from(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, Some(path))
        }
        None => BlogConfig::discover(&cwd).context("Failed to load blogql configuration")?,
    };

    if cli.verbose {
        config.logging.verbose = true;
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file;
    }

    let _log_guard = logging::init(&config.logging);
    match &config_path {
        Some(path) => tracing::debug!(config = %path.display(), "Loaded configuration"),
        None => tracing::debug!("No config file found, using defaults"),
    }

    let ctx = CommandContext::new(config, cwd);

    match cli.command {
        Commands::Serve(args) => handle_serve(ctx, args),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
        Commands::Seed { json } => handle_seed(json),
        Commands::Init { force } => handle_init(ctx, force),
    }
}
