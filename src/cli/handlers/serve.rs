use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::ServeArgs;
use crate::config::BlogConfig;
use crate::graphql::{build_schema, run_server};
use crate::storage::Store;

use super::CommandContext;

/// Layer command-line flags over the loaded config and re-check it.
fn apply_overrides(config: &mut BlogConfig, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(mode) = args.id_mode {
        config.store.id_mode = mode;
    }
    if args.no_playground {
        config.server.playground = false;
    }
    if args.no_seed {
        config.store.seed = false;
    }
    config.validate().context("Invalid serve options")?;
    Ok(())
}

pub fn handle_serve(ctx: CommandContext, args: ServeArgs) -> Result<()> {
    let mut config = ctx.config;
    apply_overrides(&mut config, args)?;

    let store = Arc::new(Store::from_settings(&config.store));
    tracing::info!(
        users = store.users().len(),
        posts = store.posts().len(),
        comments = store.comments().len(),
        id_mode = %config.store.id_mode,
        "Store ready"
    );
    let schema = build_schema(store);

    let url = format!(
        "http://{}:{}{}",
        config.server.host, config.server.port, config.server.path
    );
    println!("Starting GraphQL server on {}", url);
    if config.server.playground {
        println!("GraphiQL: {}", url);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &config.server))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::config::IdMode;
    use clap::Parser;

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Serve(args) => args,
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = BlogConfig::default();
        let args = serve_args(&[
            "blogql",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--id-mode",
            "Sequential",
            "--no-playground",
            "--no-seed",
        ]);

        apply_overrides(&mut config, args).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.id_mode, IdMode::Sequential);
        assert!(!config.server.playground);
        assert!(!config.store.seed);
    }

    #[test]
    fn test_unknown_id_mode_rejected() {
        assert!(Cli::try_parse_from(["blogql", "serve", "--id-mode", "uuid"]).is_err());
    }

    #[test]
    fn test_switch_to_random_revalidates_id_length() {
        let mut config = BlogConfig::default();
        config.store.id_mode = IdMode::Sequential;
        config.store.id_length = 2;

        let args = serve_args(&["blogql", "serve", "--id-mode", "random"]);
        assert!(apply_overrides(&mut config, args).is_err());
    }
}
