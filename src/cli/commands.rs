use crate::config::IdMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogql")]
#[command(
    author,
    version,
    about = "A tiny in-memory GraphQL API for users, posts and comments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .blogql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve(ServeArgs),

    /// Execute a GraphQL query against a freshly seeded store
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a freshly seeded store
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Print the demo records loaded at startup
    Seed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default .blogql.toml into the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "BLOGQL_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BLOGQL_PORT")]
    pub port: Option<u16>,

    /// Do not serve GraphiQL on GET requests
    #[arg(long)]
    pub no_playground: bool,

    /// Id generation for created records (random or sequential)
    #[arg(long, env = "BLOGQL_ID_MODE")]
    pub id_mode: Option<IdMode>,

    /// Start with empty collections instead of the demo data
    #[arg(long)]
    pub no_seed: bool,
}
