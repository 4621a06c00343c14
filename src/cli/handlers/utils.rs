use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::BlogConfig;
use crate::graphql::{BlogSchema, build_schema};
use crate::storage::Store;

pub fn schema_for(config: &BlogConfig) -> BlogSchema {
    build_schema(Arc::new(Store::from_settings(&config.store)))
}

/// Run one request to completion and print the JSON response.
///
/// Fails after printing when the response carries GraphQL errors so that the
/// exit status reflects them.
pub fn execute_and_print(
    config: &BlogConfig,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = schema_for(config);

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Failed to parse --variables as JSON")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
