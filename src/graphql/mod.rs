//! GraphQL schema, resolvers and HTTP transport for blogql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! blogql serve --port 4000
//!
//! # Execute a query from the CLI against a freshly seeded store
//! blogql query '{ post(id: "12") { title comments { body } } }'
//!
//! # Execute a mutation from the CLI
//! blogql mutate 'createUser(data: { name: "x", email: "x@x.com" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `posts`, `comments`, `me`, `post`
//! - **Mutations**: `createUser`, `createPost`, `createComment`
//! - **Relationships**: `User.posts`, `User.comments`, `Post.author`,
//!   `Post.comments`, `Comment.user`, `Comment.post`

mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;
