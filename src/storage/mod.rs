//! In-memory storage layer for blogql.
//!
//! All records live in process memory and are rebuilt on every start. The
//! [`Store`] owns three append-only collections and is shared by every
//! request through an `Arc`.
//!
//! ## Components
//!
//! - [`Store`]: append, scan and validate-then-append creation
//! - [`IdGenerator`]: fresh unique ids for users and posts
//! - [`seed_data`]: the fixed demo records loaded at startup

mod id;
mod seed;
mod store;

pub use id::IdGenerator;
pub use seed::{SeedData, seed_data};
pub use store::{NewComment, NewPost, NewUser, Store};
