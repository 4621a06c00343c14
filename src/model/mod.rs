//! Data models for blogql.
//!
//! This module defines the three record kinds held by the store:
//!
//! - [`User`]: an account with a unique email
//! - [`Post`]: an article written by a user
//! - [`Comment`]: a user's remark on a post (no identifier of its own)

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use user::User;
