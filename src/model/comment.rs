use serde::{Deserialize, Serialize};

/// A comment references both its writer and the post it belongs to by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub post: String,
    pub body: String,
}

impl Comment {
    pub fn new(user: impl Into<String>, post: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            post: post.into(),
            body: body.into(),
        }
    }
}
