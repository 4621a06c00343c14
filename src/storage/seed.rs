use crate::model::{Comment, Post, User};
use serde::Serialize;

/// The demo records every store starts with unless seeding is disabled.
#[derive(Debug, Clone, Serialize)]
pub struct SeedData {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

pub fn seed_data() -> SeedData {
    SeedData {
        users: vec![
            User::new("1", "apple", "apple@a.com").with_age(Some(28)),
            User::new("2", "banana", "banana@b.com"),
            User::new("3", "kivi", "kivi@k.com").with_age(Some(28)),
        ],
        posts: vec![
            Post::new("11", "apple", "xrexhcfjvghbjnk", "1").with_published(true),
            Post::new("12", "banana", "grrhcfjbhnk", "1").with_published(true),
            Post::new("13", "kivi", "trdfyguio", "3").with_published(true),
        ],
        comments: vec![
            Comment::new("2", "11", "comment on post 1 by user 2"),
            Comment::new("1", "12", "comment on post 2 by user 1"),
            Comment::new("3", "12", "comment on post 2 by user 3"),
            Comment::new("1", "13", "comment on post 3 by user 1"),
        ],
    }
}
