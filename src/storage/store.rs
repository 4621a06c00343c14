use super::id::IdGenerator;
use super::seed::seed_data;
use crate::{
    config::StoreSettings,
    error::{BlogError, Result},
    model::{Comment, Post, User},
    search::SearchQuery,
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const USER_ID_PREFIX: &str = "u-";
const POST_ID_PREFIX: &str = "p-";

/// Fresh ids tried before giving up on a create
const MAX_ID_ATTEMPTS: usize = 64;

/// Fields supplied by a client when creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: String,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user: String,
    pub post: String,
    pub body: String,
}

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Collections {
    fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }
}

/// Append-only in-memory store for users, posts and comments.
///
/// Records are never updated or removed, so every scan returns records in
/// insertion order. Creation checks and the append happen under one write
/// lock.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Collections>,
    ids: IdGenerator,
}

impl Store {
    pub fn empty(ids: IdGenerator) -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
            ids,
        }
    }

    pub fn seeded(ids: IdGenerator) -> Self {
        let seed = seed_data();
        Self {
            inner: RwLock::new(Collections {
                users: seed.users,
                posts: seed.posts,
                comments: seed.comments,
            }),
            ids,
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        let ids = IdGenerator::from_settings(settings);
        if settings.seed {
            Self::seeded(ids)
        } else {
            Self::empty(ids)
        }
    }

    // The collections are only ever appended to, so a panic while holding the
    // lock cannot leave them half-written.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh_id(&self, prefix: &str, taken: impl Fn(&str) -> bool) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next(prefix);
            if !taken(&candidate) {
                return Ok(candidate);
            }
        }
        tracing::error!(prefix, attempts = MAX_ID_ATTEMPTS, "Could not find a free id");
        Err(BlogError::IdsExhausted(prefix.to_string()))
    }

    pub fn append_user(&self, user: User) {
        self.write().users.push(user);
    }

    pub fn append_post(&self, post: Post) {
        self.write().posts.push(post);
    }

    pub fn append_comment(&self, comment: Comment) {
        self.write().comments.push(comment);
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.read().posts.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.read().comments.clone()
    }

    /// Users whose name contains `query` (case-insensitive); all users when
    /// the query is absent or empty.
    pub fn search_users(&self, query: Option<&str>) -> Vec<User> {
        let Some(query) = SearchQuery::parse(query) else {
            return self.users();
        };
        self.read()
            .users
            .iter()
            .filter(|u| query.matches_user(u))
            .cloned()
            .collect()
    }

    pub fn search_posts(&self, query: Option<&str>) -> Vec<Post> {
        let Some(query) = SearchQuery::parse(query) else {
            return self.posts();
        };
        self.read()
            .posts
            .iter()
            .filter(|p| query.matches_post(p))
            .cloned()
            .collect()
    }

    pub fn search_comments(&self, query: Option<&str>) -> Vec<Comment> {
        let Some(query) = SearchQuery::parse(query) else {
            return self.comments();
        };
        self.read()
            .comments
            .iter()
            .filter(|c| query.matches_comment(c))
            .cloned()
            .collect()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.read().find_user(id).cloned()
    }

    pub fn post(&self, id: &str) -> Option<Post> {
        self.read().find_post(id).cloned()
    }

    pub fn posts_by_author(&self, user_id: &str) -> Vec<Post> {
        self.read()
            .posts
            .iter()
            .filter(|p| p.author == user_id)
            .cloned()
            .collect()
    }

    pub fn comments_by_user(&self, user_id: &str) -> Vec<Comment> {
        self.read()
            .comments
            .iter()
            .filter(|c| c.user == user_id)
            .cloned()
            .collect()
    }

    pub fn comments_on_post(&self, post_id: &str) -> Vec<Comment> {
        self.read()
            .comments
            .iter()
            .filter(|c| c.post == post_id)
            .cloned()
            .collect()
    }

    pub fn create_user(&self, input: NewUser) -> Result<User> {
        let mut inner = self.write();

        if inner.users.iter().any(|u| u.email == input.email) {
            tracing::warn!(email = %input.email, "Rejected user with duplicate email");
            return Err(BlogError::DuplicateEmail(input.email));
        }

        let id = self.fresh_id(USER_ID_PREFIX, |id| inner.find_user(id).is_some())?;

        let user = User::new(id, input.name, input.email).with_age(input.age);
        inner.users.push(user.clone());
        tracing::info!(id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    pub fn create_post(&self, input: NewPost) -> Result<Post> {
        let mut inner = self.write();

        if inner.find_user(&input.author).is_none() {
            tracing::warn!(author = %input.author, "Rejected post with unknown author");
            return Err(BlogError::AuthorNotFound(input.author));
        }

        let id = self.fresh_id(POST_ID_PREFIX, |id| inner.find_post(id).is_some())?;

        let post = Post::new(id, input.title, input.body, input.author)
            .with_published(input.published);
        inner.posts.push(post.clone());
        tracing::info!(id = %post.id, author = %post.author, "Created post");
        Ok(post)
    }

    pub fn create_comment(&self, input: NewComment) -> Result<Comment> {
        let mut inner = self.write();

        if inner.find_user(&input.user).is_none() {
            tracing::warn!(user = %input.user, "Rejected comment with unknown user");
            return Err(BlogError::ReferenceNotFound {
                entity: "User",
                id: input.user,
            });
        }
        if inner.find_post(&input.post).is_none() {
            tracing::warn!(post = %input.post, "Rejected comment on unknown post");
            return Err(BlogError::ReferenceNotFound {
                entity: "Post",
                id: input.post,
            });
        }

        let comment = Comment::new(input.user, input.post, input.body);
        inner.comments.push(comment.clone());
        tracing::info!(user = %comment.user, post = %comment.post, "Created comment");
        Ok(comment)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from_settings(&StoreSettings::default())
    }
}
