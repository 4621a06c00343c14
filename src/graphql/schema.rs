use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::storage::Store;

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List users, optionally filtered by a case-insensitive name match
    async fn users(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<User>> {
        let users = store(ctx)?.search_users(query.as_deref());
        Ok(users.into_iter().map(User::from).collect())
    }

    /// List posts, optionally filtered by a case-insensitive title or body match
    async fn posts(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Post>> {
        let posts = store(ctx)?.search_posts(query.as_deref());
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// List comments, optionally filtered by a case-insensitive body match
    async fn comments(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Comment>> {
        let comments = store(ctx)?.search_comments(query.as_deref());
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    /// Get a single user by ID
    async fn me(&self, ctx: &Context<'_>, id: Option<String>) -> async_graphql::Result<Option<User>> {
        match id.as_deref() {
            None | Some("") => Ok(None),
            Some(id) => Ok(store(ctx)?.user(id).map(User::from)),
        }
    }

    /// Get a single post by ID
    async fn post(&self, ctx: &Context<'_>, id: Option<String>) -> async_graphql::Result<Option<Post>> {
        match id.as_deref() {
            None | Some("") => Ok(None),
            Some(id) => Ok(store(ctx)?.post(id).map(Post::from)),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; fails with DUPLICATE_EMAIL if the email is taken
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        data: CreateUserInput,
    ) -> async_graphql::Result<User> {
        let user = store(ctx)?
            .create_user(data.into())
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }

    /// Create a post; fails with AUTHOR_NOT_FOUND for an unknown author
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        data: CreatePostInput,
    ) -> async_graphql::Result<Post> {
        let post = store(ctx)?
            .create_post(data.into())
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }

    /// Create a comment; fails with REFERENCE_NOT_FOUND if the user or post is unknown
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentInput,
    ) -> async_graphql::Result<Comment> {
        let comment = store(ctx)?
            .create_comment(data.into())
            .map_err(|e| e.extend())?;
        Ok(comment.into())
    }
}
