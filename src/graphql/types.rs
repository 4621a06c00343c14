use std::sync::Arc;

use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, InputObject, SimpleObject};

use crate::error::BlogError;
use crate::model::{Comment as ModelComment, Post as ModelPost, User as ModelUser};
use crate::storage::{NewComment, NewPost, NewUser, Store};

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Store>> {
    ctx.data::<Arc<Store>>()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[ComplexObject]
impl User {
    /// Posts written by this user, oldest first
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let posts = store(ctx)?.posts_by_author(&self.id);
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Comments left by this user, oldest first
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let comments = store(ctx)?.comments_by_user(&self.id);
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,

    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        store(ctx)?
            .user(&self.author_id)
            .map(User::from)
            .ok_or_else(|| {
                BlogError::ReferenceNotFound {
                    entity: "User",
                    id: self.author_id.clone(),
                }
                .extend()
            })
    }

    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let comments = store(ctx)?.comments_on_post(&self.id);
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            body: p.body,
            published: p.published,
            author_id: p.author,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Comment {
    pub body: String,

    #[graphql(skip)]
    pub user_id: String,

    #[graphql(skip)]
    pub post_id: String,
}

#[ComplexObject]
impl Comment {
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        store(ctx)?
            .user(&self.user_id)
            .map(User::from)
            .ok_or_else(|| {
                BlogError::ReferenceNotFound {
                    entity: "User",
                    id: self.user_id.clone(),
                }
                .extend()
            })
    }

    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Post> {
        store(ctx)?
            .post(&self.post_id)
            .map(Post::from)
            .ok_or_else(|| {
                BlogError::ReferenceNotFound {
                    entity: "Post",
                    id: self.post_id.clone(),
                }
                .extend()
            })
    }
}

impl From<ModelComment> for Comment {
    fn from(c: ModelComment) -> Self {
        Self {
            body: c.body,
            user_id: c.user,
            post_id: c.post,
        }
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: ID,
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        Self {
            title: input.title,
            body: input.body,
            published: input.published,
            author: input.author.0,
        }
    }
}

#[derive(InputObject)]
pub struct CreateCommentInput {
    pub user: ID,
    pub post: ID,
    pub body: String,
}

impl From<CreateCommentInput> for NewComment {
    fn from(input: CreateCommentInput) -> Self {
        Self {
            user: input.user.0,
            post: input.post.0,
            body: input.body,
        }
    }
}
