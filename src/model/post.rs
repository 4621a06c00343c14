use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,

    #[serde(default)]
    pub published: bool,

    /// Id of the authoring [`User`](super::User).
    pub author: String,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            published: false,
            author: author.into(),
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}
