use crate::model::{Comment, Post, User};

/// Case-insensitive substring filter used by the list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pattern_lower: String,
}

impl SearchQuery {
    /// Build a filter from an optional query argument.
    ///
    /// Returns `None` when there is nothing to filter on: an absent or empty
    /// query selects every record.
    pub fn parse(query: Option<&str>) -> Option<Self> {
        match query {
            Some(q) if !q.is_empty() => Some(Self {
                pattern_lower: q.to_lowercase(),
            }),
            _ => None,
        }
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.pattern_lower)
    }

    /// Users match on name only
    pub fn matches_user(&self, user: &User) -> bool {
        self.hit(&user.name)
    }

    /// Posts match on title or body
    pub fn matches_post(&self, post: &Post) -> bool {
        self.hit(&post.title) || self.hit(&post.body)
    }

    pub fn matches_comment(&self, comment: &Comment) -> bool {
        self.hit(&comment.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_query_is_no_filter() {
        assert!(SearchQuery::parse(None).is_none());
        assert!(SearchQuery::parse(Some("")).is_none());
        assert!(SearchQuery::parse(Some("a")).is_some());
    }

    #[test]
    fn test_user_matches_name_case_insensitive() {
        let user = User::new("1", "Apple", "apple@a.com");
        let query = SearchQuery::parse(Some("pPL")).unwrap();
        assert!(query.matches_user(&user));

        // email is not searched
        let query = SearchQuery::parse(Some("a.com")).unwrap();
        assert!(!query.matches_user(&user));
    }

    #[test]
    fn test_post_matches_title_or_body() {
        let post = Post::new("11", "Rust tips", "Borrowing made easy", "1");

        assert!(SearchQuery::parse(Some("rust")).unwrap().matches_post(&post));
        assert!(SearchQuery::parse(Some("BORROW")).unwrap().matches_post(&post));
        assert!(!SearchQuery::parse(Some("python")).unwrap().matches_post(&post));
    }

    #[test]
    fn test_comment_matches_body() {
        let comment = Comment::new("1", "11", "Great write-up");
        assert!(SearchQuery::parse(Some("write")).unwrap().matches_comment(&comment));
        assert!(!SearchQuery::parse(Some("11")).unwrap().matches_comment(&comment));
    }
}
