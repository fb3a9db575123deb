//! Blog list selection and the article modal state machine.
//!
//! DESIGN
//! ======
//! The modal tracks which slug it is showing. A detail response is applied
//! only while its slug is still the current one, so a slow response for an
//! earlier "Read more" click cannot overwrite a newer article.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use records::BlogPost;

pub const BLOG_FALLBACK: &str = "Unable to load blog posts. Please try again later.";
pub const ARTICLE_FALLBACK: &str = "Error loading article. Please try again.";

/// Most cards rendered in the blog section.
pub const MAX_BLOG_CARDS: usize = 6;

/// Cards to render: the first [`MAX_BLOG_CARDS`] posts in response order.
pub fn visible_posts(posts: &[BlogPost]) -> &[BlogPost] {
    &posts[..posts.len().min(MAX_BLOG_CARDS)]
}

/// Body of the article modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ArticleBody {
    /// Spinner shown; title, date, author and tags are cleared.
    #[default]
    Loading,
    Loaded(BlogPost),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogModalState {
    pub open: bool,
    pub slug: Option<String>,
    pub body: ArticleBody,
}

impl BlogModalState {
    /// Open the modal for `slug` and show the loading placeholder.
    pub fn open_for(&mut self, slug: &str) {
        self.open = true;
        self.slug = Some(slug.to_owned());
        self.body = ArticleBody::Loading;
    }

    /// Apply a detail response. Returns `false` when the response is stale
    /// and was discarded.
    pub fn resolve<E>(&mut self, slug: &str, result: Result<BlogPost, E>) -> bool {
        if self.slug.as_deref() != Some(slug) {
            return false;
        }
        self.body = match result {
            Ok(post) => ArticleBody::Loaded(post),
            Err(_) => ArticleBody::Failed,
        };
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn post(&self) -> Option<&BlogPost> {
        match &self.body {
            ArticleBody::Loaded(post) => Some(post),
            _ => None,
        }
    }
}
