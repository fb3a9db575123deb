//! Blog posts loaded from `<data_dir>/blog/*.md`.
//!
//! DESIGN
//! ======
//! Each Markdown file is one post; its file stem is the slug. An optional
//! frontmatter block delimited by `---` carries `key: value` metadata
//! (`title`, `date`, `author`, `excerpt`, comma-separated `tags`). Listings
//! return metadata only; the detail lookup renders the body to HTML.
//!
//! Files are read on every request. There is no index or cache.

use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser, html};
use records::{BlogPost, DEFAULT_AUTHOR};

pub const BLOG_DIR: &str = "blog";
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("blog post not found: {0}")]
    NotFound(String),
    #[error("error reading blog post: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// FRONTMATTER
// =============================================================================

/// Metadata parsed from a post header. Absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Split a post into its frontmatter and body.
///
/// Without a complete `---` ... `---` header the whole text is the body.
#[must_use]
pub fn parse_frontmatter(content: &str) -> (Frontmatter, &str) {
    let mut meta = Frontmatter::default();
    let Some(rest) = content.strip_prefix("---") else {
        return (meta, content);
    };
    let Some(end) = rest.find("---") else {
        return (meta, content);
    };

    for line in rest[..end].trim().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim() {
            "title" => meta.title = Some(value.to_owned()),
            "date" => meta.date = Some(value.to_owned()),
            "author" => meta.author = Some(value.to_owned()),
            "excerpt" => meta.excerpt = Some(value.to_owned()),
            "tags" if !value.is_empty() => meta.tags = Some(parse_tags(value)),
            _ => {}
        }
    }

    (meta, rest[end + 3..].trim())
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

fn parse_tags(value: &str) -> Vec<String> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|tag| unquote(tag.trim()))
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

// =============================================================================
// DERIVED FIELDS
// =============================================================================

/// `"my-first-post"` -> `"My First Post"`.
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut prev_alpha = false;
    for ch in slug.chars().map(|c| if c == '-' { ' ' } else { c }) {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// First non-empty paragraph, cut to 200 characters, with a trailing `...`.
#[must_use]
pub fn excerpt_from_body(body: &str) -> String {
    body.split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())
        .map(|p| {
            let mut excerpt: String = p.chars().take(EXCERPT_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        })
        .unwrap_or_default()
}

/// Render Markdown to HTML with tables and fenced code.
#[must_use]
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// A slug must name a file directly inside the blog directory.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\']) && !slug.contains("..")
}

// =============================================================================
// QUERIES
// =============================================================================

#[must_use]
pub fn blog_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(BLOG_DIR)
}

fn summary_from_source(slug: &str, source: &str) -> BlogPost {
    let (meta, body) = parse_frontmatter(source);
    let excerpt = match meta.excerpt {
        Some(excerpt) if !excerpt.is_empty() => excerpt,
        _ => excerpt_from_body(body),
    };
    BlogPost {
        slug: slug.to_owned(),
        title: meta.title.unwrap_or_else(|| title_from_slug(slug)),
        date: meta.date.unwrap_or_default(),
        author: meta.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        excerpt,
        content: None,
        tags: meta.tags.unwrap_or_default(),
    }
}

fn detail_from_source(slug: &str, source: &str) -> BlogPost {
    let (meta, body) = parse_frontmatter(source);
    BlogPost {
        slug: slug.to_owned(),
        title: meta.title.unwrap_or_else(|| title_from_slug(slug)),
        date: meta.date.unwrap_or_default(),
        author: meta.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        excerpt: meta.excerpt.unwrap_or_default(),
        content: Some(render_markdown(body)),
        tags: meta.tags.unwrap_or_default(),
    }
}

/// Sort newest first by the frontmatter date string. Ties keep slug order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| a.slug.cmp(&b.slug));
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// List every post's metadata, newest first.
///
/// A missing blog directory yields an empty list.
///
/// # Errors
///
/// Returns [`BlogError::Io`] if the directory or a post cannot be read.
pub async fn list_posts(data_dir: &Path) -> Result<Vec<BlogPost>, BlogError> {
    let dir = blog_dir(data_dir);
    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(BlogError::Io(e)),
    };

    let mut posts = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        let Some(slug) = file_name.to_str().and_then(|name| name.strip_suffix(".md")) else {
            continue;
        };
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let source = tokio::fs::read_to_string(entry.path()).await?;
        posts.push(summary_from_source(slug, &source));
    }

    sort_newest_first(&mut posts);
    Ok(posts)
}

/// Load one post with its body rendered to HTML.
///
/// # Errors
///
/// [`BlogError::NotFound`] for unknown or path-like slugs, [`BlogError::Io`]
/// when the file exists but cannot be read.
pub async fn get_post(data_dir: &Path, slug: &str) -> Result<BlogPost, BlogError> {
    if !is_valid_slug(slug) {
        return Err(BlogError::NotFound(slug.to_owned()));
    }
    let path = blog_dir(data_dir).join(format!("{slug}.md"));
    let source = match tokio::fs::read_to_string(&path).await {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(BlogError::NotFound(slug.to_owned())),
        Err(e) => return Err(BlogError::Io(e)),
    };
    Ok(detail_from_source(slug, &source))
}

#[cfg(test)]
#[path = "blog_test.rs"]
mod tests;
