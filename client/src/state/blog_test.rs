use super::*;

fn post(slug: &str) -> BlogPost {
    BlogPost {
        slug: slug.to_owned(),
        title: slug.to_uppercase(),
        date: "2026-01-15".to_owned(),
        author: records::DEFAULT_AUTHOR.to_owned(),
        excerpt: String::new(),
        content: Some("<p>body</p>".to_owned()),
        tags: Vec::new(),
    }
}

// =============================================================
// list
// =============================================================

#[test]
fn visible_posts_takes_first_six_in_order() {
    let posts: Vec<BlogPost> = (0..8).map(|i| post(&format!("p{i}"))).collect();
    let shown = visible_posts(&posts);
    assert_eq!(shown.len(), 6);
    assert_eq!(shown[0].slug, "p0");
    assert_eq!(shown[5].slug, "p5");
}

#[test]
fn visible_posts_short_list_unchanged() {
    let posts = vec![post("only")];
    assert_eq!(visible_posts(&posts).len(), 1);
    assert!(visible_posts(&[]).is_empty());
}

// =============================================================
// modal
// =============================================================

#[test]
fn open_for_shows_loading() {
    let mut modal = BlogModalState::default();
    modal.open_for("a");
    assert!(modal.open);
    assert_eq!(modal.slug.as_deref(), Some("a"));
    assert_eq!(modal.body, ArticleBody::Loading);
    assert!(modal.post().is_none());
}

#[test]
fn resolve_success_populates_post() {
    let mut modal = BlogModalState::default();
    modal.open_for("a");
    assert!(modal.resolve::<()>("a", Ok(post("a"))));
    assert_eq!(modal.post().map(|p| p.title.as_str()), Some("A"));
}

#[test]
fn resolve_failure_shows_error_panel() {
    let mut modal = BlogModalState::default();
    modal.open_for("a");
    assert!(modal.resolve("a", Err("404")));
    assert_eq!(modal.body, ArticleBody::Failed);
}

#[test]
fn stale_response_is_discarded() {
    let mut modal = BlogModalState::default();
    modal.open_for("first");
    modal.open_for("second");
    assert!(!modal.resolve::<()>("first", Ok(post("first"))));
    assert_eq!(modal.body, ArticleBody::Loading);
    assert!(modal.resolve::<()>("second", Ok(post("second"))));
    assert_eq!(modal.post().map(|p| p.slug.as_str()), Some("second"));
}

#[test]
fn reopening_clears_previous_article() {
    let mut modal = BlogModalState::default();
    modal.open_for("a");
    modal.resolve::<()>("a", Ok(post("a")));
    modal.close();
    assert!(!modal.open);

    modal.open_for("b");
    assert!(modal.open);
    assert_eq!(modal.body, ArticleBody::Loading);
}
