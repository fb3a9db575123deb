//! Full-article modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a blog card with a slug; fetches `/api/blog/{slug}` and shows
//! the server-rendered HTML. While open, background scrolling is suppressed.
//! Closes on the close button, a backdrop click, or Escape.

use leptos::prelude::*;

use crate::state::blog::{ARTICLE_FALLBACK, ArticleBody, BlogModalState};
use crate::util::date::format_post_date;
use crate::util::dom::set_body_scroll_locked;

/// Open the modal for `slug` and load the article.
pub fn open_article(modal: RwSignal<BlogModalState>, slug: String) {
    modal.update(|m| m.open_for(&slug));
    set_body_scroll_locked(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_blog_post(&slug).await;
        if let Err(e) = &result {
            log::error!("Error loading blog post {slug}: {e}");
        }
        let mut applied = false;
        modal.update(|m| applied = m.resolve(&slug, result));
        if !applied {
            log::debug!("discarded stale article response for {slug}");
        }
    });
}

fn close_article(modal: RwSignal<BlogModalState>) {
    modal.update(BlogModalState::close);
    set_body_scroll_locked(false);
}

#[component]
pub fn BlogModal(modal: RwSignal<BlogModalState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(|m| m.open) {
                close_article(modal);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let title = move || modal.with(|m| m.post().map(|p| p.title.clone()).unwrap_or_default());
    let meta = move || {
        modal.with(|m| {
            m.post().map(|p| {
                let date = format_post_date(&p.date);
                let author = p.author.clone();
                view! {
                    <span>
                        <i class="far fa-calendar me-1"></i>
                        {date}
                    </span>
                    <span>
                        <i class="far fa-user me-1"></i>
                        {author}
                    </span>
                }
            })
        })
    };
    let tags = move || {
        modal.with(|m| {
            m.post()
                .map(|p| p.tags.clone())
                .unwrap_or_default()
                .into_iter()
                .map(|tag| view! { <span class="tag-badge">{tag}</span> })
                .collect_view()
        })
    };
    let body = move || match modal.with(|m| m.body.clone()) {
        ArticleBody::Loading => {
            view! {
                <div class="text-center py-5">
                    <div class="spinner-border text-primary" role="status">
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                </div>
            }
                .into_any()
        }
        ArticleBody::Failed => {
            view! {
                <div class="text-center text-danger">
                    <i class="fas fa-exclamation-circle fa-3x mb-3"></i>
                    <p>{ARTICLE_FALLBACK}</p>
                </div>
            }
                .into_any()
        }
        ArticleBody::Loaded(post) => {
            view! { <div class="blog-article" inner_html=post.content.unwrap_or_default()></div> }.into_any()
        }
    };

    view! {
        <div class="blog-modal" id="blogModal" class:active=move || modal.with(|m| m.open)>
            <div class="blog-modal-backdrop" on:click=move |_| close_article(modal)></div>
            <div class="blog-modal-content" role="dialog" aria-modal="true">
                <button class="blog-modal-close" aria-label="Close" on:click=move |_| close_article(modal)>
                    <i class="fas fa-times"></i>
                </button>
                <div class="blog-modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-meta">{meta}</div>
                    <div class="modal-tags">{tags}</div>
                </div>
                <div class="blog-modal-body">{body}</div>
            </div>
        </div>
    }
}
