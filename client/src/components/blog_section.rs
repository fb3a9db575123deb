//! Blog cards grid. "Read more" opens the shared article modal.

use leptos::prelude::*;
use records::BlogPost;

use super::apps_section::loading_spinner;
use super::blog_modal::open_article;
use crate::state::blog::{BLOG_FALLBACK, BlogModalState, visible_posts};
use crate::state::load::LoadState;
use crate::util::date::format_post_date;

#[component]
pub fn BlogSection(posts_count: RwSignal<Option<u64>>, modal: RwSignal<BlogModalState>) -> impl IntoView {
    let posts = RwSignal::new(LoadState::<Vec<BlogPost>>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use super::hero::start_count_up;

        let result = crate::net::api::fetch_blog_posts().await;
        if let Err(e) = &result {
            log::error!("Error loading blog posts: {e}");
        }
        let state = LoadState::from_result(result);
        if let Some(target) = state.count() {
            start_count_up(posts_count, target);
        }
        posts.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = posts_count;

    view! {
        <section id="blog" class="blog-section">
            <div class="container">
                <h2 class="section-title">"Latest Articles"</h2>
                <div class="row" id="blogGrid">
                    {move || match posts.get() {
                        LoadState::Loading => loading_spinner().into_any(),
                        LoadState::Failed => {
                            view! {
                                <div class="col-12 text-center">
                                    <p class="text-muted">{BLOG_FALLBACK}</p>
                                </div>
                            }
                                .into_any()
                        }
                        LoadState::Loaded(list) => {
                            visible_posts(&list)
                                .iter()
                                .cloned()
                                .map(|post| view! { <BlogCard post modal /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BlogCard(post: BlogPost, modal: RwSignal<BlogModalState>) -> impl IntoView {
    let slug = post.slug;
    let tags = (!post.tags.is_empty()).then(|| {
        view! {
            <div class="blog-tags">
                {post.tags.into_iter().map(|tag| view! { <span class="tag-badge">{tag}</span> }).collect_view()}
            </div>
        }
    });

    view! {
        <div class="col-lg-4 col-md-6 mb-4">
            <div class="blog-card">
                <div class="blog-meta">
                    <span>
                        <i class="far fa-calendar me-1"></i>
                        {format_post_date(&post.date)}
                    </span>
                    <span>
                        <i class="far fa-user me-1"></i>
                        {post.author}
                    </span>
                </div>
                <h3 class="blog-title">{post.title}</h3>
                <p class="blog-excerpt">{post.excerpt}</p>
                {tags}
                <a
                    href="#"
                    class="read-more"
                    on:click=move |ev| {
                        ev.prevent_default();
                        open_article(modal, slug.clone());
                    }
                >
                    "Read More "
                    <i class="fas fa-arrow-right"></i>
                </a>
            </div>
        </div>
    }
}
