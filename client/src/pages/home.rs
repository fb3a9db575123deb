//! Landing page.

use leptos::prelude::*;

use crate::components::apps_section::AppsSection;
use crate::components::blog_modal::BlogModal;
use crate::components::blog_section::BlogSection;
use crate::components::chat_widget::ChatWidget;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::state::blog::BlogModalState;
use crate::util::theme::browser_store;

#[component]
pub fn HomePage() -> impl IntoView {
    // Hero counters: set by the sections once their data arrives.
    let projects_count = RwSignal::new(None::<u64>);
    let posts_count = RwSignal::new(None::<u64>);
    let modal = RwSignal::new(BlogModalState::default());

    view! {
        <Navbar store=browser_store() />
        <main>
            <Hero projects_count posts_count />
            <AppsSection projects_count />
            <BlogSection posts_count modal />
        </main>
        <Footer />
        <BlogModal modal />
        <ChatWidget />
    }
}
