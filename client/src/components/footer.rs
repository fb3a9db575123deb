//! Page footer.

use leptos::prelude::*;

use crate::util::scroll::on_anchor_click;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container text-center">
                <p class="footer-text">"Pablo Garay. Built with Rust, Axum and Leptos."</p>
                <a href="#home" class="back-to-top" on:click=move |ev| on_anchor_click(&ev, "#home")>
                    <i class="fas fa-arrow-up me-1"></i>
                    "Back to top"
                </a>
            </div>
        </footer>
    }
}
