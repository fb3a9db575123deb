//! In-page anchor scrolling and the navbar scroll shadow.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed navbar; anchor targets land this far below the top.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

/// Scroll depth past which the navbar casts a shadow.
pub const SHADOW_THRESHOLD_PX: f64 = 50.0;

pub const NAVBAR_SHADOW: &str = "0 4px 16px rgba(0, 0, 0, 0.2)";

/// `box-shadow` value for the navbar at `scroll_y`.
pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_THRESHOLD_PX { NAVBAR_SHADOW } else { "none" }
}

/// Element id targeted by an in-page link, or `None` for bare `#`, empty
/// hrefs and links elsewhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that puts an element at `offset_top` just below
/// the navbar.
pub fn scroll_destination(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}

/// Smoothly scroll to the element with `id`. Returns `false` when the
/// element does not exist (or outside the browser).
pub fn smooth_scroll_to(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_destination(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Click handler body for in-page links: scroll smoothly instead of jumping.
pub fn on_anchor_click(ev: &leptos::ev::MouseEvent, href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    ev.prevent_default();
    smooth_scroll_to(id);
}

/// Current vertical scroll position of the window.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
