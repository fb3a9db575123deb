//! Small document helpers used by the modal and chat widget.

/// Suppress (or restore) background page scrolling while an overlay is open.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Scroll a container to its last line.
#[cfg(feature = "hydrate")]
pub fn scroll_to_bottom(el: &web_sys::HtmlElement) {
    el.set_scroll_top(el.scroll_height());
}
