//! Imperative DOM helpers for behavior Leptos views do not express directly:
//! measuring sections, smooth scrolling, file downloads, intersection
//! observers, and class-based load animations.
//!
//! Each helper returns early when an element or the window is missing. On host
//! builds (no `csr` feature) they are inert stubs.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use crate::state::nav::SectionBounds;
#[cfg(feature = "csr")]
use crate::state::nav::{anchor_id, scroll_target};
#[cfg(feature = "csr")]
use crate::state::reveal::{
    LOADED_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_CLASS, RevealSet,
    STAGGER_SELECTOR, stagger_delay,
};

#[cfg(feature = "csr")]
const REVEAL_KEY_ATTR: &str = "data-reveal-key";

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Boxes of every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        query_all("section[id]")
            .into_iter()
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.client_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Smoothly scroll so the `#id` target sits just below the fixed navbar.
/// Returns `false` when the anchor has no target.
pub fn scroll_to_anchor(href: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = anchor_id(href)
            .and_then(|id| document()?.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
        false
    }
}

/// Start a browser download of `href`, saved as `filename`.
pub fn trigger_download(href: &str, filename: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = document() else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        let Some(link) = doc
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        link.set_href(href);
        link.set_download(filename);
        if body.append_child(&link).is_ok() {
            link.click();
            let _ = body.remove_child(&link);
        }
        log::info!("resume download started: {href} as {filename}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (href, filename);
    }
}

/// Observe reveal targets once; each gains the revealed class on its first
/// entry into view and keeps it.
pub fn observe_reveal_targets() {
    #[cfg(feature = "csr")]
    {
        let revealed = Rc::new(RefCell::new(RevealSet::default()));
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = target.get_attribute(REVEAL_KEY_ATTR).and_then(|k| k.parse::<u32>().ok()) else {
                        continue;
                    };
                    if revealed.borrow_mut().observe(key, entry.is_intersecting()) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            log::warn!("intersection observer unavailable; reveal animations disabled");
            return;
        };
        let targets = query_all(REVEAL_SELECTOR);
        for (key, el) in (0u32..).zip(targets.iter()) {
            let _ = el.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
            observer.observe(el);
        }
        log::debug!("observing {} reveal targets", targets.len());
        // Lives for the page; the observer calls back for as long as targets exist.
        callback.forget();
    }
}

/// Tag staggered elements `loading` with increasing delays, then `loaded`.
pub fn stagger_load_animation() {
    #[cfg(feature = "csr")]
    {
        let elements = query_all(STAGGER_SELECTOR);
        for (index, el) in elements.iter().enumerate() {
            let _ = el.style().set_property("animation-delay", &stagger_delay(index));
            let _ = el.class_list().add_1("loading");
        }
        gloo_timers::callback::Timeout::new(LOADED_DELAY_MS, move || {
            for el in &elements {
                let _ = el.class_list().add_1("loaded");
            }
        })
        .forget();
    }
}
