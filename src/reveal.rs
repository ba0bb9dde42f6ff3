use crate::constants::{
    ATTR_REVEAL, ATTR_REVEAL_DELAY, ATTR_REVEAL_REPEAT, ATTR_REVEAL_STAGGER, REDUCED_MOTION_QUERY,
    REVEAL_HIDDEN_CLASS, REVEAL_SELECTOR,
};
use crate::dom::js_err;
use site_core::{delay_class, stagger_delay_ms, Reveal, RevealAction, RevealAnimation, RevealOptions};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Entrance animations for every `[data-reveal]` / `[data-reveal-stagger]`
/// element under a root, played when they scroll into view.
#[wasm_bindgen]
pub struct ScrollReveal {
    observer: Option<web::IntersectionObserver>,
    callback: Option<ObserverCallback>,
}

#[wasm_bindgen]
impl ScrollReveal {
    pub fn mount(root: web::Element) -> Result<ScrollReveal, JsValue> {
        mount_reveal(&root).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop observing. Safe to call twice.
    pub fn destroy(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
            log::debug!("[reveal] disconnected");
        }
        self.callback.take();
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount_reveal(root: &web::Element) -> anyhow::Result<ScrollReveal> {
    let options = RevealOptions {
        trigger_once: !root.has_attribute(ATTR_REVEAL_REPEAT),
        ..RevealOptions::default()
    };
    let reveal = Rc::new(Reveal::new(options));
    let targets = reveal_targets(root)?;

    if !reveal.needs_observer(prefers_reduced_motion()) {
        for el in &targets {
            show(el, &reveal);
        }
        log::info!("[reveal] reduced motion; {} sections shown", targets.len());
        return Ok(ScrollReveal {
            observer: None,
            callback: None,
        });
    }

    for el in &targets {
        hide(el);
    }

    let reveal_cb = reveal.clone();
    let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            let el = entry.target();
            match reveal_cb.on_intersection(is_shown(&el), entry.is_intersecting()) {
                RevealAction::Show { unobserve } => {
                    show(&el, &reveal_cb);
                    if unobserve {
                        observer.unobserve(&el);
                    }
                }
                RevealAction::Hide => hide(&el),
                RevealAction::Nothing => {}
            }
        }
    };
    let callback: ObserverCallback = Closure::wrap(
        Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
    );

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(reveal.options.root_margin);
    init.set_threshold(&JsValue::from_f64(reveal.options.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} sections", targets.len());

    Ok(ScrollReveal {
        observer: Some(observer),
        callback: Some(callback),
    })
}

fn reveal_targets(root: &web::Element) -> anyhow::Result<Vec<web::Element>> {
    let nodes = root.query_selector_all(REVEAL_SELECTOR).map_err(js_err)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn animation_of(el: &web::Element) -> RevealAnimation {
    el.get_attribute(ATTR_REVEAL)
        .or_else(|| el.get_attribute(ATTR_REVEAL_STAGGER))
        .map(|name| RevealAnimation::parse(&name))
        .unwrap_or_default()
}

fn items(el: &web::Element) -> Vec<web::Element> {
    if el.has_attribute(ATTR_REVEAL_STAGGER) {
        let children = el.children();
        (0..children.length()).filter_map(|i| children.item(i)).collect()
    } else {
        vec![el.clone()]
    }
}

fn is_shown(el: &web::Element) -> bool {
    !items(el)
        .iter()
        .any(|item| item.class_list().contains(REVEAL_HIDDEN_CLASS))
}

fn hide(el: &web::Element) {
    let anim = animation_of(el);
    for item in items(el) {
        let cl = item.class_list();
        _ = cl.remove_1(anim.class());
        _ = cl.add_1(REVEAL_HIDDEN_CLASS);
    }
}

fn show(el: &web::Element, reveal: &Reveal) {
    let anim = animation_of(el);
    if el.has_attribute(ATTR_REVEAL_STAGGER) {
        for (i, item) in items(el).iter().enumerate() {
            play(item, anim);
            if let Some(html) = item.dyn_ref::<web::HtmlElement>() {
                let delay = stagger_delay_ms(i, reveal.options.stagger_ms);
                _ = html
                    .style()
                    .set_property("animation-delay", &format!("{}ms", delay));
            }
        }
    } else {
        play(el, anim);
        let delay = el
            .get_attribute(ATTR_REVEAL_DELAY)
            .and_then(|d| d.parse::<u32>().ok())
            .unwrap_or(0);
        if let Some(class) = delay_class(delay) {
            _ = el.class_list().add_1(&class);
        }
    }
}

fn play(el: &web::Element, anim: RevealAnimation) {
    let cl = el.class_list();
    _ = cl.remove_1(REVEAL_HIDDEN_CLASS);
    _ = cl.add_1(anim.class());
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("animation-fill-mode", "forwards");
    }
}
