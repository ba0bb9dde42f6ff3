use crate::constants::{DOT_ACTIVE_CLASS, SLIDE_CARD_CLASS, SLIDE_POPULAR_CLASS, SLIDE_TRANSITION_CSS};
use crate::dom::{self, js_err};
use crate::frame::{self, AnimationHandle};
use instant::Instant;
use site_core::{Service, Slideshow, SERVICES};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct Track {
    show: Slideshow,
    track: web::HtmlElement,
    dots: Option<web::Element>,
}

impl Track {
    fn apply(&self) {
        let style = self.track.style();
        _ = style.set_property("transform", &format!("translateX({}px)", self.show.translate_x()));
        let transition = if self.show.is_transitioning() {
            SLIDE_TRANSITION_CSS
        } else {
            "none"
        };
        _ = style.set_property("transition", transition);

        if let Some(dots) = &self.dots {
            let children = dots.children();
            let active = self.show.active_dot() as u32;
            for i in 0..children.length() {
                if let Some(dot) = children.item(i) {
                    _ = dot.class_list().toggle_with_force(DOT_ACTIVE_CLASS, i == active);
                }
            }
        }
    }
}

/// Endless services slideshow driving a track element's transform.
#[wasm_bindgen]
pub struct ServicesCarousel {
    state: Rc<RefCell<Track>>,
    animation: Option<AnimationHandle>,
}

#[wasm_bindgen]
impl ServicesCarousel {
    /// Fill `track` with the service cards (twice, for the loop) if it is
    /// empty and start auto-advancing. `dots` may hold one child per card.
    pub fn mount(track: web::HtmlElement, dots: Option<web::Element>) -> Result<ServicesCarousel, JsValue> {
        if track.child_element_count() == 0 {
            fill_track(&track).map_err(|e| JsValue::from_str(&e.to_string()))?;
        }
        let state = Rc::new(RefCell::new(Track {
            show: Slideshow::new(SERVICES.len()),
            track,
            dots,
        }));
        state.borrow().apply();

        let tick_state = state.clone();
        let mut last = Instant::now();
        let animation = frame::start_loop(move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;
            let mut t = tick_state.borrow_mut();
            if t.show.advance(dt) {
                t.apply();
            }
        });
        log::info!("[slideshow] mounted cards={}", SERVICES.len());
        Ok(ServicesCarousel {
            state,
            animation: Some(animation),
        })
    }

    pub fn next(&self) {
        self.update(Slideshow::next);
    }

    pub fn prev(&self) {
        self.update(Slideshow::prev);
    }

    pub fn go_to(&self, index: usize) {
        self.update(|s| s.go_to(index));
    }

    pub fn toggle_pause(&self) {
        self.update(Slideshow::toggle_pause);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.state.borrow().show.is_paused()
    }

    #[wasm_bindgen(getter)]
    pub fn active_dot(&self) -> usize {
        self.state.borrow().show.active_dot()
    }

    pub fn destroy(&mut self) {
        if let Some(a) = self.animation.take() {
            a.cancel();
            log::info!("[slideshow] destroyed");
        }
    }
}

impl ServicesCarousel {
    fn update(&self, f: impl FnOnce(&mut Slideshow)) {
        let mut t = self.state.borrow_mut();
        f(&mut t.show);
        t.apply();
    }
}

impl Drop for ServicesCarousel {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn fill_track(track: &web::HtmlElement) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    for service in SERVICES.iter().chain(SERVICES.iter()) {
        let card = service_card(&document, service)?;
        track.append_child(&card).map_err(js_err)?;
    }
    Ok(())
}

fn service_card(document: &web::Document, s: &Service) -> anyhow::Result<web::Element> {
    let card = document.create_element("article").map_err(js_err)?;
    card.set_class_name(SLIDE_CARD_CLASS);
    if s.popular {
        card.class_list().add_1(SLIDE_POPULAR_CLASS).map_err(js_err)?;
    }
    card.set_attribute("data-category", s.category).map_err(js_err)?;

    let img = document.create_element("img").map_err(js_err)?;
    img.set_attribute("src", s.image).map_err(js_err)?;
    img.set_attribute("alt", s.title).map_err(js_err)?;
    img.set_attribute("loading", "lazy").map_err(js_err)?;
    card.append_child(&img).map_err(js_err)?;

    for (tag, class, text) in [
        ("h3", "title", s.title),
        ("p", "description", s.description),
        ("span", "price", s.price),
        ("span", "guarantee", s.guarantee),
        ("span", "duration", s.duration),
    ] {
        let el = document.create_element(tag).map_err(js_err)?;
        el.set_class_name(class);
        el.set_text_content(Some(text));
        card.append_child(&el).map_err(js_err)?;
    }
    Ok(card)
}
