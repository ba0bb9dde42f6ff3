use crate::canvas::Canvas2d;
use crate::constants::{EV_CLICK, EV_POINTER_LEAVE, EV_POINTER_MOVE, EV_RESIZE};
use crate::dom;
use crate::events::Listener;
use crate::frame::{self, AnimationHandle};
use crate::input;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{FieldConfig, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animated particle backdrop bound to one canvas.
///
/// When the canvas cannot hand out a 2d context the background stays inert:
/// nothing is drawn and nothing is registered.
#[wasm_bindgen]
pub struct ParticleBackground {
    mounted: Option<Mounted>,
}

struct Mounted {
    field: Rc<RefCell<ParticleField>>,
    listeners: Vec<Listener>,
    animation: AnimationHandle,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Start a background on `canvas` using a named preset (`"hero"`,
    /// `"compact"` or a page name).
    pub fn mount(canvas: web::HtmlCanvasElement, preset: &str) -> Result<ParticleBackground, JsValue> {
        let config = FieldConfig::preset(preset).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mounted = match mount_field(canvas, config) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[particles] mount failed, staying inert: {:?}", e);
                None
            }
        };
        if let Some(m) = &mounted {
            log::info!(
                "[particles] mounted preset={} particles={}",
                preset,
                m.field.borrow().particles().len()
            );
        }
        Ok(ParticleBackground { mounted })
    }

    /// Detach listeners and cancel the pending frame. Safe to call twice.
    pub fn destroy(&mut self) {
        if let Some(mut m) = self.mounted.take() {
            m.animation.cancel();
            for l in &mut m.listeners {
                l.detach();
            }
            log::info!("[particles] destroyed");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.animation.is_running())
            .unwrap_or(false)
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount_field(canvas: web::HtmlCanvasElement, config: FieldConfig) -> anyhow::Result<Option<Mounted>> {
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[particles] no 2d context; background disabled");
        return Ok(None);
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let field = Rc::new(RefCell::new(ParticleField::with_rng(config, StdRng::from_entropy())?));
    dom::sync_canvas_backing_size(&canvas, &mut field.borrow_mut());

    let canvas_target: &web::EventTarget = canvas.unchecked_ref();
    let mut listeners = Vec::with_capacity(4);

    {
        let field = field.clone();
        let el = canvas.clone();
        listeners.push(Listener::attach(canvas_target, EV_POINTER_MOVE, move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                let (x, y) = input::event_local_css(ev, &el);
                field.borrow_mut().pointer_move(x, y);
            }
        })?);
    }
    {
        let field = field.clone();
        listeners.push(Listener::attach(canvas_target, EV_POINTER_LEAVE, move |_| {
            field.borrow_mut().pointer_leave();
        })?);
    }
    {
        let field = field.clone();
        let el = canvas.clone();
        listeners.push(Listener::attach(canvas_target, EV_CLICK, move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let (x, y) = input::event_local_css(ev, &el);
                field.borrow_mut().click(x, y);
            }
        })?);
    }
    {
        let field = field.clone();
        let el = canvas.clone();
        listeners.push(Listener::attach(&window, EV_RESIZE, move |_| {
            dom::sync_canvas_backing_size(&el, &mut field.borrow_mut());
        })?);
    }

    let field_tick = field.clone();
    let mut surface = Canvas2d(ctx);
    let animation = frame::start_loop(move || {
        field_tick.borrow_mut().frame(&mut surface);
    });

    Ok(Some(Mounted {
        field,
        listeners,
        animation,
    }))
}
