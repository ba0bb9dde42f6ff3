use site_core::{FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the core frame-loop seam.
pub struct RafScheduler {
    callback: Callback,
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        let id = window.request_animation_frame(cb.as_ref().unchecked_ref());
        id.ok()
    }

    fn cancel(&mut self, token: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(token);
        }
    }
}

/// Running animation loop. [`AnimationHandle::cancel`] may be called any
/// number of times.
pub struct AnimationHandle {
    frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
    callback: Callback,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.frame_loop.borrow_mut().cancel();
        // The callback holds the loop and the loop holds the callback; drop
        // the closure to break the cycle.
        self.callback.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.frame_loop.borrow().is_cancelled()
    }
}

/// Run `work` once per display frame until the returned handle is cancelled.
pub fn start_loop(mut work: impl FnMut() + 'static) -> AnimationHandle {
    let callback: Callback = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        callback: callback.clone(),
    })));
    let loop_tick = frame_loop.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let go = loop_tick.borrow_mut().on_frame();
        if go {
            work();
        }
    }) as Box<dyn FnMut()>));
    frame_loop.borrow_mut().start();
    AnimationHandle {
        frame_loop,
        callback,
    }
}
