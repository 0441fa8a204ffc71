use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `frame` once per display refresh until [`FrameLoop::stop`].
pub struct FrameLoop {
    callback: FrameCallback,
    request: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
        Self::start_with(frame, request_frame)
    }

    /// Like [`FrameLoop::start`], with `schedule` standing in for
    /// `requestAnimationFrame`.
    fn start_with(
        mut frame: impl FnMut() + 'static,
        schedule: impl Fn(&Closure<dyn FnMut()>) -> Result<i32, JsValue> + 'static,
    ) -> Result<Self, JsValue> {
        // `f` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` from within itself. Storing it inside an
        // `Option` lets `stop` take it out, which breaks the cycle and drops
        // the closure.
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let request = Rc::new(Cell::new(None));
        let pending = request.clone();
        let schedule = Rc::new(schedule);
        let reschedule = schedule.clone();
        *f.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            frame();

            // schedule next, unless the loop was stopped meanwhile
            let next = match g.borrow().as_ref() {
                Some(cb) => reschedule(cb),
                None => return,
            };
            match next {
                Ok(id) => pending.set(Some(id)),
                Err(e) => {
                    log::error!("failed to schedule next frame, stopping: {:?}", e);
                    // wasm-bindgen defers freeing a closure dropped mid-call
                    // until the call returns; nothing captured is used after this.
                    g.borrow_mut().take();
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match f.borrow().as_ref() {
            Some(cb) => schedule(cb)?,
            None => return Err("frame callback missing".into()),
        };
        request.set(Some(id));

        Ok(Self {
            callback: f,
            request,
        })
    }

    /// Cancel the pending frame and release the callback. Not restartable.
    pub fn stop(&self) {
        if let Some(id) = self.request.take() {
            if let Some(w) = window() {
                if let Err(e) = w.cancel_animation_frame(id) {
                    log::warn!("cancel_animation_frame failed: {:?}", e);
                }
            }
        }
        self.callback.borrow_mut().take();
    }

    /// False once stopped or after a frame could not be rescheduled.
    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
