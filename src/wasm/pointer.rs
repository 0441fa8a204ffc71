use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{EventTarget, MouseEvent};

use crate::geometry::Vec2;

/// `mousemove` subscription that unsubscribes when dropped.
pub struct PointerListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerListener {
    /// Call `on_move` with viewport-relative client coordinates for every
    /// `mousemove` delivered to `target`.
    pub fn attach(
        target: EventTarget,
        mut on_move: impl FnMut(Vec2) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            on_move(Vec2::new(event.client_x() as f64, event.client_y() as f64));
        }) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("mousemove", callback)
        {
            log::warn!("failed to detach pointer listener: {:?}", e);
        }
    }
}
