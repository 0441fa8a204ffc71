//! Hexagonal flow field: a staggered lattice of short line segments that turn
//! toward the mouse cursor, coloured by cursor distance.
//!
//! The lattice, tracker and render pass are plain Rust and run anywhere. The
//! `wasm` module wires them to a canvas, `mousemove` and
//! `requestAnimationFrame`.

pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod ramp;
pub mod tracker;
pub mod vector;

pub use config::{FieldConfig, GlowLayer};
pub use error::{ConfigError, FieldError};
pub use field::FlowField;
pub use frame::{render_frame, FrameFlags, RenderStyle, Surface};
pub use geometry::{Segment, Vec2, Viewport};
pub use ramp::{colormap_ratio, ramp_color, Rgb};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub use wasm::{start, FlowFieldHandle};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::FieldConfig;
    use crate::error::FieldError;
    use crate::field::FlowField;
    use crate::frame::{render_frame, FrameFlags, RenderStyle};
    use crate::geometry::{Vec2, Viewport};

    mod canvas;
    mod pointer;
    mod render;

    use canvas::CanvasSurface;
    use pointer::PointerListener;
    use render::FrameLoop;

    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    }

    /// Running flow field bound to one canvas.
    #[wasm_bindgen]
    pub struct FlowFieldHandle {
        field: Rc<RefCell<FlowField>>,
        glow: Rc<Cell<bool>>,
        trails: Rc<Cell<bool>>,
        frames: Option<FrameLoop>,
        pointer: Option<PointerListener>,
    }

    /// Size `canvas_id` to the window, lay out the lattice and start tracking
    /// the mouse and drawing every frame. `options` is an optional plain object
    /// with `FieldConfig` keys.
    #[wasm_bindgen]
    pub fn start(canvas_id: &str, options: JsValue) -> Result<FlowFieldHandle, JsValue> {
        let config = parse_options(&options)?;

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| FieldError::Host(format!("canvas #{} not found", canvas_id)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let body = document.body().ok_or("no document body")?;

        // Read once; the lattice is not rebuilt on resize.
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let viewport = Viewport::new(width, height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d canvas not supported")?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        let field = FlowField::new(&config, viewport)?;
        log::info!(
            "flow field started: {} points ({} cols x {} rows) in {}x{} viewport",
            field.len(),
            field.lattice().cols(),
            field.lattice().rows(),
            width,
            height
        );
        let field = Rc::new(RefCell::new(field));
        let glow = Rc::new(Cell::new(config.glow));
        let trails = Rc::new(Cell::new(!config.clear_each_frame));

        let pointer = {
            let field = field.clone();
            PointerListener::attach(body.into(), move |cursor| {
                field.borrow_mut().pointer_moved(cursor);
            })?
        };

        let frames = {
            let field = field.clone();
            let glow = glow.clone();
            let trails = trails.clone();
            let style = RenderStyle::from(&config);
            let mut surface = CanvasSurface::new(ctx);
            FrameLoop::start(move || {
                let flags = FrameFlags {
                    glow: glow.get(),
                    clear: !trails.get(),
                };
                render_frame(&mut surface, &field.borrow(), &style, flags);
            })?
        };

        Ok(FlowFieldHandle {
            field,
            glow,
            trails,
            frames: Some(frames),
            pointer: Some(pointer),
        })
    }

    fn parse_options(options: &JsValue) -> Result<FieldConfig, JsValue> {
        if options.is_undefined() || options.is_null() {
            return Ok(FieldConfig::default());
        }
        let json = js_sys::JSON::stringify(options)?
            .as_string()
            .ok_or("options are not serialisable")?;
        Ok(FieldConfig::from_json(&json)?)
    }

    #[wasm_bindgen]
    impl FlowFieldHandle {
        /// Glow applies from the next frame on.
        #[wasm_bindgen(js_name = setGlow)]
        pub fn set_glow(&self, enabled: bool) {
            self.glow.set(enabled);
        }

        pub fn glow(&self) -> bool {
            self.glow.get()
        }

        /// Trails skip the per-frame clear.
        #[wasm_bindgen(js_name = setTrails)]
        pub fn set_trails(&self, enabled: bool) {
            self.trails.set(enabled);
        }

        /// Feed a cursor position directly, as a `mousemove` would.
        #[wasm_bindgen(js_name = pointerMoved)]
        pub fn pointer_moved(&self, x: f64, y: f64) -> bool {
            self.field.borrow_mut().pointer_moved(Vec2::new(x, y))
        }

        #[wasm_bindgen(js_name = pointCount)]
        pub fn point_count(&self) -> usize {
            self.field.borrow().len()
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.frames.as_ref().is_some_and(FrameLoop::is_running)
        }

        /// Stop drawing and detach from the mouse. Start a new field to resume.
        pub fn stop(&mut self) {
            if let Some(frames) = self.frames.take() {
                frames.stop();
                log::info!("flow field stopped");
            }
            self.pointer.take();
        }
    }
}
