// Binds a particle field to a canvas element: sizing from the parent element,
// pointer tracking, and the requestAnimationFrame loop.

use crate::color::ThemeColors;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::pointer::Pointer;
use crate::theme;
use crate::utils::{self, Timer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

// The frame closure re-requests itself, so it has to be reachable from inside
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Listeners {
    resize: Closure<dyn FnMut()>,
    pointer_move: Closure<dyn FnMut(MouseEvent)>,
    pointer_leave: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct LoopState {
    frame_id: Cell<Option<i32>>,
    running: Cell<bool>,
}

#[wasm_bindgen]
pub struct ParticleNetwork {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: Rc<RefCell<ParticleField>>,
    state: Rc<LoopState>,
    frame: FrameCallback,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl ParticleNetwork {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleNetwork, JsValue> {
        ParticleNetwork::with_config(canvas, FieldConfig::default())
    }

    pub fn with_config(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<ParticleNetwork, JsValue> {
        utils::set_panic_hook();
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let field = ParticleField::with_thread_rng(
            canvas.width() as f64,
            canvas.height() as f64,
            theme::read_theme_colors(),
            config,
        );

        Ok(ParticleNetwork {
            canvas,
            context,
            field: Rc::new(RefCell::new(field)),
            state: Rc::new(LoopState::default()),
            frame: Rc::new(RefCell::new(None)),
            listeners: None,
        })
    }

    /// Sizes the canvas to its parent, subscribes to resize and pointer events
    /// and starts the animation loop. Does nothing while already running.
    pub fn init(&mut self) -> Result<(), JsValue> {
        if self.state.running.get() {
            return Ok(());
        }
        let _timer = Timer::new("ParticleNetwork::init");

        self.resize();
        if self.listeners.is_none() {
            self.listen()?;
        }
        self.start()?;

        let field = self.field.borrow();
        log!(
            "particle network: {} particles on {}x{}",
            field.particles().len(),
            field.width(),
            field.height()
        );
        Ok(())
    }

    pub fn resize(&self) {
        resize_to_parent(&self.canvas, &self.field);
    }

    /// Stops the loop and removes every listener. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.state.running.set(false);
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // drops the frame closure and with it the Rc cycle through `frame`
        self.frame.borrow_mut().take();

        if let Some(listeners) = self.listeners.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    listeners.resize.as_ref().unchecked_ref(),
                );
            }
            let _ = self.canvas.remove_event_listener_with_callback(
                "mousemove",
                listeners.pointer_move.as_ref().unchecked_ref(),
            );
            let _ = self.canvas.remove_event_listener_with_callback(
                "mouseout",
                listeners.pointer_leave.as_ref().unchecked_ref(),
            );
        }
    }

    /// Re-reads the theme colours from the stylesheet and restarts.
    pub fn retheme(&mut self) -> Result<(), JsValue> {
        self.restart_with(theme::read_theme_colors())
    }

    /// Restarts with explicit CSS colours. Leaves the running animation alone
    /// if any of them fails to parse.
    pub fn set_colors(
        &mut self,
        particle: &str,
        line: &str,
        pointer_line: &str,
    ) -> Result<(), JsValue> {
        let colors = ThemeColors::parse(particle, line, pointer_line)?;
        self.restart_with(colors)
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }

    pub fn width(&self) -> f64 {
        self.field.borrow().width()
    }

    pub fn height(&self) -> f64 {
        self.field.borrow().height()
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.state.frame_id.get().is_some()
    }
}

impl ParticleNetwork {
    pub fn pointer(&self) -> Pointer {
        *self.field.borrow().pointer()
    }

    // Destroy before create, two loops must never share the canvas
    fn restart_with(&mut self, colors: ThemeColors) -> Result<(), JsValue> {
        self.destroy();
        self.field.borrow_mut().set_colors(colors);
        self.init()
    }

    fn listen(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no global window")?;

        let resize = {
            let canvas = self.canvas.clone();
            let field = self.field.clone();
            Closure::wrap(Box::new(move || resize_to_parent(&canvas, &field)) as Box<dyn FnMut()>)
        };
        let pointer_move = {
            let canvas = self.canvas.clone();
            let field = self.field.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                field.borrow_mut().set_pointer(
                    event.client_x() as f64 - rect.left(),
                    event.client_y() as f64 - rect.top(),
                );
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let pointer_leave = {
            let field = self.field.clone();
            Closure::wrap(Box::new(move || field.borrow_mut().clear_pointer()) as Box<dyn FnMut()>)
        };

        // Stored first so destroy() also removes a partial registration
        let listeners = self.listeners.get_or_insert(Listeners {
            resize,
            pointer_move,
            pointer_leave,
        });
        window.add_event_listener_with_callback("resize", listeners.resize.as_ref().unchecked_ref())?;
        self.canvas.add_event_listener_with_callback(
            "mousemove",
            listeners.pointer_move.as_ref().unchecked_ref(),
        )?;
        self.canvas.add_event_listener_with_callback(
            "mouseout",
            listeners.pointer_leave.as_ref().unchecked_ref(),
        )?;
        Ok(())
    }

    fn start(&mut self) -> Result<(), JsValue> {
        let field = self.field.clone();
        let state = self.state.clone();
        let frame = self.frame.clone();
        let mut context = self.context.clone();

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state.frame_id.set(None);
            // a frame dispatched before destroy() still runs, but schedules nothing
            if !state.running.get() {
                return;
            }
            field.borrow_mut().frame(&mut context);

            if let Some(callback) = frame.borrow().as_ref() {
                match request_frame(callback) {
                    Ok(id) => state.frame_id.set(Some(id)),
                    Err(_) => state.running.set(false),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match self.frame.borrow().as_ref() {
            Some(callback) => request_frame(callback)?,
            None => return Err("animation frame callback missing".into()),
        };
        self.state.frame_id.set(Some(id));
        self.state.running.set(true);
        Ok(())
    }
}

impl Drop for ParticleNetwork {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

// Canvas takes the parent's size when there is one, the field is rebuilt either way
fn resize_to_parent(canvas: &HtmlCanvasElement, field: &RefCell<ParticleField>) {
    let _timer = Timer::new("ParticleNetwork::resize");
    if let Some(parent) = canvas.parent_element() {
        canvas.set_width(parent.client_width().max(0) as u32);
        canvas.set_height(parent.client_height().max(0) as u32);
    }
    field
        .borrow_mut()
        .resize(canvas.width() as f64, canvas.height() as f64);
}
