//! Browser wiring: event listeners, the animation loop and per-frame work

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Game, Params};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

use crate::audio::Sounds;
use crate::error::Result;
use crate::input::{is_start_key, paddle_target};
use crate::renderer::{init, Renderer};
use crate::state::{Backdrop, ScoreFlash};

pub struct App {
    game: Game,
    renderer: Renderer,
    sounds: Sounds,
    flash: ScoreFlash,
    backdrop: Backdrop,
    last_frame_ms: Option<f64>,
}

impl App {
    pub fn new(canvas_id: &str, seed: u64) -> Result<Self> {
        Ok(Self {
            game: Game::new(seed),
            renderer: Renderer::new(canvas_id)?,
            sounds: Sounds::load(),
            flash: ScoreFlash::new(),
            backdrop: Backdrop::new(),
            last_frame_ms: None,
        })
    }

    /// One animation frame at `timestamp_ms`
    fn frame(&mut self, timestamp_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => Params::FIXED_DT,
        };
        self.last_frame_ms = Some(timestamp_ms);

        let events = self.game.advance(dt).clone();
        self.sounds.play_events(&events);
        if let Some(side) = events.scored {
            self.flash.trigger(side);
        }
        self.flash.update(dt);
        self.backdrop.advance(dt);

        let snapshot = self.game.snapshot();
        if let Err(err) = self.renderer.draw(&snapshot, &self.flash, &self.backdrop) {
            log::error!("draw failed: {}", err);
        }
    }

    fn on_start(&mut self) {
        if self.game.start() {
            self.flash.clear();
        }
    }

    fn on_pointer(&mut self, client_y: f64) {
        let y = paddle_target(client_y, self.renderer.canvas_top(), &self.renderer.viewport);
        self.game.set_pointer_y(y);
    }

    fn on_resize(&mut self) {
        if let Err(err) = self.renderer.fit_to_window() {
            log::warn!("resize failed: {}", err);
        }
    }
}

/// Seed from `Math.random`, two 32-bit halves
fn random_seed() -> u64 {
    let half = || (js_sys::Math::random() * u32::MAX as f64) as u64;
    (half() << 32) | half()
}

pub fn launch(canvas_id: &str) -> Result<()> {
    let seed = random_seed();
    let app = Rc::new(RefCell::new(App::new(canvas_id, seed)?));
    log::info!("pong ready on #{} (seed {})", canvas_id, seed);

    attach_listeners(&app)?;
    start_loop(app)
}

fn attach_listeners(app: &Rc<RefCell<App>>) -> Result<()> {
    let window = init::window()?;
    let canvas = app.borrow().renderer.canvas.clone();

    // Pointer steering
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            app.borrow_mut().on_pointer(event.client_y() as f64);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Click to start
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut app = app.borrow_mut();
            app.on_start();
            app.renderer.focus();
        });
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch move
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                app.borrow_mut().on_pointer(touch.client_y() as f64);
            }
        });
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch start (also steers)
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            let mut app = app.borrow_mut();
            app.on_start();
            if let Some(touch) = event.touches().get(0) {
                app.on_pointer(touch.client_y() as f64);
            }
        });
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if is_start_key(&event.key()) {
                event.prevent_default();
                app.borrow_mut().on_start();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Resize
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().on_resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn start_loop(app: Rc<RefCell<App>>) -> Result<()> {
    let window = init::window()?;
    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        app.borrow_mut().frame(timestamp);
        if let Some(closure) = next.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }));

    if let Some(closure) = callback.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
