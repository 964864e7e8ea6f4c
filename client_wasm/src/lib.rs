//! Browser front end for the paddle game
//!
//! Canvas 2D rendering, keyboard and touch input, Web Audio effects and a
//! requestAnimationFrame driver around `game_core::Game`.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod input;
mod renderer;
mod ui;

use audio::WebAudio;
use game_core::*;
use renderer::CanvasRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use ui::Ui;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

/// Everything the browser callbacks share
struct App {
    game: Game,
    renderer: CanvasRenderer,
    audio: WebAudio,
    ui: Ui,
    /// Handle of the pending requestAnimationFrame callback
    frame_request: Option<i32>,
}

impl App {
    fn cancel_pending_frame(&mut self) {
        if let (Some(id), Some(window)) = (self.frame_request.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn redraw(&mut self) {
        let view = self.game.view();
        self.renderer.draw(&view);
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

fn viewport_arena(window: &Window) -> Result<Arena, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    Arena::from_viewport(width as f32).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(err) => {
            log::warn!("Falling back to fixed seed: {}", err);
            GameRng::DEFAULT_SEED
        }
    }
}

/// Initialize logging, size the canvas and wire up every listener.
/// Called once from the page's module script.
#[wasm_bindgen]
pub fn init_game(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = window()?;
    let document = document()?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let arena = viewport_arena(&window)?;
    let renderer = CanvasRenderer::new(canvas.clone())?;
    renderer.resize(arena.width, arena.height);

    let app = Rc::new(RefCell::new(App {
        game: Game::new(arena, random_seed()),
        renderer,
        audio: WebAudio::new(),
        ui: Ui::new(&document),
        frame_request: None,
    }));
    app.borrow_mut().redraw();

    attach_resize(&window, &app)?;
    attach_keyboard(&document, &app)?;
    attach_touch(&canvas, &app)?;
    attach_buttons(&app)?;

    log::info!(
        "Arena ready at {}x{}",
        arena.width as u32,
        arena.height as u32
    );
    Ok(())
}

/// Show the info popup
#[wasm_bindgen]
pub fn open_popup() -> Result<(), JsValue> {
    ui::set_popup_visible(&document()?, true);
    Ok(())
}

/// Hide the info popup
#[wasm_bindgen]
pub fn close_popup() -> Result<(), JsValue> {
    ui::set_popup_visible(&document()?, false);
    Ok(())
}

fn attach_resize(window: &Window, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let arena = match viewport_arena(&window) {
            Ok(arena) => arena,
            Err(err) => {
                log::warn!("Ignoring resize: {:?}", err);
                return;
            }
        };
        let mut app = app.borrow_mut();
        app.renderer.resize(arena.width, arena.height);
        app.game.on_arena_resized(arena);
        app.redraw();
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_keyboard(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let down_app = app.clone();
    let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Some(dir) = input::direction_from_event(&event) {
            event.prevent_default();
            down_app.borrow_mut().game.input_mut().press(dir);
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let up_app = app.clone();
    let keyup = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Some(dir) = input::direction_from_event(&event) {
            event.prevent_default();
            up_app.borrow_mut().game.input_mut().release(dir);
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
    keyup.forget();
    Ok(())
}

fn attach_touch(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let start_app = app.clone();
    let touchstart = Closure::wrap(Box::new(move |event: TouchEvent| {
        event.prevent_default();
        if let Some(y) = input::first_touch_y(&event) {
            start_app.borrow_mut().game.input_mut().touch_start(y);
        }
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())?;
    touchstart.forget();

    let move_app = app.clone();
    let touchmove = Closure::wrap(Box::new(move |event: TouchEvent| {
        event.prevent_default();
        if let Some(y) = input::first_touch_y(&event) {
            move_app.borrow_mut().game.touch_move(y);
        }
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchmove", touchmove.as_ref().unchecked_ref())?;
    touchmove.forget();

    let end_app = app.clone();
    let touchend = Closure::wrap(Box::new(move |_event: TouchEvent| {
        end_app.borrow_mut().game.input_mut().touch_end();
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())?;
    touchend.forget();
    Ok(())
}

fn attach_buttons(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let (start_button, restart_button) = {
        let app = app.borrow();
        (
            app.ui.start_button().cloned(),
            app.ui.restart_button().cloned(),
        )
    };

    if let Some(button) = start_button {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
            begin_round(&app, RoundAction::Start);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    } else {
        log::warn!("No start button on the page");
    }

    if let Some(button) = restart_button {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
            begin_round(&app, RoundAction::Restart);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Start or restart a round and run its first frame immediately
fn begin_round(app: &Rc<RefCell<App>>, action: RoundAction) {
    let token = {
        let mut app = app.borrow_mut();
        let token = match action {
            RoundAction::Restart => app.game.restart(),
            _ => app.game.start(),
        };
        let Some(token) = token else {
            return;
        };
        app.cancel_pending_frame();
        app.audio.resume();
        app.ui.round_started();
        token
    };
    run_frame(app.clone(), token);
}

fn run_frame(app: Rc<RefCell<App>>, token: LoopToken) {
    let status = {
        let mut guard = app.borrow_mut();
        let App {
            game,
            renderer,
            audio,
            ui,
            frame_request,
        } = &mut *guard;
        *frame_request = None;

        let status = game.frame(token, renderer, audio);
        if status == FrameStatus::Stopped {
            if let Some(outcome) = game.outcome() {
                ui.round_ended(&outcome);
            }
        }
        status
    };

    if status == FrameStatus::Continue {
        schedule_frame(&app, token);
    }
}

fn schedule_frame(app: &Rc<RefCell<App>>, token: LoopToken) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let next = app.clone();
    let closure = Closure::once(move |_time: f64| run_frame(next, token));
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => app.borrow_mut().frame_request = Some(id),
        Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
    }
    closure.forget();
}
