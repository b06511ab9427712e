//! Wall Kick entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use wall_kick::consts::SIM_DT;
    use wall_kick::game::Game;
    use wall_kick::platform::WebHost;
    use wall_kick::render::{self, CanvasSurface};
    use wall_kick::sim::GamePhase;
    use wall_kick::tuning::{Tuning, TuningPreset};

    /// Browser shell around the game session
    struct App {
        game: Game<WebHost>,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl App {
        fn render(&mut self) {
            render::draw(&self.game.state, self.game.theme(), &mut self.surface);
        }

        /// Push score and overlay visibility into the DOM.
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.game.score_line()));
            }

            let phase = self.game.state.phase;
            set_overlay(&document, "start-screen", phase == GamePhase::NotStarted);
            set_overlay(&document, "game-over", phase == GamePhase::GameOver);
            if phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.game.final_score_line()));
                }
            }
        }
    }

    fn set_overlay(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let class = if visible { "overlay" } else { "overlay hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    /// Stored tuning profile, unless the URL overrides it (`?profile=crisp`).
    fn select_tuning(window: &web_sys::Window) -> Tuning {
        let query = window.location().search().unwrap_or_default();
        let from_url = query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("profile="))
            .and_then(TuningPreset::from_str);
        if let Some(preset) = from_url {
            let tuning = Tuning::preset(preset);
            tuning.save();
            return tuning;
        }
        Tuning::load()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Wall Kick starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = select_tuning(&window);
        let game = Game::new(WebHost::new(), tuning, width as f32, height as f32);

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(ctx),
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_buttons(app.clone());

        request_animation_frame(app);

        log::info!("Wall Kick running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Resize
        {
            let app = app.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else { return };
                let w = window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let h = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
                app.borrow_mut().game.on_resize(w as f32, h as f32);
            });
            let _ = web_sys::window()
                .expect("no window")
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                // An event with no touch points is ignored
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    app.borrow_mut().game.on_pointer(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse, for desktop play
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().game.on_pointer(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        // Start and restart are the same command against the state machine
        for id in ["start-button", "restart-button"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    app.borrow_mut().game.on_start();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut app = app.borrow_mut();
            let dt = if app.last_time > 0.0 {
                ((time - app.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            app.last_time = time;

            app.game.frame(dt);
            app.render();
            app.update_hud();
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wall_kick::consts::SIM_DT;
    use wall_kick::game::Game;
    use wall_kick::platform::MemoryHost;
    use wall_kick::sim::GamePhase;
    use wall_kick::tuning::Tuning;

    env_logger::init();
    log::info!("Wall Kick (native) starting...");

    // Headless demo on a narrow shaft (the start point is within wall
    // reach there): tap alternating screen halves twice a second and climb.
    let mut game = Game::new(MemoryHost::new(), Tuning::default(), 220.0, 800.0);
    game.on_start();
    for frame in 0..3600 {
        if frame % 30 == 0 {
            let x = if (frame / 30) % 2 == 0 { 40.0 } else { 180.0 };
            game.on_pointer(x);
        }
        game.frame(SIM_DT);
        if game.state.phase == GamePhase::GameOver {
            break;
        }
    }
    println!("demo over: {}", game.final_score_line());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
