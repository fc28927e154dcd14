//! Cube Climb entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use cube_climb::Tuning;
    use cube_climb::camera::Camera;
    use cube_climb::platform::KeyboardState;
    use cube_climb::sim::aabb::BOX_EDGES;
    use cube_climb::sim::{Aabb, GameEvent, GameState, tick};

    const PLAYER_COLOR: &str = "#00ff00";
    const PLATFORM_COLOR: &str = "#888888";
    const COLLECTIBLE_COLOR: &str = "#ff0000";
    const ENEMY_COLOR: &str = "#ff4500";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        camera: Camera,
        keys: KeyboardState,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        // Last values written to the HUD
        shown_score: Option<u32>,
        shown_lives: Option<u32>,
    }

    impl Game {
        /// Run one simulation step and move the camera
        fn update(&mut self) -> GameEvent {
            let input = self.keys.snapshot();
            let clock_secs = js_sys::Date::now() / 1000.0;
            let event = tick(&mut self.state, &input, clock_secs);
            self.camera.follow(&self.state.player);
            event
        }

        /// Draw every entity as a projected wireframe box
        fn render(&self) {
            let w = self.canvas.width() as f32;
            let h = self.canvas.height() as f32;
            self.ctx.set_fill_style_str("#000000");
            self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

            for platform in &self.state.platforms {
                self.draw_box(&platform.aabb(), PLATFORM_COLOR, w, h);
            }
            for collectible in &self.state.collectibles {
                self.draw_box(&collectible.aabb(), COLLECTIBLE_COLOR, w, h);
            }
            for enemy in &self.state.enemies {
                self.draw_box(&enemy.aabb(), ENEMY_COLOR, w, h);
            }
            self.draw_box(&self.state.player.aabb(), PLAYER_COLOR, w, h);
        }

        fn draw_box(&self, aabb: &Aabb, color: &str, w: f32, h: f32) {
            let projected = aabb.corners().map(|c| self.camera.project(c, w, h));
            self.ctx.set_stroke_style_str(color);
            self.ctx.begin_path();
            for (a, b) in BOX_EDGES {
                if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
                    self.ctx.move_to(pa.x as f64, pa.y as f64);
                    self.ctx.line_to(pb.x as f64, pb.y as f64);
                }
            }
            self.ctx.stroke();
        }

        /// Update HUD elements in DOM (only when values change)
        fn update_hud(&mut self, document: &Document) {
            if self.shown_score != Some(self.state.score) {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&self.state.score.to_string()));
                }
                self.shown_score = Some(self.state.score);
            }
            if self.shown_lives != Some(self.state.lives) {
                if let Some(el) = document.get_element_by_id("lives") {
                    el.set_text_content(Some(&self.state.lives.to_string()));
                }
                self.shown_lives = Some(self.state.lives);
            }
        }

        /// Match canvas and camera to the window size
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0) as u32;
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.camera.resize(width, height);
        }
    }

    /// Read an optional `<script id="tuning" type="application/json">` block
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::error!("Ignoring tuning block: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Cube Climb starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into()?,
            None => {
                let el: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                document.body().ok_or("no body")?.append_child(&el)?;
                el
            }
        };
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let tuning = load_tuning(&document);
        let state = GameState::with_tuning(seed, tuning);
        log::info!("Game initialized with seed: {}", seed);

        let mut game = Game {
            state,
            camera: Camera::new(canvas.width(), canvas.height()),
            keys: KeyboardState::new(),
            ctx,
            canvas,
            shown_score: None,
            shown_lives: None,
        };
        game.resize();
        let game = Rc::new(RefCell::new(game));

        setup_input_handlers(game.clone())?;
        setup_resize_handler(game.clone())?;

        request_animation_frame(game);

        log::info!("Cube Climb running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keys.process_key(&event.code(), pressed) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-ups go elsewhere
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let event = {
            let mut g = game.borrow_mut();

            let event = g.update();
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
            event
        };

        // The alert blocks and listeners may run meanwhile, so no borrow is held
        if let Some(message) = event.alert_message() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
            // Key-ups that happened while the dialog was open never arrive
            game.borrow_mut().keys.clear();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cube Climb (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    run_headless(seed, 60 * 30);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation with a scripted hop-and-sweep pattern and log the outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, frames: u64) {
    use cube_climb::Camera;
    use cube_climb::sim::{GameEvent, GameState, TickInput, tick};

    let mut state = GameState::new(seed);
    let mut camera = Camera::new(800, 600);

    for frame in 0..frames {
        // Sweep left/right in 2 second legs, hopping every second
        let leg = (frame / 120) % 4;
        let input = TickInput {
            move_right: leg == 0,
            move_back: leg == 1,
            move_left: leg == 2,
            move_forward: leg == 3,
            jump: frame % 60 == 0,
            reset: false,
        };
        let clock_secs = frame as f64 / 60.0;

        match tick(&mut state, &input, clock_secs) {
            GameEvent::Continue => {}
            GameEvent::GameOver => log::info!("Frame {}: game over", frame),
            GameEvent::Win => log::info!("Frame {}: win", frame),
        }
        camera.follow(&state.player);
    }

    log::info!(
        "After {} frames: score {}, lives {}, {} pickups left{}",
        frames,
        state.score,
        state.lives,
        state.collectibles.len(),
        if state.all_collected() { " (all collected)" } else { "" }
    );
    log::info!(
        "Player at {:?}, camera at {:?}",
        state.player.pos,
        camera.position
    );
}
