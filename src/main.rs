//! Astro Drift entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use astro_drift::renderer::{Canvas, Color};
    use astro_drift::sim::{Control, ControlState, FrameScheduler, GameState, key_down, key_up, tick};
    use astro_drift::{Bounds, Settings};

    /// HTML canvas 2D context as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        width: f32,
        height: f32,
    }

    impl Canvas for CanvasSurface {
        fn clear(&mut self, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx
                .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }

        fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.close_path();
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.stroke();
        }

        fn stroke_polygon(&mut self, points: &[Vec2], color: Color) {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            self.ctx.begin_path();
            self.ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
            self.ctx.close_path();
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.stroke();
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        controls: ControlState,
        surface: CanvasSurface,
    }

    /// Re-registers the loop with `requestAnimationFrame`
    struct AnimationFrames {
        game: Rc<RefCell<Game>>,
    }

    impl FrameScheduler for AnimationFrames {
        fn request_tick(&mut self) {
            request_animation_frame(self.game.clone());
        }
    }

    /// Optional `<script id="settings" type="application/json">` block
    fn page_settings(document: &web_sys::Document) -> Settings {
        let Some(json) = document
            .get_element_by_id("settings")
            .and_then(|el| el.text_content())
        else {
            return Settings::default();
        };

        match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from page");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring page settings: {}", e);
                Settings::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Astro Drift starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        // Fill the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(astro_drift::consts::DEFAULT_WIDTH as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(astro_drift::consts::DEFAULT_HEIGHT as f64);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let settings = page_settings(&document)
            .with_bounds(Bounds::new(width as f32, height as f32));
        let spawn_interval_ms = settings.spawn_interval_ms;

        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(settings, seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Invalid configuration: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            controls: ControlState::new(),
            surface: CanvasSurface {
                ctx,
                width: width as f32,
                height: height as f32,
            },
        }));

        setup_input_handlers(&window, game.clone());
        setup_spawn_interval(&window, game.clone(), spawn_interval_ms);

        // Start game loop
        request_animation_frame(game);

        log::info!("Astro Drift running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if Control::from_key_code(&code).is_some() {
                    // Keep space/arrows from scrolling the page
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                let Game {
                    state, controls, ..
                } = &mut *g;
                key_down(state, controls, &code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                key_up(&mut game.borrow_mut().controls, &event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events for held keys will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().controls.release_all();
                log::info!("Focus lost, controls released");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_spawn_interval(window: &web_sys::Window, game: Rc<RefCell<Game>>, interval_ms: u32) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().state.spawn_asteroid();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms.min(i32::MAX as u32) as i32,
        ) {
            log::error!("Failed to start spawn timer: {:?}", e);
        }
        closure.forget();
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
        let mut frames = AnimationFrames { game: game.clone() };
        let mut g = game.borrow_mut();
        let Game {
            state,
            controls,
            surface,
        } = &mut *g;
        tick(state, controls, surface, &mut frames);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use astro_drift::renderer::RecordingCanvas;
    use astro_drift::sim::{ControlState, FrameScheduler, GameState, key_down, key_up, tick};
    use astro_drift::{ConfigError, Settings};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u64 = 60 * 20;

    struct PendingFrame {
        requested: bool,
    }

    impl FrameScheduler for PendingFrame {
        fn request_tick(&mut self) {
            self.requested = true;
        }
    }

    fn load_settings() -> Result<Settings, ConfigError> {
        match std::env::args().nth(1) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                log::info!("Loaded settings from {}", path);
                Settings::from_json(&json)
            }
            None => Ok(Settings::default()),
        }
    }

    /// Scripted pilot: turn while thrusting, coast, fire in bursts
    fn pilot(frame: u64, state: &mut GameState, controls: &mut ControlState) {
        match frame {
            0 => {
                key_down(state, controls, "KeyW");
                key_down(state, controls, "KeyD");
            }
            120 => key_up(controls, "KeyD"),
            240 => key_up(controls, "KeyW"),
            _ => {}
        }
        if frame % 30 == 0 {
            key_down(state, controls, "Space");
            key_up(controls, "Space");
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let settings = load_settings()?;
        let bounds = settings.bounds;
        let mut state = GameState::new(settings, 0x5eed)?;
        let mut controls = ControlState::new();
        let mut canvas = RecordingCanvas::new();
        let mut timer = state.spawn_timer();
        let mut frames = PendingFrame { requested: true };

        log::info!(
            "Simulating {} frames on a {}x{} field",
            FRAMES,
            bounds.width,
            bounds.height
        );

        let mut frame = 0;
        while frames.requested && frame < FRAMES {
            frames.requested = false;
            state.run_spawn_timer(&mut timer, FRAME_MS);
            pilot(frame, &mut state, &mut controls);
            tick(&mut state, &controls, &mut canvas, &mut frames);

            if frame % 60 == 0 {
                log::info!(
                    "t={:>2}s ship=({:.1}, {:.1}) rot={:.2} shots={} asteroids={} draws={}",
                    frame / 60,
                    state.ship.body.pos.x,
                    state.ship.body.pos.y,
                    state.ship.rotation,
                    state.projectiles.len(),
                    state.asteroids.len(),
                    canvas.commands.len()
                );
            }
            frame += 1;
        }

        log::info!("Done after {} ticks", state.time_ticks);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Astro Drift (native, headless) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
