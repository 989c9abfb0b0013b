//! Soccer Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use soccer_duel::audio::AudioManager;
    use soccer_duel::consts::*;
    use soccer_duel::hud::HudText;
    use soccer_duel::renderer::{RenderState, scene};
    use soccer_duel::sim::{MatchState, TickInput, tick};
    use soccer_duel::Settings;

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Cleared by the quit key; stops the frame loop
        running: bool,
        /// Last HUD pushed to the DOM, to skip redundant updates
        last_hud: Option<HudText>,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64) -> Self {
            Self {
                state: MatchState::with_duration(seed, settings.match_duration_secs),
                render_state: None,
                audio: AudioManager::new(settings),
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput {
                    autopilot: settings.autopilot,
                    ..Default::default()
                },
                running: true,
                last_hud: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, &mut self.audio);
                self.accumulator -= SIM_DT;
                substeps += 1;

                self.input.clear_one_shots();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, document: &Document) {
            let hud = HudText::from_state(&self.state);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            set_text(document, "hud-score", &hud.score);
            set_text(document, "hud-time", &hud.time_left);
            set_text(document, "hud-hint", &hud.hint);

            if let Some(el) = document.get_element_by_id("game-over") {
                match (&hud.winner, &hud.restart) {
                    (Some(winner), Some(restart)) => {
                        set_text(document, "winner-text", winner);
                        set_text(document, "restart-prompt", restart);
                        let _ = el.set_attribute("class", "");
                    }
                    _ => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            self.last_hud = Some(hud);
        }

        fn quit(&mut self) {
            self.running = false;
            // Releases the GPU surface and device
            self.render_state = None;
            log::info!("Quit requested, frame loop stopped");
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Soccer Duel starting...");

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query_or_default(&query);

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(&settings, seed)));
        log::info!("Match initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {e}");
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {e}");
                return;
            }
        }

        setup_input_handlers(game.clone());

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        request_animation_frame(game);

        log::info!("Soccer Duel running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Key down: held steering plus one-shot actions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let key = event.key().to_lowercase();
                match key.as_str() {
                    "w" => g.input.steering.up = true,
                    "s" => g.input.steering.down = true,
                    "a" => g.input.steering.left = true,
                    "d" => g.input.steering.right = true,
                    _ if event.repeat() => {}
                    " " => {
                        event.prevent_default();
                        g.input.kick = true;
                    }
                    "r" => g.input.restart = true,
                    "p" => g.input.pause = true,
                    "m" => {
                        let muted = g.audio.toggle_mute();
                        log::info!("Muted: {}", muted);
                    }
                    "escape" => g.quit(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held steering
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().to_lowercase().as_str() {
                    "w" => g.input.steering.up = false,
                    "s" => g.input.steering.down = false,
                    "a" => g.input.steering.left = false,
                    "d" => g.input.steering.right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden: keyups are lost, so release keys and pause
        if let Some(document) = window.document() {
            let game = game.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if doc.visibility_state() != web_sys::VisibilityState::Hidden {
                    return;
                }
                let mut g = game.borrow_mut();
                let phase = g.state.phase;
                g.input.release_on_focus_loss(phase);
                log::info!("Tab hidden, input released");
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click or alt-tab away)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let phase = g.state.phase;
                g.input.release_on_focus_loss(phase);
                log::info!("Window blurred, input released");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if !g.running {
                return;
            }

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use soccer_duel::audio::{Cue, CueRecorder};
    use soccer_duel::hud::HudText;
    use soccer_duel::sim::{MatchPhase, MatchState, TickInput, tick};
    use soccer_duel::Settings;

    env_logger::init();
    log::info!("Soccer Duel (native) starting...");
    log::info!("Native mode runs a headless exhibition - run with `trunk serve` to play");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::from_pairs(args.iter().map(String::as_str)).unwrap_or_else(|e| {
        log::warn!("Ignoring settings: {e}");
        Settings::default()
    });

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = MatchState::with_duration(seed, settings.match_duration_secs);
    // No keyboard natively: both sides run the chase heuristic
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut cues = CueRecorder::default();

    log::info!("Kick-off (seed {seed}, {}s)", settings.match_duration_secs);
    while state.phase == MatchPhase::Playing {
        tick(&mut state, &input, &mut cues);
    }

    let hud = HudText::from_state(&state);
    log::info!(
        "{} | {} | {} kicks",
        hud.score,
        hud.winner.as_deref().unwrap_or_default(),
        cues.count(Cue::Kick)
    );

    match serde_json::to_string_pretty(&state.summary()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize match summary: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
