//! River Adventure entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use river_adventure::audio::AudioManager;
    use river_adventure::highscores::LocalStorageStore;
    use river_adventure::platform::{Headless, Keyboard, RenderSink, UiNotifier};
    use river_adventure::renderer::{RenderState, RiverRenderer};
    use river_adventure::sim::SessionSnapshot;
    use river_adventure::{GameLoop, Hooks, Settings};

    /// Screens and HUD text in the host page
    struct DomUi {
        document: Document,
    }

    impl DomUi {
        fn show(&self, id: &str, visible: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn update_hud(&self, snapshot: &SessionSnapshot) {
            self.set_text("score", &snapshot.score.to_string());
            self.set_text("multiplier", &snapshot.multiplier_label());
            self.set_text("nugget-count", &snapshot.nuggets.to_string());
            self.set_text("finger-count", &snapshot.fingers.to_string());
            self.set_text("high-score", &snapshot.high_score.to_string());
        }

        fn show_start_screen(&self, high_score: u64) {
            self.set_text("start-high-score", &high_score.to_string());
            self.show("start-screen", true);
            self.show("game-over-screen", false);
        }

        fn update_mute_button(&self, muted: bool) {
            self.set_text("mute-button", if muted { "Unmute" } else { "Mute" });
        }
    }

    impl UiNotifier for DomUi {
        fn session_started(&mut self, snapshot: &SessionSnapshot) {
            self.show("start-screen", false);
            self.show("game-over-screen", false);
            self.show("hud", true);
            self.update_hud(snapshot);
        }

        fn session_ended(&mut self, snapshot: &SessionSnapshot, new_best: bool) {
            self.update_hud(snapshot);
            self.set_text("final-score", &snapshot.score.to_string());
            self.set_text("final-nuggets", &snapshot.nuggets.to_string());
            self.set_text("final-fingers", &snapshot.fingers.to_string());
            self.set_text("final-high-score", &snapshot.high_score.to_string());
            self.show("new-best", new_best);
            self.show("game-over-screen", true);
        }
    }

    struct Game {
        game_loop: GameLoop<LocalStorageStore>,
        keyboard: Keyboard,
        settings: Settings,
        audio: AudioManager,
        renderer: Option<RiverRenderer>,
        ui: DomUi,
    }

    impl Game {
        fn now() -> f64 {
            web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0)
        }

        /// Start or restart; ignored mid-session
        fn start(&mut self) {
            if self.game_loop.state().is_active() {
                return;
            }
            self.audio.resume();
            self.keyboard.clear();
            if let Some(renderer) = &mut self.renderer {
                renderer.scene.restart();
            }

            let Game {
                game_loop,
                audio,
                renderer,
                ui,
                ..
            } = self;
            let mut fallback = Headless;
            let renderer: &mut dyn RenderSink = match renderer {
                Some(r) => r,
                None => &mut fallback,
            };
            let mut hooks = Hooks {
                renderer,
                ui,
                audio,
            };
            game_loop.start(Self::now(), &mut hooks);
        }

        fn frame(&mut self, time: f64) {
            let Game {
                game_loop,
                keyboard,
                audio,
                renderer,
                ui,
                ..
            } = self;
            let mut fallback = Headless;
            let renderer: &mut dyn RenderSink = match renderer {
                Some(r) => r,
                None => &mut fallback,
            };
            let mut hooks = Hooks {
                renderer,
                ui: &mut *ui,
                audio,
            };
            game_loop.frame(time, &*keyboard, &mut hooks);

            if game_loop.state().is_active() {
                ui.update_hud(&game_loop.state().snapshot(game_loop.high_score().best()));
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.settings.save();
            self.audio
                .mute_changed(&self.settings, self.game_loop.state().is_active());
            self.ui.update_mute_button(muted);
            log::info!("Sound {}", if muted { "muted" } else { "on" });
        }
    }

    async fn init_renderer(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
        seed: u64,
        settings: &Settings,
    ) -> Option<RiverRenderer> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return None;
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
                return None;
            }
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(gpu) => Some(RiverRenderer::new(gpu, seed, settings)),
            Err(e) => {
                log::error!("Failed to create device: {e}");
                None
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("River Adventure starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let renderer = init_renderer(canvas, width, height, seed, &settings).await;

        let mut game = Game {
            game_loop: GameLoop::new(seed, LocalStorageStore),
            keyboard: Keyboard::new(),
            audio: AudioManager::new(&settings),
            renderer,
            ui: DomUi {
                document: document.clone(),
            },
            settings,
        };
        log::info!("Game initialized with seed: {}", seed);

        // Attract screen: still water and the idle boat
        if let Some(renderer) = &mut game.renderer {
            game.game_loop.render_preview(renderer);
        }
        game.ui.show_start_screen(game.game_loop.high_score().best());
        game.ui.update_mute_button(game.settings.muted);

        let game = Rc::new(RefCell::new(game));
        setup_buttons(&document, game.clone());
        setup_keyboard(game.clone());
        request_animation_frame(game);

        log::info!("River Adventure running!");
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for id in ["start-button", "restart-button"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().start();
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("mute-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                if key == "m" || key == "M" {
                    if !event.repeat() {
                        g.toggle_mute();
                    }
                } else if g.keyboard.key_down(&key) {
                    // No page scrolling on arrow keys
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().keyboard.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keys released outside the window never report keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keyboard.clear();
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
        game.borrow_mut().frame(time);
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
    use river_adventure::consts::{FPS, FRAME_MS};
    use river_adventure::highscores::FileStore;
    use river_adventure::platform::{FixedFrames, Headless};
    use river_adventure::sim::TickInput;
    use river_adventure::{FrameOutcome, GameLoop, Hooks};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("River Adventure (native) starting...");
    log::info!("Native mode runs one headless session - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let store = FileStore::new(std::env::temp_dir().join("river_adventure_highscore.json"));
    log::info!("High score file: {}", store.path().display());

    let mut game = GameLoop::new(seed, store);
    let (mut renderer, mut ui, mut audio) = (Headless, Headless, Headless);
    let mut hooks = Hooks {
        renderer: &mut renderer,
        ui: &mut ui,
        audio: &mut audio,
    };

    game.start(0.0, &mut hooks);

    // Weave across the river, easing off the oars now and then. Two minutes max.
    let frames = FixedFrames::new(FRAME_MS, FRAME_MS, (FPS as usize) * 120);
    for (i, timestamp) in frames.enumerate() {
        let leg = i / 45;
        let input = TickInput {
            left: leg % 2 == 0,
            right: leg % 2 == 1,
            forward: (i / 240) % 2 == 0,
            backward: (i / 240) % 2 == 1,
        };
        if game.frame(timestamp, &input, &mut hooks) == FrameOutcome::Ended {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Finished after {} ticks ({:?}): score {}, best {}",
        state.time_ticks,
        state.phase,
        state.stats.score,
        game.high_score().best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
