//! Penguin Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use penguin_run::persistence::{KeyValueStore, MemoryStore};
    use penguin_run::platform::storage::LocalStore;
    use penguin_run::platform::{FrameClock, input};
    use penguin_run::renderer::{self, canvas2d::Canvas2d};
    use penguin_run::sim::{GameEvent, GameState, TickInput, tick};
    use penguin_run::{BestScore, Tuning};

    /// DOM labels and the pause button, touched only when their value changes
    struct Hud {
        score: Option<Element>,
        best: Option<Element>,
        pause_btn: Option<Element>,
        shown_score: Option<u64>,
        shown_best: Option<u64>,
        shown_paused: Option<bool>,
    }

    impl Hud {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                best: document.get_element_by_id("best"),
                pause_btn: document.get_element_by_id("pauseBtn"),
                shown_score: None,
                shown_best: None,
                shown_paused: None,
            }
        }

        fn update(&mut self, state: &GameState, best: u64) {
            if self.shown_score != Some(state.score) {
                if let Some(el) = &self.score {
                    el.set_text_content(Some(&state.score.to_string()));
                }
                self.shown_score = Some(state.score);
            }

            if self.shown_best != Some(best) {
                if let Some(el) = &self.best {
                    el.set_text_content(Some(&best.to_string()));
                }
                self.shown_best = Some(best);
            }

            let paused = state.is_paused();
            if self.shown_paused != Some(paused) {
                if let Some(el) = &self.pause_btn {
                    el.set_text_content(Some(if paused { "Resume" } else { "Pause" }));
                }
                self.shown_paused = Some(paused);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: Canvas2d,
        clock: FrameClock,
        input: TickInput,
        best: BestScore<Box<dyn KeyValueStore>>,
        hud: Hud,
    }

    impl Game {
        /// One animation frame: update (when active), then draw
        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta(time);
            tick(&mut self.state, &self.input, dt);
            input::end_frame(&mut self.input, self.state.is_paused());

            for event in self.state.drain_events() {
                self.handle_event(event);
            }

            renderer::draw(&mut self.surface, &self.state);
            self.hud.update(&self.state, self.best.get());
        }

        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::GameOver { score, .. } => {
                    log::info!("Game over with score {}", score);
                    self.best.record(score);
                }
                GameEvent::Paused => log::info!("Paused"),
                GameEvent::Resumed => log::info!("Resumed"),
                GameEvent::Jumped | GameEvent::Scored { .. } | GameEvent::Restarted => {
                    log::debug!("{:?}", event);
                }
            }
        }

        fn command(&mut self, command: input::Command) {
            command.apply(&mut self.input);
        }
    }

    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; best score will not persist", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Penguin Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no #game canvas")?
            .dyn_into()?;
        let surface = Canvas2d::attach(&canvas, window.device_pixel_ratio())?;

        let best = BestScore::load(open_store());
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, Tuning::load(), best.get());
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            clock: FrameClock::default(),
            input: TickInput::default(),
            best,
            hud: Hud::new(&document),
        }));

        setup_keyboard(&window, game.clone())?;
        setup_pointer(&canvas, game.clone())?;
        setup_buttons(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Penguin Run running!");
        Ok(())
    }

    /// Register a listener that lives for the rest of the page
    fn listen(
        target: &EventTarget,
        kind: &str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            listen(window, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = event.key();
                if input::suppresses_default(&key) {
                    event.prevent_default();
                }
                if let Some(command) = input::key_down(&key) {
                    game.borrow_mut().command(command);
                }
            })?;
        }

        listen(window, "keyup", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(command) = input::key_up(&event.key()) {
                game.borrow_mut().command(command);
            }
        })
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Left half ducks while pressed, right half jumps
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            listen(canvas, "pointerdown", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = canvas_clone.get_bounding_client_rect();
                let x = (event.client_x() as f64 - rect.left()) as f32;
                let command = input::pointer_down(x, rect.width() as f32);
                game.borrow_mut().command(command);
            })?;
        }

        listen(canvas, "pointerup", move |_event| {
            game.borrow_mut().command(input::pointer_up());
        })
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("pauseBtn") {
            let game = game.clone();
            listen(&btn, "click", move |_event| {
                game.borrow_mut().command(input::Command::TogglePause);
            })?;
        }

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            listen(&btn, "click", move |_event| {
                game.borrow_mut().command(input::Command::Restart);
                log::info!("Restart requested");
            })?;
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
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
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

/// Headless run: the autopilot plays one seeded game at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use penguin_run::persistence::MemoryStore;
    use penguin_run::platform::FrameClock;
    use penguin_run::sim::{GameEvent, GameState, TickInput, tick};
    use penguin_run::{BestScore, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // penguin-run [seed] [max_frames]
    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 5);

    log::info!("Penguin Run (native) starting, seed {}", seed);
    log::info!("Native mode runs the autopilot headless - run with `trunk serve` to play");

    let mut best = BestScore::load(MemoryStore::new());
    let mut state = GameState::new(seed, Tuning::load(), best.get());
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut clock = FrameClock::default();
    clock.restart(0.0);

    for frame in 1..=max_frames {
        let now = frame as f64 * 1000.0 / 60.0;
        let dt = clock.delta(now);
        tick(&mut state, &input, dt);
        for event in state.drain_events() {
            if let GameEvent::GameOver { score, .. } = event {
                best.record(score);
            }
        }
        if state.is_game_over() {
            break;
        }
    }

    println!(
        "seed {}: score {} after {:.1}s ({} frames), speed {:.2}, {}",
        seed,
        state.score,
        state.time_ms / 1000.0,
        state.frames,
        state.speed(),
        if state.is_game_over() { "crashed" } else { "survived" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
