//! Ski Shooter entry point
//!
//! Host-side glue only: forwards input intents into the simulation, drains
//! its events for the audio collaborator, and publishes the per-frame
//! snapshot for whatever renders it. Nothing in here feeds back into the
//! simulation besides [`TickInput`].

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use ski_shooter::sim::{GameEvent, GameState, GameStatus, TickInput, tick};
    use ski_shooter::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        last_time: f64,
        settings: Settings,
        highscores: HighScores,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                input: TickInput::default(),
                last_time: 0.0,
                settings: Settings::load(),
                highscores: HighScores::load(),
            }
        }

        /// Run one simulation tick from the rAF timestamp
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                0.0 // first frame: no-op advance
            };
            self.last_time = time;

            let input = self.input.clone();
            tick(&mut self.state, &input, dt);

            // Clear one-shot intents after processing
            self.input.jump = false;
            self.input.pause = false;
            self.input.start = false;
        }

        /// Drain simulation events: audio cues out, final scores into the
        /// leaderboard. Fire-and-forget; failures never reach the sim.
        fn handle_events(&mut self) {
            for event in self.state.drain_events() {
                if let GameEvent::GameOver { final_score } = event {
                    let rank =
                        self.highscores
                            .add_score(final_score, self.state.level, js_sys::Date::now());
                    if let Some(rank) = rank {
                        log::info!("new high score {final_score} (rank {rank})");
                    }
                    self.highscores.save();
                }

                if self.settings.sound_on {
                    dispatch_custom_event("ski-shooter:sound", sound_name(event));
                }
            }
        }

        /// Publish the frame snapshot and mirror the HUD into the DOM
        fn publish_frame(&self) {
            if let Ok(json) = serde_json::to_string(&self.state.snapshot()) {
                dispatch_custom_event("ski-shooter:frame", &json);
            }
            self.update_hud();
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let set = |selector: &str, value: String| {
                if let Some(el) = document.query_selector(selector).ok().flatten() {
                    el.set_text_content(Some(&value));
                }
            };

            set("#hud-score .hud-value", self.state.score.to_string());
            set("#hud-lives .hud-value", self.state.lives.to_string());
            set("#hud-level .hud-value", self.state.level.to_string());
            set("#hud-time .hud-value", self.state.time_left.to_string());
            if let Some(top) = self.highscores.top_score() {
                set("#hud-top .hud-value", top.to_string());
            }

            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };

            show("turbo-badge", self.state.turbo_active());
            show("start-prompt", self.state.status == GameStatus::Idle);
            show("pause-menu", self.state.status == GameStatus::Paused);
            show("game-over", self.state.status == GameStatus::GameOver);
            if self.state.status == GameStatus::GameOver {
                set("#final-score", self.state.score.to_string());
            }
        }
    }

    /// Audio cue name per event (the level-up fanfare reuses the start cue)
    fn sound_name(event: GameEvent) -> &'static str {
        match event {
            GameEvent::Start | GameEvent::LevelUp => "start",
            GameEvent::Jump => "jump",
            GameEvent::Shoot => "shoot",
            GameEvent::Collect => "collect",
            GameEvent::Hit => "hit",
            GameEvent::PowerUp => "powerUp",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }

    fn dispatch_custom_event(name: &str, detail: &str) {
        if let Some(window) = web_sys::window() {
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&JsValue::from_str(detail));
            if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(name, &init) {
                let _ = window.dispatch_event(&event);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ski Shooter starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Ski Shooter running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keydown: routing depends on session status (spec'd in the sim,
        // mirrored here only for the overloaded Space/Enter keys)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyP" => g.input.pause = true,
                    "Space" | "Enter" => match g.state.status {
                        GameStatus::Playing => {
                            if event.code() == "Space" {
                                g.input.jump = true;
                            }
                        }
                        GameStatus::Paused => g.input.pause = true,
                        GameStatus::Idle | GameStatus::GameOver => g.input.start = true,
                    },
                    "KeyF" => g.input.fire = true,
                    "ArrowLeft" => g.input.move_left = true,
                    "ArrowRight" => g.input.move_right = true,
                    "KeyM" => {
                        g.settings.toggle_sound();
                        g.settings.save();
                        log::info!("Sound: {}", g.settings.sound_on);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move: screen x maps onto the lateral range, clamped by the sim
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.status != GameStatus::Playing {
                    return;
                }
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                if width > 0.0 {
                    let lateral = ((event.client_x() as f64 / width) - 0.5) * 100.0;
                    g.state.player.set_lateral(lateral as f32);
                }
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release held intents
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "KeyF" => g.input.fire = false,
                    "ArrowLeft" => g.input.move_left = false,
                    "ArrowRight" => g.input.move_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.status == GameStatus::Playing {
                        g.input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.status == GameStatus::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.handle_events();
            g.publish_frame();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ski_shooter::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Ski Shooter (native) starting...");
    log::info!("Run with `trunk serve` for the web version; native mode runs a headless demo.");

    // Headless demo: hold fire and drift right for thirty seconds of play
    let mut state = GameState::new(2024);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
        0.0,
    );

    let held = TickInput {
        move_right: true,
        fire: true,
        ..Default::default()
    };
    for _ in 0..(30 * 60) {
        tick(&mut state, &held, 1000.0 / 60.0);
    }

    for event in state.drain_events() {
        log::debug!("event: {:?}", event);
    }
    log::info!(
        "demo finished: status {:?}, score {}, level {}, lives {}, {} live entities",
        state.status,
        state.score,
        state.level,
        state.lives,
        state.entities.len()
    );
}
