//! Snake entry point
//!
//! Handles platform-specific initialization and wires the session to the
//! page (web) or to a scripted headless run (native).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use snake_web::input::Key;
    use snake_web::persistence::LocalStore;
    use snake_web::platform::IntervalTimer;
    use snake_web::renderer::DomRenderer;
    use snake_web::{GameConfig, GameSession};

    /// Game instance holding all state
    struct Game {
        session: GameSession<IntervalTimer, LocalStore>,
        renderer: DomRenderer,
    }

    impl Game {
        fn tick(&mut self) {
            self.session.on_tick();
            self.render();
        }

        fn render(&mut self) {
            let snap = self.session.snapshot();
            self.renderer.render(&snap);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::default();
        let renderer =
            DomRenderer::new(document, config.board_size).expect("Failed to build board");
        let seed = js_sys::Date::now() as u64;

        // The interval callback only holds a weak handle so dropping the game stops it
        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            let weak = weak.clone();
            let on_tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().tick();
                }
            });
            let session = GameSession::new(config, IntervalTimer::new(on_tick), LocalStore::new(), seed);
            RefCell::new(Game { session, renderer })
        });

        {
            let mut g = game.borrow_mut();
            g.session.reset();
            g.render();
        }

        setup_keyboard(game.clone());
        setup_restart_button(game.clone());
        setup_teardown(game);

        log::info!("Snake running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = Key::from_dom(&event.key());
            if key == Key::Other {
                return;
            }
            // Keep arrows and space from scrolling the page
            event.prevent_default();

            let mut g = game.borrow_mut();
            let was_over = g.session.snapshot().game_over;
            g.session.on_key(key);
            if was_over && !g.session.snapshot().game_over {
                g.render();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.session.request_restart() {
                    g.render();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #restart-btn on page, restart with Enter");
        }
    }

    fn setup_teardown(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().session.shutdown();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Snake (native) starting...");
    log::info!("Native mode runs a scripted headless game - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a fixed key script on a manual timer and print the final board
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use snake_web::input::Key;
    use snake_web::persistence::MemoryStore;
    use snake_web::platform::{ManualTimer, Timer};
    use snake_web::renderer::text::count_kind;
    use snake_web::renderer::{CellKind, render_text};
    use snake_web::{GameConfig, GameSession};

    const MAX_TICKS: u32 = 200;
    // (tick, key) pairs, pressed just before that tick fires
    let script = [
        (3, "ArrowDown"),
        (6, "ArrowLeft"),
        (12, "ArrowUp"),
        (18, "ArrowRight"),
    ];

    let mut session = GameSession::new(GameConfig::default(), ManualTimer::new(), MemoryStore::new(), 42);
    session.reset();

    let mut ticks = 0;
    while session.timer().is_running() && ticks < MAX_TICKS {
        for (_, key) in script.iter().filter(|(at, _)| *at == ticks) {
            session.on_key(Key::from_dom(key));
        }
        session.on_tick();
        ticks += 1;
        log::debug!("tick {}\n{}", ticks, render_text(&session.snapshot()));
    }

    let snap = session.snapshot();
    println!("{}", render_text(&snap));
    println!("Snake length: {}", count_kind(&snap, CellKind::Snake));
    match snap.game_over_reason {
        Some(reason) => println!("Ended after {} ticks: {:?}", ticks, reason),
        None => println!("Still running after {} ticks", ticks),
    }
}
