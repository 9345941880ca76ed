//! Speedo entry point
//!
//! On the web: sizes the canvas to the viewport, wires the keyboard and runs
//! one simulation tick per animation frame. Natively: flies the autopilot
//! headless for a fixed number of frames and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use speedo::Settings;
    use speedo::renderer::{Canvas, Canvas2d, Painter, draw_frame};
    use speedo::sim::{Autopilot, Bounds, SimState, TickInput, tick};

    /// App instance holding all state
    struct App {
        state: SimState,
        painter: Painter<Canvas2d>,
        /// Keys currently held
        input: TickInput,
        /// Demo mode - autopilot flies the ship
        autopilot: Option<Autopilot>,
        show_speed: bool,
        autopilot_seed: u64,
    }

    impl App {
        fn new(canvas: Canvas2d, settings: Settings) -> Self {
            let (width, height) = canvas.size();
            let show_speed = settings.show_speed;
            let autopilot_seed = settings.autopilot_seed;
            Self {
                state: SimState::new(Bounds::new(width, height), settings),
                painter: Painter::new(canvas),
                input: TickInput::default(),
                autopilot: None,
                show_speed,
                autopilot_seed,
            }
        }

        /// Advance one frame and repaint
        fn frame(&mut self) {
            let input = match self.autopilot.as_mut() {
                Some(pilot) => pilot.next_input(&self.state),
                None => self.input,
            };
            let frame = tick(&mut self.state, &input);
            draw_frame(&mut self.painter, &frame, self.show_speed);
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => None,
                None => Some(Autopilot::new(self.autopilot_seed)),
            };
            log::info!("Autopilot: {}", self.autopilot.is_some());
        }

        /// Switch between flooring and reversing brakes, and remember it
        fn toggle_brake_policy(&mut self) {
            let settings = &mut self.state.settings;
            settings.brake_policy = settings.brake_policy.toggled();
            log::info!("Brake policy: {}", settings.brake_policy.as_str());
            settings.save();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Speedo starting...");

        if let Err(e) = start() {
            log::error!("Startup failed: {:?}", e);
        }
    }

    fn start() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Sized once to the viewport, never resized
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(Canvas2d::new(&canvas)?, settings)));

        log::info!("Surface {}x{}", width as u32, height as u32);

        setup_key_handlers(&window, app.clone());

        request_animation_frame(app);

        log::info!("Speedo running!");
        Ok(())
    }

    fn setup_key_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if a.input.handle_key_event(&key, event.key_code(), true) {
                    event.prevent_default();
                } else if key == "i" || key == "I" {
                    a.toggle_autopilot();
                } else if key == "b" || key == "B" {
                    a.toggle_brake_policy();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                a.input
                    .handle_key_event(&event.key(), event.key_code(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
use speedo::BrakePolicy;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Speedo (native) starting...");
    log::info!("Native mode runs the autopilot headless - use `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let frames = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(600);

    // Optional brake policy override: "floor" or "reverse"
    let brake_policy = args.next().and_then(|arg| {
        let policy = BrakePolicy::from_str(&arg);
        if policy.is_none() {
            log::warn!("Unknown brake policy {:?}, keeping the configured one", arg);
        }
        policy
    });

    fly_headless(frames, brake_policy);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fly the autopilot for `frames` frames against a recording canvas
#[cfg(not(target_arch = "wasm32"))]
fn fly_headless(frames: u64, brake_policy: Option<BrakePolicy>) {
    use speedo::Settings;
    use speedo::renderer::{Painter, RecordingCanvas, draw_frame};
    use speedo::sim::{Autopilot, Bounds, NeedleZone, SimState, tick};

    let mut settings = Settings::load();
    if let Some(policy) = brake_policy {
        settings.brake_policy = policy;
    }
    log::info!("Brake policy: {}", settings.brake_policy.as_str());
    let show_speed = settings.show_speed;
    let mut pilot = Autopilot::new(settings.autopilot_seed);
    let mut state = SimState::new(Bounds::new(800.0, 600.0), settings);
    let mut painter = Painter::new(RecordingCanvas::new(800.0, 600.0));

    let mut top_speed: f32 = 0.0;
    let mut danger_frames = 0u64;
    let mut draw_calls = 0usize;

    for _ in 0..frames {
        let input = pilot.next_input(&state);
        let frame = tick(&mut state, &input);
        draw_frame(&mut painter, &frame, show_speed);

        top_speed = top_speed.max(frame.speed);
        if frame.needle.zone == NeedleZone::Danger {
            danger_frames += 1;
        }
        draw_calls += painter.canvas().commands().len();
        log::trace!(
            "tick {} speed {:.2} needle {:.1}°",
            state.time_ticks,
            frame.speed,
            frame.needle.angle
        );
    }

    log::info!(
        "Flew {} frames: top speed {:.2}, {} frames in the red, {} draw calls",
        state.time_ticks,
        top_speed,
        danger_frames,
        draw_calls
    );
    log::info!(
        "Final position ({:.1}, {:.1}), heading {:.2} rad",
        state.ship.position.x(),
        state.ship.position.y(),
        speedo::normalize_angle(state.heading)
    );
}
