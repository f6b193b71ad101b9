//! `#[wasm_bindgen]` exports for the bounce toy.
//!
//! JavaScript owns the frame loop:
//!
//! ```js
//! bounce_init_from_prompts(innerWidth, innerHeight);
//! bounce_attach_canvas("stage");
//! window.onresize = () => bounce_resize(innerWidth, innerHeight);
//! const loop = (t) => { bounce_frame(t); requestAnimationFrame(loop); };
//! requestAnimationFrame(loop);
//! ```

pub mod canvas;
pub mod prompts;
pub mod runner;

pub use canvas::CanvasPainter;
pub use runner::StageRunner;

use std::cell::RefCell;

use bounce_engine::{DiscInstance, SimConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<StageRunner>> = RefCell::new(None);
}

const NOT_INITIALIZED: &str = "bounce not initialized; call bounce_init() first";

/// Run `f` against the initialized runner, or fail if there is none yet.
fn try_with_runner<R>(f: impl FnOnce(&mut StageRunner) -> R) -> Result<R, &'static str> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f).ok_or(NOT_INITIALIZED))
}

/// Run `f` against the initialized runner. Calls made before init are logged and dropped.
fn with_runner<R>(f: impl FnOnce(&mut StageRunner) -> R) -> Option<R> {
    try_with_runner(f).map_err(|e| log::error!("{}", e)).ok()
}

fn install_hooks() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn resolve_seed(seed: Option<u32>) -> u64 {
    match seed {
        Some(s) => s as u64,
        None => (js_sys::Math::random() * u32::MAX as f64) as u64,
    }
}

fn start(config: SimConfig, width: f64, height: f64, seed: Option<u32>) -> Result<(), JsValue> {
    let runner = StageRunner::new(config, width, height, resolve_seed(seed))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let count = runner.particle_count();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("bounce: initialized with {} particles", count);
    Ok(())
}

/// Start from a JSON `SimConfig`. Missing fields take their defaults.
#[wasm_bindgen]
pub fn bounce_init(config_json: &str, width: f64, height: f64, seed: Option<u32>) -> Result<(), JsValue> {
    install_hooks();
    let config = SimConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(config, width, height, seed)
}

/// Start from answers to the browser prompt/confirm dialogs.
#[wasm_bindgen]
pub fn bounce_init_from_prompts(width: f64, height: f64, seed: Option<u32>) -> Result<(), JsValue> {
    install_hooks();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let config = prompts::collect_answers(&window)?.into_config();
    start(config, width, height, seed)
}

/// Paint every frame onto the `<canvas>` with this id.
#[wasm_bindgen]
pub fn bounce_attach_canvas(canvas_id: &str) -> Result<(), JsValue> {
    let painter = CanvasPainter::from_element_id(canvas_id)?;
    try_with_runner(|r| r.attach_painter(painter)).map_err(JsValue::from_str)
}

#[wasm_bindgen]
pub fn bounce_frame(timestamp_ms: f64) {
    with_runner(|r| r.frame(timestamp_ms));
}

#[wasm_bindgen]
pub fn bounce_resize(width: f64, height: f64) {
    with_runner(|r| r.resize(width, height));
}

/// Call when the loop stops (e.g. `visibilitychange`) so resuming starts from dt = 0.
#[wasm_bindgen]
pub fn bounce_pause() {
    with_runner(|r| r.pause());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_discs_ptr() -> *const f32 {
    with_runner(|r| r.discs_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_disc_count() -> u32 {
    with_runner(|r| r.disc_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_disc_floats() -> u32 {
    DiscInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}
