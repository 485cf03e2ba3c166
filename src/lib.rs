//! Whack-a-Mole core crate.
//!
//! The page provides the markup (start button, score and timer displays,
//! difficulty radios and a grid of `.hole` cells each holding a `.mole`); this
//! crate attaches to it and runs the game. Call `init_game()` (or
//! `init_game_with_config(json)`) once after the page has loaded.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod config;
pub mod dom;
pub mod error;
pub mod game;
pub mod logging;
pub mod rng;

pub use config::GameConfig;
pub use error::{GameError, Result};

use game::Difficulty;
use rng::RandomSource;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Setup
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn init_game() -> std::result::Result<(), JsValue> {
    game::install(GameConfig::default())?;
    Ok(())
}

/// Same as `init_game` with a JSON config; omitted keys keep their defaults.
#[wasm_bindgen]
pub fn init_game_with_config(json: &str) -> std::result::Result<(), JsValue> {
    game::install(GameConfig::from_json(json)?)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Round control (also driven by the start button)
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> std::result::Result<(), JsValue> {
    game::start_round()?;
    Ok(())
}

#[wasm_bindgen]
pub fn stop_game() {
    game::stop_round();
}

#[wasm_bindgen]
pub fn score() -> u32 {
    game::current_score()
}

#[wasm_bindgen]
pub fn time_remaining() -> u32 {
    game::current_time_remaining()
}

// -----------------------------------------------------------------------------
// Rules, exposed for page scripts and tests
// -----------------------------------------------------------------------------

/// Reveal delay in milliseconds for a difficulty label (unknown labels count as easy).
#[wasm_bindgen]
pub fn set_delay(difficulty: &str) -> u32 {
    Difficulty::from_label(difficulty).delay_ms(&mut game::entropy_rng())
}

#[wasm_bindgen]
pub fn point_multiplier(difficulty: &str) -> u32 {
    Difficulty::from_label(difficulty).multiplier()
}

/// Random integer in `[min, max]`.
#[wasm_bindgen]
pub fn random_integer(min: u32, max: u32) -> u32 {
    game::entropy_rng().random_integer(min, max)
}
