//! Whack-a-mole gameplay.
//!
//! The pure pieces (difficulty table, hole chooser, scoreboard, countdown and
//! `Round`) live in child modules and are tested natively. This file is the
//! browser runtime: one thread-local `Runtime`, a repeating one-second interval
//! for the countdown and a self-rescheduling timeout for reveal/hide.

use std::cell::RefCell;

use log::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::audio::Soundboard;
use crate::config::GameConfig;
use crate::dom::{self, Page};
use crate::error::{GameError, Result};
use crate::logging;
use crate::rng::Xorshift64;

mod chooser;
mod countdown;
mod difficulty;
mod round;
mod score;

pub use chooser::HoleChooser;
pub use countdown::Countdown;
pub use difficulty::{
    Difficulty, EASY_DELAY_MS, HARD_DELAY_MAX_MS, HARD_DELAY_MIN_MS, NORMAL_DELAY_MS,
};
pub use round::{NextStep, Phase, Reveal, Round};
pub use score::{PointValues, Scoreboard, TargetKind};

const COUNTDOWN_INTERVAL_MS: i32 = 1000;

struct Runtime {
    config: GameConfig,
    page: Page,
    round: Round,
    rng: Xorshift64,
    sounds: Soundboard,
    reveal_timeout: Option<i32>,
    countdown_interval: Option<i32>,
    countdown_tick: Closure<dyn FnMut()>,
}

thread_local! {
    static GAME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Entropy-seeded generator, falling back to the clock if entropy is unavailable.
pub(crate) fn entropy_rng() -> Xorshift64 {
    Xorshift64::from_entropy().unwrap_or_else(|e| {
        warn!("{e}; seeding from clock");
        Xorshift64::seeded(now_ms().to_bits())
    })
}

/// Look up the page, attach listeners and keep the runtime for the callbacks.
/// Listeners are attached once; a second install is rejected.
pub fn install(config: GameConfig) -> Result<()> {
    config.validate()?;
    logging::init(config.log_level);
    if GAME.with(|cell| cell.borrow().is_some()) {
        return Err(GameError::AlreadyInitialized);
    }

    let doc = dom::document()?;
    let page = Page::query(&doc, &config.page)?;
    let mut round = Round::new(page.hole_count(), &config);
    if let Some(label) = page.checked_difficulty() {
        round.set_difficulty(Difficulty::from_label(&label));
    }
    attach_listeners(&page)?;

    let sounds = Soundboard::new(config.hit_sound_url.as_deref(), config.song_url.as_deref());
    let countdown_tick = Closure::wrap(Box::new(on_countdown_tick) as Box<dyn FnMut()>);

    info!(
        "whack-a-mole ready: {} holes, {}s rounds, difficulty {}",
        page.hole_count(),
        config.duration_secs,
        round.difficulty().label()
    );
    let runtime = Runtime {
        config,
        page,
        round,
        rng: entropy_rng(),
        sounds,
        reveal_timeout: None,
        countdown_interval: None,
        countdown_tick,
    };
    GAME.with(|cell| cell.replace(Some(runtime)));
    Ok(())
}

fn attach_listeners(page: &Page) -> Result<()> {
    // Start button
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(e) = start_round() {
                error!("could not start round: {e}");
            }
        }) as Box<dyn FnMut(_)>);
        page.start_button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // One click listener per mole, carrying its hole index
    for (hole, mole) in page.moles.iter().enumerate() {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            on_whack(hole);
        }) as Box<dyn FnMut(_)>);
        mole.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Difficulty radios
    for radio in &page.radios {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            on_difficulty_change();
        }) as Box<dyn FnMut(_)>);
        radio.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Begin a round. Ignored while one is already running.
pub fn start_round() -> Result<()> {
    GAME.with(|cell| {
        let mut guard = cell.borrow_mut();
        let rt = guard.as_mut().ok_or(GameError::NotInitialized)?;
        if rt.round.is_running() {
            debug!("start ignored: round already running");
            return Ok(());
        }

        let duration = rt.config.duration_secs;
        rt.round.start(duration);
        rt.page.set_controls_disabled(true);
        rt.page.render_score(rt.round.score());
        rt.page.render_timer(duration);
        rt.sounds.loop_song();

        let win = window().ok_or(GameError::NoWindow)?;
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            rt.countdown_tick.as_ref().unchecked_ref(),
            COUNTDOWN_INTERVAL_MS,
        )?;
        rt.countdown_interval = Some(id);
        info!(
            "round started: {}s on {}",
            duration,
            rt.round.difficulty().label()
        );

        if let Err(e) = show_up(rt) {
            finish(rt);
            return Err(e);
        }
        Ok(())
    })
}

/// End the running round early. No-op when idle.
pub fn stop_round() {
    with_runtime(|rt| {
        if rt.round.is_running() {
            finish(rt);
        }
    });
}

pub fn current_score() -> u32 {
    with_runtime(|rt| rt.round.score()).unwrap_or(0)
}

pub fn current_time_remaining() -> u32 {
    with_runtime(|rt| rt.round.remaining()).unwrap_or(0)
}

fn show_up(rt: &mut Runtime) -> Result<()> {
    let Some(reveal) = rt.round.show_up(&mut rt.rng) else {
        return Ok(());
    };
    rt.page.show(reveal.hole, reveal.kind)?;

    let win = window().ok_or(GameError::NoWindow)?;
    let hole = reveal.hole;
    // Frees itself when it fires. A timeout cleared by `finish` leaks its
    // closure, at most one per round.
    let on_hide = Closure::once_into_js(move || on_reveal_elapsed(hole));
    let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        on_hide.unchecked_ref(),
        reveal.delay_ms as i32,
    )?;
    rt.reveal_timeout = Some(id);
    debug!(
        "reveal hole {} as {:?} for {}ms",
        reveal.hole, reveal.kind, reveal.delay_ms
    );
    Ok(())
}

fn on_reveal_elapsed(hole: usize) {
    with_runtime(|rt| {
        rt.reveal_timeout = None;
        if let Err(e) = rt.page.hide(hole) {
            warn!("could not hide hole {hole}: {e}");
        }
        match rt.round.hide() {
            NextStep::ShowUp => {
                if let Err(e) = show_up(rt) {
                    error!("reveal failed: {e}");
                    finish(rt);
                }
            }
            NextStep::Stop => finish(rt),
        }
    });
}

fn on_countdown_tick() {
    with_runtime(|rt| {
        let remaining = rt.round.tick();
        rt.page.render_timer(remaining);
        if rt.round.is_running() && rt.round.time_expired() {
            finish(rt);
        }
    });
}

fn on_whack(hole: usize) {
    with_runtime(|rt| {
        if let Some(points) = rt.round.whack(hole) {
            rt.page.render_score(points);
            rt.sounds.play_hit();
            debug!("whacked hole {hole}, score {points}");
        }
    });
}

fn on_difficulty_change() {
    with_runtime(|rt| {
        let label = rt.page.checked_difficulty().unwrap_or_default();
        let difficulty = Difficulty::from_label(&label);
        if rt.round.set_difficulty(difficulty) {
            info!(
                "difficulty {} (x{} points)",
                difficulty.label(),
                difficulty.multiplier()
            );
        }
    });
}

/// Clear both timers, hide whatever is up and hand the controls back.
fn finish(rt: &mut Runtime) {
    if let Some(win) = window() {
        if let Some(id) = rt.countdown_interval.take() {
            win.clear_interval_with_handle(id);
        }
        if let Some(id) = rt.reveal_timeout.take() {
            win.clear_timeout_with_handle(id);
        }
    }
    if let Some(reveal) = rt.round.stop() {
        if let Err(e) = rt.page.hide(reveal.hole) {
            warn!("could not hide hole {}: {e}", reveal.hole);
        }
    }
    rt.page.set_controls_disabled(false);
    rt.sounds.stop_song();
    info!("game stopped: {} points", rt.round.score());
}
