// config.rs - Fixed game properties, gathered into one immutable value

use egui::{Color32, Key};

use crate::error::ConfigError;
use crate::grid::BOARD_DIMENSION;

// Game property constants
pub const CYCLE_TIME_NORMAL: f32 = 0.5;                       // Seconds between generations
pub const CYCLE_TIME_FAST_FORWARD: f32 = CYCLE_TIME_NORMAL / 3.0;
pub const PIXEL_SIZE: f32 = 32.0;                             // Screen points per cell
pub const WINDOW_TITLE: &str = "Conway's Game of Life";

const _: () = assert!(CYCLE_TIME_NORMAL > 0.0);
const _: () = assert!(CYCLE_TIME_FAST_FORWARD > 0.0);
const _: () = assert!(CYCLE_TIME_FAST_FORWARD <= CYCLE_TIME_NORMAL);
const _: () = assert!(PIXEL_SIZE > 0.0);

/// Keys read through the host. Fast-forward is bound to the Shift modifier
/// since egui reports it as a modifier rather than a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_pause: Key,
    pub reset: Key,
}

/// Everything about the game that is decided at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub cycle_time_normal: f32,
    pub cycle_time_fast_forward: f32,
    pub pixel_size: f32,
    pub alive_color: Color32,
    pub dead_color: Color32,
    /// Drawn over the cell under the pointer while paused.
    pub highlight_color: Color32,
    pub keys: KeyBindings,
    pub title: &'static str,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cycle_time_normal: CYCLE_TIME_NORMAL,
            cycle_time_fast_forward: CYCLE_TIME_FAST_FORWARD,
            pixel_size: PIXEL_SIZE,
            alive_color: Color32::WHITE,
            dead_color: Color32::BLACK,
            highlight_color: Color32::GRAY,
            keys: KeyBindings {
                toggle_pause: Key::Space,
                reset: Key::Escape,
            },
            title: WINDOW_TITLE,
        }
    }
}

impl LifeConfig {
    /// Check that the timing and scale values can drive the game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a threshold is not a positive finite
    /// number, when fast-forward is slower than normal speed, or when the
    /// pixel scale is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("cycle_time_normal", self.cycle_time_normal)?;
        check_threshold("cycle_time_fast_forward", self.cycle_time_fast_forward)?;

        if self.cycle_time_fast_forward > self.cycle_time_normal {
            return Err(ConfigError::FastForwardSlower {
                fast: self.cycle_time_fast_forward,
                normal: self.cycle_time_normal,
            });
        }

        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) {
            return Err(ConfigError::InvalidPixelSize(self.pixel_size));
        }
        Ok(())
    }

    /// Seconds to wait between generations.
    pub fn step_threshold(&self, fast_forward: bool) -> f32 {
        if fast_forward {
            self.cycle_time_fast_forward
        } else {
            self.cycle_time_normal
        }
    }

    /// Window side length in screen points.
    pub fn window_side(&self) -> f32 {
        BOARD_DIMENSION as f32 * self.pixel_size
    }
}

fn check_threshold(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
