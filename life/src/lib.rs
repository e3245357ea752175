//! Interactive Conway's Game of Life on a fixed 30x30 board.
//!
//! [`simulation::BoardSimulation`] holds all game logic and talks to the
//! window only through the [`host::Host`] trait; [`ui`] provides that host
//! on top of eframe/egui.

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod host;
pub mod simulation;
pub mod ui;
