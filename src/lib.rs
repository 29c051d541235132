//! # Bent Four
//!
//! A two-player connect-style console game. Tokens drop to the lowest
//! open row of a column, but straight lines do not win: victory goes to
//! four tokens forming one of the "bent" S/Z tetromino outlines. Play
//! against another human or against one of three AI opponents of
//! increasing strength (random, greedy one-ply, lookahead two-ply).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player markers, turn loop
//! - [`ai`] — Move-selection policies simulating on cloned boards
//! - [`console`] — Prompt/display boundary over stdin/stdout
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
