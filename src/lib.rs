//! Arcade Snake - a classic Snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Fire-and-forget audio cues (audio module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session stats for the HUD (metrics module)
//! - The interactive driver (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
