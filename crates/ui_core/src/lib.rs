//! Headless controllers for the rollbook desktop UI.
//!
//! Everything here is plain state plus transition methods; the egui shell in
//! `apps/desktop_gui` owns one instance of each controller and renders from
//! their state every frame. Controllers that depend on elapsed time take an
//! `Instant` parameter so tests can drive the clock.

pub mod flash;
pub mod form;
pub mod prefs;
pub mod reveal;
pub mod shortcut;
pub mod stats;
pub mod theme;
pub mod tooltip;
pub mod validate;
