//! Scroll-driven page state: header emphasis, hero parallax and the
//! scroll-to-top button, all derived from the window's vertical offset.

pub mod controller;
pub mod rules;
pub mod styles;

pub use controller::ScrollStateController;
pub use styles::ScrollTargets;
