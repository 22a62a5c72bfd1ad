//! Shared Dioxus components and D3.js bridge for the heatmap calendar.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js matrix renderer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (container, header, toggle, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
