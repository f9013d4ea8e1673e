//! Surfaces the signup page can be drawn on.

#[cfg(feature = "no-wasm")]
pub mod terminal;

#[cfg(feature = "wasm")]
pub mod dom;
