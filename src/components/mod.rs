//! The components module contains the page features wired up on load.

pub mod audio_manager;
pub mod carousel;
pub mod navigation;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::boot;
