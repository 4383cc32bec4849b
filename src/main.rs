#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod components;
mod config;
mod db;
mod diagnostics;
mod error;

#[cfg(target_arch = "wasm32")]
fn main() {
    components::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("castdeck runs in the browser; build it for wasm32-unknown-unknown and load it from the site pages.");
}
