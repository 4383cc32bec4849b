use crate::components::{audio_manager, carousel, navigation};
use crate::config::SiteConfig;
use crate::diagnostics::{log_info, Console};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

fn start() {
    let sink = Console;
    let config = Rc::new(SiteConfig::load(&sink));

    navigation::setup_burger_menu(&config);

    let player = audio_manager::initialize_audio_player(&config);
    if player.is_none() {
        log_info(&sink, "audio", "no audio element available; playback disabled");
    }
    audio_manager::setup_episode_buttons(player.clone(), config.clone());

    carousel::setup_carousel(config, player);
}

/// Run `start` once the document has been parsed.
pub fn boot() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    if doc.ready_state() != "loading" {
        start();
        return;
    }

    let ready_cb = Closure::once(start);
    let _ = doc
        .add_event_listener_with_callback("DOMContentLoaded", ready_cb.as_ref().unchecked_ref());
    ready_cb.forget();
}
