// Web controller: build the manager, restore the session, and wire listeners.
use super::dock::{get_or_create_audio_element, WebPlayer};
use super::{resolve_primary_click, AudioManager, ClickTarget, PrimaryClick};
use crate::config::SiteConfig;
use crate::db::{open_store, AnyStore};
use crate::diagnostics::Console;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, Event, EventTarget};

/// Shared handle to the single audio manager, passed to every feature that
/// can start playback.
pub type PlayerHandle = Rc<AudioManager<WebPlayer, AnyStore, Console>>;

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}

pub fn initialize_audio_player(config: &SiteConfig) -> Option<PlayerHandle> {
    let audio = get_or_create_audio_element(config)?;
    let player = WebPlayer::new(audio.clone(), config.file_name_element_id.clone());
    let manager = Rc::new(AudioManager::new(player, open_store(), config, Console));

    manager.restore();

    let handle = manager.clone();
    listen(&audio, "timeupdate", move || handle.on_time_update());
    let handle = manager.clone();
    listen(&audio, "play", move || handle.on_play());
    if let Some(win) = window() {
        let handle = manager.clone();
        listen(&win, "beforeunload", move || handle.on_unload());
    }

    Some(manager)
}

impl ClickTarget for Element {
    fn closest_match(&self, selector: &str) -> Option<Self> {
        Element::closest(self, selector).ok().flatten()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Route a click on (or inside) a primary button to the player. The link is
/// suppressed even when no player could be set up.
pub fn handle_primary_click(player: Option<&PlayerHandle>, config: &SiteConfig, event: &Event) {
    let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
    if let PrimaryClick::Intercept(source) =
        resolve_primary_click(event.default_prevented(), target, config)
    {
        event.prevent_default();
        if let (Some(player), Some(source)) = (player, source) {
            player.play_from_trigger(&source);
        }
    }
}

/// Primary buttons anywhere on the page. Clicks the carousel already handled
/// arrive here with their default prevented and are skipped.
pub fn setup_episode_buttons(player: Option<PlayerHandle>, config: Rc<SiteConfig>) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let click_cb = Closure::wrap(Box::new(move |event: Event| {
        handle_primary_click(player.as_ref(), &config, &event);
    }) as Box<dyn FnMut(Event)>);
    let _ = doc.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
    click_cb.forget();
}
