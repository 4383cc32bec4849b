//! Persistent audio dock: restores the last session on load and mirrors
//! playback back into storage while the visitor listens.

#[cfg(target_arch = "wasm32")]
mod controller_web;
#[cfg(target_arch = "wasm32")]
mod dock;

#[cfg(target_arch = "wasm32")]
pub use controller_web::{
    handle_primary_click, initialize_audio_player, setup_episode_buttons, PlayerHandle,
};

use crate::config::SiteConfig;
use crate::db::{display_name, qualify, KeyValueStore, SessionState, SessionStore};
use crate::diagnostics::{log_warn, LogSink};
use crate::error::SiteError;

/// The playback surface the manager drives. Playback itself belongs to the
/// browser; this is only what persistence needs to read and set.
pub trait MediaElement {
    fn src(&self) -> String;
    fn set_src(&self, src: &str);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn paused(&self) -> bool;
    /// Start playback. A refusal (autoplay policy) is swallowed.
    fn play(&self);
    /// Text of the file name label next to the element.
    fn set_label(&self, text: &str);
}

/// Source named by a primary button, if it names one.
pub fn trigger_source(attribute: Option<String>) -> Option<String> {
    attribute
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// The slice of the DOM a click needs: walk up to the enclosing primary
/// button and read its source attribute.
pub trait ClickTarget: Sized {
    /// Nearest inclusive ancestor matching `selector`.
    fn closest_match(&self, selector: &str) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryClick {
    /// Not on a primary button, or an inner listener already took the click.
    Ignore,
    /// Suppress the link; play the source when the button names one.
    Intercept(Option<String>),
}

/// Decide what a click does. `already_handled` is the event's
/// `defaultPrevented`, set by the carousel listener before the click
/// bubbles to the document.
pub fn resolve_primary_click<T: ClickTarget>(
    already_handled: bool,
    target: Option<T>,
    config: &SiteConfig,
) -> PrimaryClick {
    if already_handled {
        return PrimaryClick::Ignore;
    }
    match target.and_then(|t| t.closest_match(&config.primary_button_selector)) {
        Some(button) => {
            PrimaryClick::Intercept(trigger_source(button.attribute(&config.source_attribute)))
        }
        None => PrimaryClick::Ignore,
    }
}

pub struct AudioManager<M, S, L> {
    media: M,
    sessions: SessionStore<S>,
    audio_folder: String,
    idle_label: String,
    sink: L,
}

impl<M, S, L> AudioManager<M, S, L>
where
    M: MediaElement,
    S: KeyValueStore,
    L: LogSink,
{
    pub fn new(media: M, store: S, config: &SiteConfig, sink: L) -> Self {
        Self {
            media,
            sessions: SessionStore::new(store, config.storage_keys.clone()),
            audio_folder: config.audio_folder.clone(),
            idle_label: config.idle_label.clone(),
            sink,
        }
    }

    /// Put the element back where the previous page left it.
    pub fn restore(&self) -> SessionState {
        let state = self.sessions.load();
        if let Some(source) = state.source() {
            let path = qualify(source, &self.audio_folder);
            self.media.set_src(&path);
            self.media.set_label(&display_name(&path));
            self.media.set_current_time(state.position());
        }
        if state.is_playing() {
            self.media.play();
        }
        state
    }

    /// A primary button asked for `path`; always starts from the beginning.
    pub fn play_from_trigger(&self, path: &str) {
        self.media.set_src(path);
        self.media.play();
        self.report(self.sessions.save_trigger(path));
    }

    pub fn on_time_update(&self) {
        let src = self.media.src();
        self.report(self.sessions.save_progress(self.media.current_time(), &src));
    }

    pub fn on_play(&self) {
        let src = self.media.src();
        if src.is_empty() {
            self.media.set_label(&self.idle_label);
        } else {
            self.media.set_label(&display_name(&src));
        }
    }

    pub fn on_unload(&self) {
        let src = self.media.src();
        self.report(self.sessions.save_unload(
            self.media.current_time(),
            self.media.paused(),
            &src,
        ));
    }

    fn report(&self, result: Result<(), SiteError>) {
        if let Err(err) = result {
            log_warn(&self.sink, "audio", &err.to_string());
        }
    }

    #[cfg(test)]
    fn media(&self) -> &M {
        &self.media
    }
}
