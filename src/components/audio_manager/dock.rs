// Fixed bottom dock holding the shared audio element and its file name label.
use super::MediaElement;
use crate::config::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement, HtmlElement};

const DOCK_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("z-index", "1000"),
    ("text-align", "center"),
    ("padding", "10px 0"),
    ("background-color", "var(--dark-blue)"),
];
const LABEL_STYLE: &[(&str, &str)] = &[("font-size", "16px"), ("margin-bottom", "5px")];
const SLIDER_STYLE: &[(&str, &str)] = &[("margin-top", "5px"), ("height", "30px")];

fn apply_style(element: &HtmlElement, rules: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in rules {
        let _ = style.set_property(name, value);
    }
}

fn create_div(document: &web_sys::Document, rules: &[(&str, &str)]) -> Option<HtmlElement> {
    let div: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    apply_style(&div, rules);
    Some(div)
}

/// Reuse the page's audio element, or build the dock around a new one.
pub fn get_or_create_audio_element(config: &SiteConfig) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(&config.audio_element_id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(&config.audio_element_id);
    audio.set_controls(true);
    apply_style(&audio, &[("width", "100%")]);

    let dock = create_div(&document, DOCK_STYLE)?;
    let label = create_div(&document, LABEL_STYLE)?;
    label.set_id(&config.file_name_element_id);
    label.set_text_content(Some(&config.idle_label));
    let slider = create_div(&document, SLIDER_STYLE)?;

    slider.append_child(&audio).ok()?;
    dock.append_child(&label).ok()?;
    dock.append_child(&slider).ok()?;
    document.body()?.append_child(&dock).ok()?;

    Some(audio)
}

/// `MediaElement` over the browser element. The label is looked up by id on
/// each update since host markup may provide the element without one.
pub struct WebPlayer {
    audio: HtmlAudioElement,
    label_id: String,
}

impl WebPlayer {
    pub fn new(audio: HtmlAudioElement, label_id: String) -> Self {
        Self { audio, label_id }
    }
}

impl MediaElement for WebPlayer {
    fn src(&self) -> String {
        self.audio.src()
    }

    fn set_src(&self, src: &str) {
        self.audio.set_src(src);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn play(&self) {
        if let Ok(promise) = self.audio.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    fn set_label(&self, text: &str) {
        if let Some(label) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&self.label_id))
        {
            label.set_text_content(Some(text));
        }
    }
}
