//! "Recent episodes" strip: filled from `episodes.html`, paged by two arrows.

use crate::config::SiteConfig;
use crate::diagnostics::{log_error, LogSink};
use crate::error::SiteError;

/// First `limit` items in document order.
pub fn recent<T>(items: impl IntoIterator<Item = T>, limit: usize) -> Vec<T> {
    items.into_iter().take(limit).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Horizontal scroll delta for one page of a container `width` pixels wide.
    pub fn offset(self, width: f64) -> f64 {
        match self {
            ScrollDirection::Left => -width,
            ScrollDirection::Right => width,
        }
    }
}

/// The scroll container, seen as something that can take parsed episode items.
pub trait EpisodeShelf {
    type Item;

    fn parse_items(&self, markup: &str, selector: &str) -> Result<Vec<Self::Item>, SiteError>;

    /// Drop whatever the container holds and append copies of `items`.
    fn replace_with(&self, items: Vec<Self::Item>) -> Result<(), SiteError>;
}

/// Apply the outcome of the fragment fetch to `shelf`.
///
/// On failure the container keeps its current content and one error line is
/// logged. Returns the number of items shown.
pub fn show_fragment<S: EpisodeShelf>(
    shelf: &S,
    fetched: Result<String, SiteError>,
    config: &SiteConfig,
    sink: &dyn LogSink,
) -> Option<usize> {
    let outcome = fetched.and_then(|markup| {
        let items = shelf.parse_items(&markup, &config.episode_item_selector)?;
        let items = recent(items, config.recent_limit);
        let shown = items.len();
        shelf.replace_with(items)?;
        Ok(shown)
    });

    match outcome {
        Ok(shown) => Some(shown),
        Err(err) => {
            log_error(sink, "carousel", &format!("Error loading episodes: {err}"));
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::setup_carousel;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{show_fragment, EpisodeShelf, ScrollDirection};
    use crate::components::audio_manager::{handle_primary_click, PlayerHandle};
    use crate::config::SiteConfig;
    use crate::diagnostics::{log_error, log_info, Console};
    use crate::error::SiteError;
    use gloo_net::http::Request;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{
        window, DomParser, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions,
        SupportedType,
    };

    struct DomShelf {
        container: Element,
    }

    impl EpisodeShelf for DomShelf {
        type Item = Node;

        fn parse_items(&self, markup: &str, selector: &str) -> Result<Vec<Node>, SiteError> {
            let parser = DomParser::new()?;
            let doc = parser
                .parse_from_string(markup, SupportedType::TextHtml)
                .map_err(|err| SiteError::Markup(SiteError::from(err).to_string()))?;
            let list = doc.query_selector_all(selector)?;
            Ok((0..list.length()).filter_map(|idx| list.item(idx)).collect())
        }

        fn replace_with(&self, items: Vec<Node>) -> Result<(), SiteError> {
            let clones = items
                .iter()
                .map(|item| item.clone_node_with_deep(true))
                .collect::<Result<Vec<_>, _>>()?;
            self.container.set_inner_html("");
            for clone in clones {
                self.container.append_child(&clone)?;
            }
            Ok(())
        }
    }

    async fn fetch_fragment(url: &str) -> Result<String, SiteError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| SiteError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(SiteError::FetchStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response
            .text()
            .await
            .map_err(|err| SiteError::Network(err.to_string()))
    }

    fn bind_arrow(selector: &str, container: &Element, direction: ScrollDirection, width: f64) {
        let Some(arrow) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(selector).ok().flatten())
        else {
            return;
        };

        let container = container.clone();
        let click_cb = Closure::wrap(Box::new(move || {
            let options = ScrollToOptions::new();
            options.set_left(direction.offset(width));
            options.set_behavior(ScrollBehavior::Smooth);
            container.scroll_by_with_scroll_to_options(&options);
        }) as Box<dyn FnMut()>);
        let _ = arrow.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
        click_cb.forget();
    }

    /// Wire the arrows, delegated play buttons and the one fragment fetch.
    pub fn setup_carousel(config: Rc<SiteConfig>, player: Option<PlayerHandle>) {
        let sink = Console;
        let container = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&config.scroll_container_selector).ok().flatten());
        let Some(container) = container else {
            let err = SiteError::MissingElement(config.scroll_container_selector.clone());
            log_error(&sink, "carousel", &err.to_string());
            return;
        };

        // Paging distance is fixed at setup, like the markup's initial layout.
        let width = container
            .dyn_ref::<HtmlElement>()
            .map(|el| el.offset_width())
            .unwrap_or(0) as f64;
        bind_arrow(&config.left_arrow_selector, &container, ScrollDirection::Left, width);
        bind_arrow(&config.right_arrow_selector, &container, ScrollDirection::Right, width);

        // Delegated on the container so injected clones are covered too.
        {
            let config = config.clone();
            let click_cb = Closure::wrap(Box::new(move |event: Event| {
                handle_primary_click(player.as_ref(), &config, &event);
            }) as Box<dyn FnMut(Event)>);
            let _ = container
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
            click_cb.forget();
        }

        let shelf = DomShelf { container };
        wasm_bindgen_futures::spawn_local(async move {
            let fetched = fetch_fragment(&config.episodes_url).await;
            if let Some(shown) = show_fragment(&shelf, fetched, &config, &sink) {
                log_info(&sink, "carousel", &format!("showing {shown} recent episodes"));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::diagnostics::Level;
    use std::cell::RefCell;

    /// Container fake: items are the lines of the markup containing the selector.
    struct FakeShelf {
        children: RefCell<Vec<String>>,
    }

    impl FakeShelf {
        fn with(children: &[&str]) -> Self {
            Self {
                children: RefCell::new(children.iter().map(|c| c.to_string()).collect()),
            }
        }
    }

    impl EpisodeShelf for FakeShelf {
        type Item = String;

        fn parse_items(&self, markup: &str, selector: &str) -> Result<Vec<String>, SiteError> {
            let marker = selector.trim_start_matches('.');
            Ok(markup
                .lines()
                .map(str::trim)
                .filter(|line| line.contains(marker))
                .map(str::to_string)
                .collect())
        }

        fn replace_with(&self, items: Vec<String>) -> Result<(), SiteError> {
            *self.children.borrow_mut() = items;
            Ok(())
        }
    }

    fn fragment(count: usize) -> String {
        (1..=count)
            .map(|n| format!(r#"<div class="episode-item" id="ep{n}"></div>"#))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_at_most_three_in_document_order() {
        let config = SiteConfig::default();
        let sink = RecordingSink::default();

        for count in [0, 1, 3, 5] {
            let shelf = FakeShelf::with(&["placeholder"]);
            let shown = show_fragment(&shelf, Ok(fragment(count)), &config, &sink);
            assert_eq!(shown, Some(count.min(3)));

            let children = shelf.children.borrow();
            assert_eq!(children.len(), count.min(3));
            assert!(!children.iter().any(|c| c == "placeholder"));
            for (idx, child) in children.iter().enumerate() {
                assert!(child.contains(&format!("id=\"ep{}\"", idx + 1)));
            }
        }
        assert_eq!(sink.count(Level::Error), 0);
    }

    #[test]
    fn fetch_failure_leaves_container_and_logs_once() {
        let config = SiteConfig::default();
        let sink = RecordingSink::default();
        let shelf = FakeShelf::with(&["<p>Loading…</p>"]);

        let failed = Err(SiteError::FetchStatus {
            url: "episodes.html".to_string(),
            status: 404,
        });
        assert_eq!(show_fragment(&shelf, failed, &config, &sink), None);

        assert_eq!(*shelf.children.borrow(), vec!["<p>Loading…</p>".to_string()]);
        assert_eq!(sink.count(Level::Error), 1);
        assert!(sink.lines.borrow()[0].1.contains("HTTP 404"));
    }

    #[test]
    fn limit_follows_config() {
        let config = SiteConfig {
            recent_limit: 1,
            ..SiteConfig::default()
        };
        let shelf = FakeShelf::with(&[]);
        let shown = show_fragment(&shelf, Ok(fragment(4)), &config, &RecordingSink::default());
        assert_eq!(shown, Some(1));
    }

    #[test]
    fn arrows_page_by_container_width() {
        assert_eq!(ScrollDirection::Left.offset(320.0), -320.0);
        assert_eq!(ScrollDirection::Right.offset(320.0), 320.0);
    }
}
