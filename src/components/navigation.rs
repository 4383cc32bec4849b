// Burger menu: show/hide the nav links and lock page scroll while open.

/// Body overflow while the menu covers the page.
pub const OVERFLOW_LOCKED: &str = "hidden";
/// Body overflow once the menu is closed again.
pub const OVERFLOW_UNLOCKED: &str = "auto";

pub fn overflow_for(menu_visible: bool) -> &'static str {
    if menu_visible {
        OVERFLOW_LOCKED
    } else {
        OVERFLOW_UNLOCKED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    visible: bool,
}

impl MenuToggle {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the body overflow to apply.
    pub fn toggle(&mut self) -> &'static str {
        self.visible = !self.visible;
        overflow_for(self.visible)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn setup_burger_menu(config: &crate::config::SiteConfig) {
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::window;

    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let burger = doc.query_selector(&config.burger_selector).ok().flatten();
    let menu = doc.query_selector(&config.menu_selector).ok().flatten();
    let (Some(burger), Some(menu)) = (burger, menu) else {
        return;
    };

    let visible_class = config.menu_visible_class.clone();
    let click_cb = Closure::wrap(Box::new(move || {
        let classes = menu.class_list();
        let mut state = MenuToggle::new(classes.contains(&visible_class));
        let overflow = state.toggle();
        let _ = classes.toggle_with_force(&visible_class, state.is_visible());
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow);
        }
    }) as Box<dyn FnMut()>);
    let _ = burger.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
    click_cb.forget();
}
