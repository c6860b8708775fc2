use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::utils::constants::STORAGE_KEY_THEME;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    // Class sets used by the dashboard

    pub fn page_class(&self) -> &'static str {
        if self.is_dark() { "page page-dark" } else { "page page-light" }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.is_dark() { "navbar navbar-dark" } else { "navbar navbar-light" }
    }

    pub fn card_class(&self) -> &'static str {
        if self.is_dark() { "card card-dark" } else { "card card-light" }
    }

    pub fn heading_class(&self) -> &'static str {
        if self.is_dark() { "dashboard-title title-dark" } else { "dashboard-title title-light" }
    }

    pub fn primary_button_class(&self) -> &'static str {
        if self.is_dark() { "btn btn-danger btn-danger-dark" } else { "btn btn-danger" }
    }

    pub fn icon_button_class(&self) -> &'static str {
        if self.is_dark() { "icon-btn icon-btn-dark" } else { "icon-btn icon-btn-light" }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ThemeProvider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(load_theme);

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            save_theme(next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Current theme, falling back to light outside a provider
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}

fn load_theme() -> Theme {
    LocalStorage::get::<String>(STORAGE_KEY_THEME)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY_THEME, theme.as_str()) {
        log::warn!("⚠️ Could not save theme: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str("anything"), Theme::Light);
    }

    #[test]
    fn dark_classes_differ() {
        assert_ne!(Theme::Light.card_class(), Theme::Dark.card_class());
        assert!(Theme::Dark.page_class().contains("page-dark"));
    }
}
