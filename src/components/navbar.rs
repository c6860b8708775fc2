use yew::prelude::*;

use crate::context::use_theme;
use crate::utils::constants::NAV_LOGO_SRC;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme_ctx = use_theme();
    let theme = theme_ctx.theme;

    let (toggle_icon, toggle_label) = if theme.is_dark() {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <nav class={theme.nav_class()}>
            <div class="navbar-inner">
                <img src={NAV_LOGO_SRC} alt="QuickAid" class="navbar-logo" />
                <div class="navbar-actions">
                    <button
                        type="button"
                        class="theme-toggle"
                        title={toggle_label}
                        aria-label={toggle_label}
                        onclick={theme_ctx.toggle.reform(|_| ())}
                    >
                        { toggle_icon }
                    </button>
                    <span class="navbar-user" aria-hidden="true">{"👤"}</span>
                </div>
            </div>
        </nav>
    }
}
