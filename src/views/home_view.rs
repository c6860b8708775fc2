use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::utils::constants::LOGO_SRC;
use crate::views::auth::AuthQuery;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    // Logo scales in once mounted
    let logo_loaded = use_state(|| false);
    {
        let logo_loaded = logo_loaded.clone();
        use_effect_with((), move |_| {
            logo_loaded.set(true);
            || ()
        });
    }

    html! {
        <div class="home-screen">
            <div class="home-logo">
                <img
                    src={LOGO_SRC}
                    alt="Quick Aid Logo"
                    class={classes!("home-logo-img", if *logo_loaded { "scale-in" } else { "scale-out" })}
                />
            </div>
            <div class="home-actions">
                <Link<Route, AuthQuery> to={Route::Authorization} query={Some(AuthQuery::login())} classes="btn btn-primary">
                    {"Sign In"}
                </Link<Route, AuthQuery>>
                <Link<Route, AuthQuery> to={Route::Authorization} query={Some(AuthQuery::signup())} classes="btn btn-outline">
                    {"New User? Join Now"}
                </Link<Route, AuthQuery>>
            </div>
        </div>
    }
}
