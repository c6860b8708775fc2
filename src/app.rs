//! Root component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::ThemeProvider;
use crate::views::{AuthorizationView, DashboardView, HomeView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/authorization")]
    Authorization,
    #[at("/app-home")]
    AppHome,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Authorization => html! { <AuthorizationView /> },
        Route::AppHome => html! { <DashboardView /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backend_links() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Authorization.to_path(), "/authorization");
        assert_eq!(Route::AppHome.to_path(), "/app-home");
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::recognize("/app-home"), Some(Route::AppHome));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
