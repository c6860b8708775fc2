use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

mod login_view;
mod signup_view;

pub use login_view::*;
pub use signup_view::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AuthMode {
    Login,
    Signup,
}

/// `?mode=login|signup` on `/authorization`
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AuthQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl AuthQuery {
    pub fn login() -> Self {
        Self { mode: Some("login".to_string()) }
    }

    pub fn signup() -> Self {
        Self { mode: Some("signup".to_string()) }
    }

    /// Missing mode means login; anything else but "login" shows signup
    pub fn auth_mode(&self) -> AuthMode {
        match self.mode.as_deref() {
            None | Some("login") => AuthMode::Login,
            Some(_) => AuthMode::Signup,
        }
    }
}

#[function_component(AuthorizationView)]
pub fn authorization_view() -> Html {
    let location = use_location();
    let mode = location
        .and_then(|l| l.query::<AuthQuery>().ok())
        .unwrap_or_default()
        .auth_mode();

    html! {
        <div class="auth-screen">
            {
                match mode {
                    AuthMode::Login => html! {
                        <>
                            <LoginView />
                            <Link<Route, AuthQuery> to={Route::Authorization} query={Some(AuthQuery::signup())} classes="auth-switch">
                                {"Don't have an account? Sign up"}
                            </Link<Route, AuthQuery>>
                        </>
                    },
                    AuthMode::Signup => html! {
                        <>
                            <SignupView />
                            <Link<Route, AuthQuery> to={Route::Authorization} query={Some(AuthQuery::login())} classes="auth-switch">
                                {"Already have an account? Sign in"}
                            </Link<Route, AuthQuery>>
                        </>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_login() {
        assert_eq!(AuthQuery::default().auth_mode(), AuthMode::Login);
        assert_eq!(AuthQuery::login().auth_mode(), AuthMode::Login);
        assert_eq!(AuthQuery::signup().auth_mode(), AuthMode::Signup);
        assert_eq!(AuthQuery { mode: Some("other".into()) }.auth_mode(), AuthMode::Signup);
    }
}
