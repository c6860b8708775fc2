use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::{login_error_message, perform_login, perform_signup, signup_error_message, ApiClient};
use crate::utils::validation::{LoginForm, SignupForm};

pub struct UseAuthHandle {
    pub submitting: bool,
    /// Inline error under the form
    pub error: Option<String>,
    pub login: Callback<LoginForm>,
    pub signup: Callback<SignupForm>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    // Login callback
    let login = {
        let submitting = submitting.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |form: LoginForm| {
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = perform_login(&ApiClient::new(), &form).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::AppHome);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(login_error_message(&e)));
                    }
                }
            });
        })
    };

    // Signup callback
    let signup = {
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |form: SignupForm| {
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = perform_signup(&ApiClient::new(), &form).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::AppHome);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Signup failed: {}", e);
                        error.set(Some(signup_error_message(&e)));
                    }
                }
            });
        })
    };

    UseAuthHandle {
        submitting: *submitting,
        error: (*error).clone(),
        login,
        signup,
    }
}
