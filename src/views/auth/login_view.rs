use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::FieldError;
use crate::hooks::use_auth;
use crate::utils::constants::{LOGO_SRC, PHONE_COUNTRY_PREFIX};
use crate::utils::validation::{FormErrors, FormField, LoginForm};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let errors = use_state(FormErrors::default);

    let on_submit = {
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let errors = errors.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(phone_input), Some(password_input)) = (
                phone_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let form = LoginForm {
                    phone: phone_input.value(),
                    password: password_input.value(),
                };

                let found = form.validate();
                let valid = found.is_empty();
                errors.set(found);
                if valid {
                    login.emit(form);
                }
            }
        })
    };

    html! {
        <div class="form-card">
            <div class="form-header">
                <img src={LOGO_SRC} alt="QuickAid Logo" class="form-logo" />
                <h2>{"Login or Signup"}</h2>
            </div>

            <form class="auth-form" onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    <div class="phone-input">
                        <span class="phone-prefix">{PHONE_COUNTRY_PREFIX}</span>
                        <input
                            type="text"
                            id="phone"
                            name="phone"
                            inputmode="numeric"
                            placeholder="Enter your phone number"
                            ref={phone_ref}
                        />
                    </div>
                    <FieldError message={errors.get(FormField::Phone)} />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Enter your password"
                        ref={password_ref}
                    />
                    <FieldError message={errors.get(FormField::Password)} />
                </div>

                if let Some(error) = auth.error.clone() {
                    <div class="form-error">{ error }</div>
                }

                <button type="submit" class="btn btn-primary btn-block" disabled={auth.submitting}>
                    { if auth.submitting { "Logging in..." } else { "Login" } }
                </button>
            </form>
        </div>
    }
}
