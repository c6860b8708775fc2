use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{FieldError, IdProofDropzone};
use crate::hooks::use_auth;
use crate::models::Location;
use crate::utils::constants::{LOGO_SRC, PHONE_COUNTRY_PREFIX};
use crate::utils::geolocation::current_location;
use crate::utils::validation::{FormErrors, FormField, SignupForm};

/// One edit to the signup form
pub enum SignupEdit {
    Name(String),
    Phone(String),
    Password(String),
    Skills(String),
    Address(String),
    IdProof(String),
    Located(Location),
}

impl Reducible for SignupForm {
    type Action = SignupEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SignupEdit::Name(v) => next.name = v,
            SignupEdit::Phone(v) => next.phone = v,
            SignupEdit::Password(v) => next.password = v,
            SignupEdit::Skills(v) => next.skills_input = v,
            SignupEdit::Address(v) => next.address = v,
            SignupEdit::IdProof(v) => next.id_proof = v,
            SignupEdit::Located(location) => next.location = location,
        }
        Rc::new(next)
    }
}

fn text_input(form: &UseReducerHandle<SignupForm>, edit: fn(String) -> SignupEdit) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatcher.dispatch(edit(input.value()));
    })
}

#[function_component(SignupView)]
pub fn signup_view() -> Html {
    let auth = use_auth();
    let form = use_reducer(SignupForm::default);
    let errors = use_state(FormErrors::default);
    // Re-validate on every change once the user has tried to submit
    let attempted = use_state(|| false);

    {
        let errors = errors.clone();
        let attempted = *attempted;
        use_effect_with(((*form).clone(), attempted), move |(form, attempted)| {
            if *attempted {
                errors.set(form.validate());
            }
            || ()
        });
    }

    let on_name = text_input(&form, SignupEdit::Name);
    let on_phone = text_input(&form, SignupEdit::Phone);
    let on_password = text_input(&form, SignupEdit::Password);
    let on_skills = text_input(&form, SignupEdit::Skills);
    let on_address = text_input(&form, SignupEdit::Address);

    let on_uploaded = {
        let dispatcher = form.dispatcher();
        Callback::from(move |url: String| dispatcher.dispatch(SignupEdit::IdProof(url)))
    };

    let on_locate = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match current_location().await {
                    Ok(location) => {
                        log::info!("📍 Location captured");
                        dispatcher.dispatch(SignupEdit::Located(location));
                    }
                    Err(e) => log::error!("❌ Error getting location: {}", e),
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        let signup = auth.signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            attempted.set(true);

            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if valid {
                signup.emit((*form).clone());
            }
        })
    };

    html! {
        <div class="form-card">
            <div class="form-header">
                <img src={LOGO_SRC} alt="QuickAid Logo" class="form-logo" />
                <h2>{"Create Your Account"}</h2>
            </div>

            <form class="auth-form" onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Enter your full name"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <FieldError message={errors.get(FormField::Name)} />
                </div>

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
                            value={form.phone.clone()}
                            oninput={on_phone}
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
                        placeholder="Create a password"
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                    <FieldError message={errors.get(FormField::Password)} />
                </div>

                <div class="form-group">
                    <label for="skills">{"Skills"}</label>
                    <input
                        type="text"
                        id="skills"
                        name="skills"
                        placeholder="Enter skills (comma-separated)"
                        value={form.skills_input.clone()}
                        oninput={on_skills}
                    />
                    <FieldError message={errors.get(FormField::Skills)} />
                </div>

                <div class="form-group">
                    <label>{"ID Proof"}</label>
                    <IdProofDropzone uploaded={!form.id_proof.is_empty()} {on_uploaded} />
                    <FieldError message={errors.get(FormField::IdProof)} />
                </div>

                <div class="form-group">
                    <label for="address">{"Address"}</label>
                    <input
                        type="text"
                        id="address"
                        name="address"
                        placeholder="Enter your address"
                        value={form.display_address()}
                        readonly={form.address_locked()}
                        oninput={on_address}
                    />
                    <FieldError message={errors.get(FormField::Latitude).or(errors.get(FormField::Longitude))} />
                </div>

                if let Some(error) = auth.error.clone() {
                    <div class="form-error">{ error }</div>
                }

                <button type="button" class="btn btn-outline btn-block" onclick={on_locate}>
                    {"Get Current Location"}
                </button>

                <button type="submit" class="btn btn-primary btn-block" disabled={auth.submitting}>
                    { if auth.submitting { "Signing up..." } else { "Sign Up" } }
                </button>
            </form>
        </div>
    }
}
