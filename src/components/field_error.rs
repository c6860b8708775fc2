use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<&'static str>,
}

/// Inline validation message under a form field
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match props.message {
        Some(message) => html! { <div class="field-error">{ message }</div> },
        None => html! {},
    }
}
