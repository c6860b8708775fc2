use yew::prelude::*;

use crate::context::use_theme;
use crate::models::SosAlert;

#[derive(Properties, PartialEq, Clone)]
pub struct AlertCardProps {
    pub alert: SosAlert,
    pub on_accept: Callback<SosAlert>,
}

/// Pending SOS with its accept button
#[function_component(AlertCard)]
pub fn alert_card(props: &AlertCardProps) -> Html {
    let theme = use_theme().theme;
    let alert = &props.alert;

    let on_accept = {
        let alert = alert.clone();
        props.on_accept.reform(move |_: MouseEvent| alert.clone())
    };

    html! {
        <div class={classes!(theme.card_class(), "alert-card")}>
            <div class="alert-card-header">
                <h3 class="alert-type">{ &alert.sos_type }</h3>
                <p class="alert-time">{ alert.received_label() }</p>
                if let Some(gap) = alert.time_gap_label() {
                    <p class="alert-time">{ gap }</p>
                }
            </div>
            <div class="alert-card-body">
                <p><span class="label">{"Name:"}</span>{" "}{ &alert.name }</p>
                <p><span class="label">{"Address:"}</span>{" "}{ &alert.address }</p>
            </div>
            <button
                type="button"
                class={classes!(theme.primary_button_class(), "btn-block")}
                onclick={on_accept}
            >
                {"Accept Emergency"}
            </button>
        </div>
    }
}
