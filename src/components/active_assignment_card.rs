use yew::prelude::*;

use crate::context::use_theme;
use crate::models::ActiveAssignment;

#[derive(Properties, PartialEq, Clone)]
pub struct ActiveAssignmentCardProps {
    pub assignment: ActiveAssignment,
    pub on_complete: Callback<String>,
}

#[function_component(ActiveAssignmentCard)]
pub fn active_assignment_card(props: &ActiveAssignmentCardProps) -> Html {
    let theme = use_theme().theme;
    let assignment = &props.assignment;
    let alert = &assignment.alert;

    let on_complete = {
        let sos_id = alert.sos_id.clone();
        props.on_complete.reform(move |_: MouseEvent| sos_id.clone())
    };

    html! {
        <div class="active-wrapper">
            <div class={classes!(theme.card_class(), "active-card")}>
                <div class="active-card-header">
                    <h2>{"Active Emergency"}</h2>
                    <span class="badge badge-active">{"Active"}</span>
                </div>

                <div class="active-card-body">
                    <div class="row">
                        <span class="label">{"Type:"}</span>
                        <span>{ &alert.sos_type }</span>
                    </div>
                    <div class="row">
                        <span class="label">{"Name:"}</span>
                        <span>{ &alert.name }</span>
                    </div>
                    <div class="row">
                        <span class="label">{"Address:"}</span>
                        <span>{ &alert.address }</span>
                    </div>
                </div>

                <div class="active-card-actions">
                    <div class="contact-links">
                        <a href={assignment.tel_href()} class={theme.icon_button_class()} title="Call">{"📞"}</a>
                        <a href={assignment.sms_href()} class={theme.icon_button_class()} title="SMS">{"💬"}</a>
                        if let Some(maps) = assignment.maps_href() {
                            <a
                                href={maps}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={theme.icon_button_class()}
                                title="Open in Maps"
                            >
                                {"📍"}
                            </a>
                        }
                    </div>
                    <button type="button" class={theme.primary_button_class()} onclick={on_complete}>
                        {"Complete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
