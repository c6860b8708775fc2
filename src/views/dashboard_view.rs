use yew::prelude::*;

use crate::components::{ActiveAssignmentCard, AlertCard, Loading, Navbar};
use crate::context::use_theme;
use crate::hooks::use_dashboard;
use crate::stores::DashboardBody as Body;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let theme = use_theme().theme;
    let dashboard = use_dashboard();

    let body = match dashboard.store.view() {
        Body::Loading => html! { <Loading /> },
        Body::Active(assignment) => html! {
            <ActiveAssignmentCard
                assignment={assignment.clone()}
                on_complete={dashboard.complete.clone()}
            />
        },
        Body::Pending(alerts) => html! {
            <div class="alert-list">
                { for alerts.iter().map(|alert| html! {
                    <AlertCard
                        key={alert.sos_id.clone()}
                        alert={alert.clone()}
                        on_accept={dashboard.accept.clone()}
                    />
                })}
            </div>
        },
        Body::Empty => html! {
            <div class="empty-state">
                <p>{"No emergencies live yet"}</p>
            </div>
        },
    };

    html! {
        <div class={theme.page_class()}>
            <Navbar />
            <main class="dashboard">
                <h1 class={theme.heading_class()}>{"Emergency Dashboard"}</h1>
                { body }
                <button
                    type="button"
                    class={classes!(theme.primary_button_class(), "btn-logout")}
                    onclick={dashboard.logout.reform(|_| ())}
                >
                    {"Logout"}
                </button>
            </main>
        </div>
    }
}
