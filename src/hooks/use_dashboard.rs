// ============================================================================
// USE DASHBOARD - status check, alert feed, accept/complete
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::{SosAlert, SosSearchResponse, StatusResponse};
use crate::services::{AlertFeed, ApiClient, ApiError};
use crate::stores::{logout, DashboardAction, DashboardStore, SessionStore};
use crate::utils::show_alert;

pub const ACCEPT_FAILED_MESSAGE: &str = "Failed to accept SOS. Try again.";
pub const COMPLETE_FAILED_MESSAGE: &str = "Failed to mark as complete. Try again.";

pub struct UseDashboardHandle {
    pub store: UseReducerHandle<DashboardStore>,
    pub accept: Callback<SosAlert>,
    pub complete: Callback<String>,
    pub logout: Callback<()>,
}

/// Holds the feed opened by one status check; closed on unmount or reload
#[derive(Default)]
struct FeedSlot {
    closed: Cell<bool>,
    feed: RefCell<Option<AlertFeed>>,
}

impl FeedSlot {
    fn attach(&self, feed: AlertFeed) {
        if self.is_closed() {
            return;
        }
        *self.feed.borrow_mut() = Some(feed);
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }

    fn close(&self) {
        self.closed.set(true);
        self.feed.borrow_mut().take();
    }
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let store = use_reducer(DashboardStore::default);
    // Bumped to re-run the status check instead of reloading the page
    let generation = use_state(|| 0u32);
    let navigator = use_navigator();

    {
        let dispatcher = store.dispatcher();
        let navigator = navigator.clone();
        use_effect_with(*generation, move |_| {
            let slot = Rc::new(FeedSlot::default());

            match SessionStore::load() {
                Some(credentials) => {
                    wasm_bindgen_futures::spawn_local(check_status(
                        credentials.volunteer_id,
                        dispatcher,
                        navigator,
                        slot.clone(),
                    ));
                }
                None => {
                    log::warn!("⚠️ No session, back to home");
                    if let Some(nav) = navigator {
                        nav.push(&Route::Home);
                    }
                }
            }

            move || slot.close()
        });
    }

    let reload = {
        let dispatcher = store.dispatcher();
        let generation = generation.clone();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(DashboardAction::Reload);
            generation.set(generation.wrapping_add(1));
        })
    };

    let accept = {
        let reload = reload.clone();
        let navigator = navigator.clone();
        Callback::from(move |alert: SosAlert| {
            let Some(credentials) = SessionStore::load() else {
                if let Some(nav) = &navigator {
                    nav.push(&Route::Home);
                }
                return;
            };
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().accept_sos(&alert.sos_id, &credentials.volunteer_id).await {
                    Ok(()) => {
                        log::info!("✅ SOS {} accepted", alert.sos_id);
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Accept failed: {}", e);
                        show_alert(ACCEPT_FAILED_MESSAGE);
                    }
                }
            });
        })
    };

    let complete = Callback::from(move |sos_id: String| {
        let reload = reload.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::new().complete_sos(&sos_id).await {
                Ok(()) => {
                    log::info!("✅ SOS {} completed", sos_id);
                    reload.emit(());
                }
                Err(e) => {
                    log::error!("❌ Complete failed: {}", e);
                    show_alert(COMPLETE_FAILED_MESSAGE);
                }
            }
        });
    });

    UseDashboardHandle {
        store,
        accept,
        complete,
        logout: Callback::from(|_| logout()),
    }
}

/// Next move once the volunteer status is known
#[derive(Debug, PartialEq)]
pub(crate) enum StatusStep {
    /// Volunteer holds an SOS; look it up
    SearchAssignment,
    /// Idle volunteer; subscribe to live alerts
    OpenFeed,
    BailHome,
}

pub(crate) fn after_status(status: Result<StatusResponse, ApiError>) -> StatusStep {
    match status {
        Ok(status) if status.is_active() => StatusStep::SearchAssignment,
        Ok(_) => StatusStep::OpenFeed,
        Err(e) => {
            log::error!("❌ Status check failed: {}", e);
            StatusStep::BailHome
        }
    }
}

/// `None` means the lookup failed and the volunteer goes back home
pub(crate) fn after_search(
    found: Result<SosSearchResponse, ApiError>,
    now: DateTime<Utc>,
) -> Option<DashboardAction> {
    match found {
        Ok(found) => Some(match found.into_assignment(now) {
            Some(assignment) => {
                log::info!("📍 Active assignment {}", assignment.alert.sos_id);
                DashboardAction::AssignmentFound(assignment)
            }
            None => DashboardAction::NoAssignment,
        }),
        Err(e) => {
            log::error!("❌ SOS search failed: {}", e);
            None
        }
    }
}

async fn check_status(
    volunteer_id: String,
    dispatcher: UseReducerDispatcher<DashboardStore>,
    navigator: Option<Navigator>,
    slot: Rc<FeedSlot>,
) {
    let client = ApiClient::new();

    match after_status(client.volunteer_status(&volunteer_id).await) {
        StatusStep::BailHome => bail_home(&dispatcher, navigator),
        StatusStep::SearchAssignment => {
            match after_search(client.search_sos(&volunteer_id).await, Utc::now()) {
                Some(action) => dispatcher.dispatch(action),
                None => bail_home(&dispatcher, navigator),
            }
        }
        StatusStep::OpenFeed => {
            if slot.is_closed() {
                return;
            }
            let on_alert = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |alert: SosAlert| {
                    dispatcher.dispatch(DashboardAction::AlertReceived(alert))
                })
            };
            slot.attach(AlertFeed::connect(volunteer_id, on_alert));
            dispatcher.dispatch(DashboardAction::NoAssignment);
        }
    }
}

fn bail_home(dispatcher: &UseReducerDispatcher<DashboardStore>, navigator: Option<Navigator>) {
    dispatcher.dispatch(DashboardAction::StatusFailed);
    if let Some(nav) = navigator {
        nav.push(&Route::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn status(json: &str) -> Result<StatusResponse, ApiError> {
        Ok(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn active_volunteer_searches_for_assignment() {
        assert_eq!(
            after_status(status(r#"{"success":true,"volunteerStatus":"active"}"#)),
            StatusStep::SearchAssignment
        );
    }

    #[test]
    fn idle_volunteer_opens_feed() {
        assert_eq!(
            after_status(status(r#"{"success":true,"volunteerStatus":"inactive"}"#)),
            StatusStep::OpenFeed
        );
        assert_eq!(after_status(status(r#"{"success":false}"#)), StatusStep::OpenFeed);
    }

    #[test]
    fn status_failure_goes_home() {
        let err = ApiError::Network("offline".into());
        assert_eq!(after_status(Err(err)), StatusStep::BailHome);
    }

    #[test]
    fn search_with_data_shows_assignment() {
        let found: SosSearchResponse = serde_json::from_str(
            r#"{"success":true,"data":{"sosId":"s1","address":"Park St","type":"Fire","name":"Asha","phone":"9876543210"}}"#,
        )
        .unwrap();

        match after_search(Ok(found), now()) {
            Some(DashboardAction::AssignmentFound(assignment)) => {
                assert_eq!(assignment.alert.sos_id, "s1");
                assert_eq!(assignment.victim_phone, "9876543210");
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn search_without_data_shows_empty_state() {
        let found: SosSearchResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(after_search(Ok(found), now()), Some(DashboardAction::NoAssignment)));
    }

    #[test]
    fn search_failure_goes_home() {
        let err = ApiError::Http { status: 500, message: None };
        assert!(after_search(Err(err), now()).is_none());
    }

    #[test]
    fn feed_attached_after_close_is_dropped() {
        let (feed, mut stopped) = AlertFeed::detached();
        let slot = FeedSlot::default();
        slot.close();
        slot.attach(feed);

        assert!(slot.feed.borrow().is_none());
        assert_eq!(stopped.try_recv(), Ok(Some(())));
    }

    #[test]
    fn closing_slot_stops_attached_feed() {
        let (feed, mut stopped) = AlertFeed::detached();
        let slot = FeedSlot::default();
        slot.attach(feed);
        assert_eq!(stopped.try_recv(), Ok(None));

        slot.close();
        assert!(slot.is_closed());
        assert_eq!(stopped.try_recv(), Ok(Some(())));
    }
}
