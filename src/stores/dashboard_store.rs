// ============================================================================
// DASHBOARD STORE - reducer behind the emergency dashboard
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::{ActiveAssignment, SosAlert};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Status check restarted (mount or after accept/complete)
    Reload,
    /// Volunteer already holds this SOS
    AssignmentFound(ActiveAssignment),
    /// Status resolved without an assignment to show
    NoAssignment,
    AlertReceived(SosAlert),
    StatusFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    pub loading: bool,
    pub active: Option<ActiveAssignment>,
    /// Newest first, unique by `sos_id`
    pub pending: Vec<SosAlert>,
}

/// What the dashboard body shows
#[derive(Debug, PartialEq)]
pub enum DashboardBody<'a> {
    Loading,
    Active(&'a ActiveAssignment),
    Pending(&'a [SosAlert]),
    Empty,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self {
            loading: true,
            active: None,
            pending: Vec::new(),
        }
    }
}

impl DashboardStore {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Reload => *self = Self::default(),
            DashboardAction::AssignmentFound(assignment) => {
                self.active = Some(assignment);
                self.pending.clear();
                self.loading = false;
            }
            DashboardAction::NoAssignment | DashboardAction::StatusFailed => {
                self.loading = false;
            }
            DashboardAction::AlertReceived(alert) => {
                if self.active.is_some() {
                    log::debug!("Ignoring alert {} while an assignment is active", alert.sos_id);
                    return;
                }
                if self.pending.iter().any(|a| a.sos_id == alert.sos_id) {
                    log::debug!("Duplicate alert {}", alert.sos_id);
                    return;
                }
                self.pending.insert(0, alert);
            }
        }
    }

    pub fn view(&self) -> DashboardBody<'_> {
        if self.loading {
            DashboardBody::Loading
        } else if let Some(active) = &self.active {
            DashboardBody::Active(active)
        } else if !self.pending.is_empty() {
            DashboardBody::Pending(&self.pending)
        } else {
            DashboardBody::Empty
        }
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn alert(id: &str) -> SosAlert {
        SosAlert {
            sos_id: id.to_string(),
            address: "Sector 5".into(),
            sos_type: "Medical".into(),
            name: "Kiran".into(),
            location: None,
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            sos_status: None,
            time_gap_minutes: None,
        }
    }

    fn assignment(id: &str) -> ActiveAssignment {
        ActiveAssignment {
            alert: alert(id),
            victim_phone: "9000000000".into(),
        }
    }

    #[test]
    fn starts_loading() {
        assert_eq!(DashboardStore::default().view(), DashboardBody::Loading);
    }

    #[test]
    fn idle_volunteer_sees_empty_state_then_alerts() {
        let mut store = DashboardStore::default();
        store.apply(DashboardAction::NoAssignment);
        assert_eq!(store.view(), DashboardBody::Empty);

        store.apply(DashboardAction::AlertReceived(alert("a")));
        store.apply(DashboardAction::AlertReceived(alert("b")));
        let ids: Vec<_> = store.pending.iter().map(|a| a.sos_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(matches!(store.view(), DashboardBody::Pending(list) if list.len() == 2));
    }

    #[test]
    fn duplicate_alerts_are_dropped() {
        let mut store = DashboardStore::default();
        store.apply(DashboardAction::NoAssignment);
        store.apply(DashboardAction::AlertReceived(alert("a")));
        store.apply(DashboardAction::AlertReceived(alert("b")));
        store.apply(DashboardAction::AlertReceived(alert("a")));
        assert_eq!(store.pending.len(), 2);
        assert_eq!(store.pending[0].sos_id, "b");
    }

    #[test]
    fn active_assignment_hides_pending_list() {
        let mut store = DashboardStore::default();
        store.apply(DashboardAction::AlertReceived(alert("a")));
        store.apply(DashboardAction::AssignmentFound(assignment("z")));
        assert!(store.pending.is_empty());
        assert!(matches!(store.view(), DashboardBody::Active(a) if a.alert.sos_id == "z"));

        store.apply(DashboardAction::AlertReceived(alert("b")));
        assert!(store.pending.is_empty());
    }

    #[test]
    fn status_failure_stops_loading() {
        let mut store = DashboardStore::default();
        store.apply(DashboardAction::StatusFailed);
        assert!(!store.loading);
        assert_eq!(store.view(), DashboardBody::Empty);
    }

    #[test]
    fn reload_resets_everything() {
        let mut store = DashboardStore::default();
        store.apply(DashboardAction::AssignmentFound(assignment("z")));
        store.apply(DashboardAction::Reload);
        assert_eq!(store, DashboardStore::default());
    }

    #[test]
    fn reducer_returns_new_state() {
        let store = Rc::new(DashboardStore::default());
        let next = store.clone().reduce(DashboardAction::NoAssignment);
        assert!(store.loading);
        assert!(!next.loading);
    }
}
