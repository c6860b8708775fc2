use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Geographic point as the backend sends it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// A zero latitude means "not captured yet"
    pub fn is_captured(&self) -> bool {
        self.latitude != 0.0
    }

    pub fn label(&self) -> String {
        format!("Lat: {}, Long: {}", self.latitude, self.longitude)
    }

    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Raw `sos-alert` event payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlertPayload {
    #[serde(deserialize_with = "de_id")]
    pub sos_id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub address: String,
    #[serde(rename = "type", default, deserialize_with = "de_null_default")]
    pub sos_type: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub sos_status: Option<String>,
    #[serde(default)]
    pub time_gap_minutes: Option<f64>,
}

/// Pending SOS alert shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct SosAlert {
    pub sos_id: String,
    pub address: String,
    pub sos_type: String,
    pub name: String,
    pub location: Option<Location>,
    /// Stamped client-side when the alert arrives
    pub received_at: DateTime<Utc>,
    pub sos_status: Option<String>,
    pub time_gap_minutes: Option<f64>,
}

impl SosAlert {
    pub fn from_payload(payload: SosAlertPayload, received_at: DateTime<Utc>) -> Self {
        Self {
            sos_id: payload.sos_id,
            address: payload.address,
            sos_type: payload.sos_type,
            name: payload.name,
            location: payload.location,
            received_at,
            sos_status: payload.sos_status,
            time_gap_minutes: payload.time_gap_minutes,
        }
    }

    pub fn received_label(&self) -> String {
        self.received_at
            .with_timezone(&Local)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string()
    }

    /// `"<n> minutes ago"`, hidden when the backend sends nothing or zero
    pub fn time_gap_label(&self) -> Option<String> {
        match self.time_gap_minutes {
            Some(minutes) if minutes.is_finite() && minutes != 0.0 => {
                Some(format!("{} minutes ago", minutes))
            }
            _ => None,
        }
    }
}

/// The SOS this volunteer has accepted and is working on
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAssignment {
    pub alert: SosAlert,
    pub victim_phone: String,
}

impl ActiveAssignment {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.victim_phone)
    }

    pub fn sms_href(&self) -> String {
        format!("sms:{}", self.victim_phone)
    }

    pub fn maps_href(&self) -> Option<String> {
        self.alert.location.map(|l| l.maps_url())
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub volunteer_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    /// Volunteer already holds an accepted SOS
    pub fn is_active(&self) -> bool {
        self.success && self.volunteer_status.as_deref() == Some("active")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SosSearchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AssignedSos>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedSos {
    #[serde(deserialize_with = "de_id")]
    pub sos_id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub address: String,
    #[serde(rename = "type", default, deserialize_with = "de_null_default")]
    pub sos_type: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub phone: String,
}

impl AssignedSos {
    pub fn into_assignment(self, received_at: DateTime<Utc>) -> ActiveAssignment {
        ActiveAssignment {
            alert: SosAlert {
                sos_id: self.sos_id,
                address: self.address,
                sos_type: self.sos_type,
                name: self.name,
                location: self.location,
                received_at,
                sos_status: None,
                time_gap_minutes: None,
            },
            victim_phone: self.phone,
        }
    }
}

impl SosSearchResponse {
    pub fn into_assignment(self, received_at: DateTime<Utc>) -> Option<ActiveAssignment> {
        if !self.success {
            return None;
        }
        self.data.map(|sos| sos.into_assignment(received_at))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptSosRequest {
    pub volunteer_id: String,
}

/// Backend ids arrive as strings or numbers depending on the route
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Treats an explicit `null` like a missing field
pub(crate) fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "de_id")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
}
