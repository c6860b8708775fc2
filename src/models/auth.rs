use serde::{Deserialize, Serialize};
use crate::models::sos::{de_opt_id, Location};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub skills: Vec<String>,
    pub id_proof: String,
    pub location: Location,
    pub address: String,
}

/// Login and signup share this response shape
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "volunteerID", alias = "volunteerId", default, deserialize_with = "de_opt_id")]
    pub volunteer_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Session-scoped volunteer credentials
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub token: String,
    pub volunteer_id: String,
}

impl AuthResponse {
    /// Credentials carried by a successful response
    pub fn credentials(&self) -> Option<Credentials> {
        if !self.success {
            return None;
        }
        match (&self.token, &self.volunteer_id) {
            (Some(token), Some(volunteer_id)) => Some(Credentials {
                token: token.clone(),
                volunteer_id: volunteer_id.clone(),
            }),
            _ => None,
        }
    }
}

/// Error body returned by the backend on 4xx/5xx
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_reads_volunteer_id_variants() {
        let upper: AuthResponse =
            serde_json::from_str(r#"{"success":true,"token":"t","volunteerID":"v1"}"#).unwrap();
        assert_eq!(
            upper.credentials(),
            Some(Credentials { token: "t".into(), volunteer_id: "v1".into() })
        );

        let lower: AuthResponse =
            serde_json::from_str(r#"{"success":true,"token":"t","volunteerId":7}"#).unwrap();
        assert_eq!(lower.volunteer_id.as_deref(), Some("7"));
    }

    #[test]
    fn failed_response_has_no_credentials() {
        let res: AuthResponse =
            serde_json::from_str(r#"{"success":false,"token":"t","volunteerID":"v1"}"#).unwrap();
        assert!(res.credentials().is_none());

        let partial: AuthResponse = serde_json::from_str(r#"{"success":true,"token":"t"}"#).unwrap();
        assert!(partial.credentials().is_none());
    }

    #[test]
    fn signup_request_is_camel_case() {
        let req = SignupRequest {
            name: "Asha".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            skills: vec!["CPR".into()],
            id_proof: "https://img/1.png".into(),
            location: Location::new(1.0, 2.0),
            address: "Lat: 1, Long: 2".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["idProof"], "https://img/1.png");
        assert_eq!(json["location"]["latitude"], 1.0);
        assert_eq!(json["skills"][0], "CPR");
    }
}
