use crate::models::{AuthResponse, Credentials};
use crate::services::api_client::ApiClient;
use crate::services::api_error::ApiError;
use crate::stores::SessionStore;
use crate::utils::validation::{LoginForm, SignupForm};

pub const LOGIN_REJECTED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const LOGIN_FALLBACK_MESSAGE: &str = "An error occurred during login";
pub const SIGNUP_FALLBACK_MESSAGE: &str = "An error occurred during signup";

/// Login with an already-validated form; stores the session on success
pub async fn perform_login(client: &ApiClient, form: &LoginForm) -> Result<Credentials, ApiError> {
    let response = client.login(&form.to_request()).await?;
    accept_auth_response(response)
}

/// Signup with an already-validated form; stores the session on success
pub async fn perform_signup(client: &ApiClient, form: &SignupForm) -> Result<Credentials, ApiError> {
    let response = client.signup(&form.to_request()).await?;
    accept_auth_response(response)
}

fn accept_auth_response(response: AuthResponse) -> Result<Credentials, ApiError> {
    let credentials = response
        .credentials()
        .ok_or_else(|| ApiError::Rejected(response.message.clone()))?;

    if let Err(e) = SessionStore::save(&credentials) {
        log::error!("❌ Could not persist session: {}", e);
    }
    log::info!("✅ Authenticated volunteer {}", credentials.volunteer_id);
    Ok(credentials)
}

/// Inline message for a failed login
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(_) => LOGIN_REJECTED_MESSAGE.to_string(),
        other => other.user_message(LOGIN_FALLBACK_MESSAGE),
    }
}

/// Inline message for a failed signup
pub fn signup_error_message(error: &ApiError) -> String {
    error.user_message(SIGNUP_FALLBACK_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_uses_fixed_message() {
        let err = ApiError::Rejected(Some("whatever the server said".into()));
        assert_eq!(login_error_message(&err), LOGIN_REJECTED_MESSAGE);
    }

    #[test]
    fn http_login_error_prefers_server_message() {
        let err = ApiError::Http { status: 401, message: Some("Invalid credentials".into()) };
        assert_eq!(login_error_message(&err), "Invalid credentials");
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            LOGIN_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn signup_error_messages() {
        let err = ApiError::Http { status: 409, message: Some("Phone already registered".into()) };
        assert_eq!(signup_error_message(&err), "Phone already registered");
        assert_eq!(signup_error_message(&ApiError::Rejected(None)), SIGNUP_FALLBACK_MESSAGE);
    }
}
