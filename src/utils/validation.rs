//! Client-side rules for the login and signup forms.
//!
//! Everything here is plain data so it can be checked without a browser.

use std::collections::BTreeMap;

use crate::models::{Location, LoginRequest, SignupRequest};
use crate::utils::constants::{MIN_PASSWORD_LEN, PHONE_DIGITS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Phone,
    Password,
    Skills,
    IdProof,
    Latitude,
    Longitude,
}

/// First failing rule per field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check(&mut self, field: FormField, rule: Option<&'static str>) {
        if let Some(message) = rule {
            self.0.insert(field, message);
        }
    }
}

fn check_phone(phone: &str) -> Option<&'static str> {
    if phone.is_empty() {
        Some("Phone number is required")
    } else if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        Some("Phone number must be 10 digits")
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

/// Splits the comma-separated skills input, dropping blanks
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(FormField::Phone, check_phone(&self.phone));
        errors.check(FormField::Password, check_password(&self.password));
        errors
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub phone: String,
    pub password: String,
    /// Raw comma-separated text as typed
    pub skills_input: String,
    /// URL returned by the image upload
    pub id_proof: String,
    pub address: String,
    pub location: Location,
}

impl SignupForm {
    pub fn skills(&self) -> Vec<String> {
        parse_skills(&self.skills_input)
    }

    /// Once a location is captured the address field mirrors it and is locked
    pub fn address_locked(&self) -> bool {
        self.location.is_captured()
    }

    pub fn display_address(&self) -> String {
        if self.address_locked() {
            self.location.label()
        } else {
            self.address.clone()
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.check(FormField::Name, Some("Name is required"));
        }
        errors.check(FormField::Phone, check_phone(&self.phone));
        errors.check(FormField::Password, check_password(&self.password));
        if self.skills().is_empty() {
            errors.check(FormField::Skills, Some("At least one skill is required"));
        }
        if self.id_proof.is_empty() {
            errors.check(FormField::IdProof, Some("ID proof is required"));
        }
        if !self.location.latitude.is_finite() {
            errors.check(FormField::Latitude, Some("Latitude is required"));
        }
        if !self.location.longitude.is_finite() {
            errors.check(FormField::Longitude, Some("Longitude is required"));
        }
        errors
    }

    pub fn to_request(&self) -> SignupRequest {
        let address = if self.address.trim().is_empty() {
            self.location.label()
        } else {
            self.address.clone()
        };
        SignupRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            skills: self.skills(),
            id_proof: self.id_proof.clone(),
            location: self.location,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            skills_input: "CPR, First Aid".into(),
            id_proof: "https://cdn.example/id.png".into(),
            address: String::new(),
            location: Location::default(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.get(FormField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for bad in ["98765", "98765432101", "98765abcde", "+919876543", "98765 4321"] {
            let form = LoginForm { phone: bad.into(), password: "secret1".into() };
            assert_eq!(
                form.validate().get(FormField::Phone),
                Some("Phone number must be 10 digits"),
                "{bad}"
            );
        }
        let ok = LoginForm { phone: "0123456789".into(), password: "secret1".into() };
        assert!(ok.validate().is_empty());
    }

    #[test]
    fn password_minimum_length() {
        let short = LoginForm { phone: "9876543210".into(), password: "12345".into() };
        assert_eq!(
            short.validate().get(FormField::Password),
            Some("Password must be at least 6 characters")
        );
        let exact = LoginForm { phone: "9876543210".into(), password: "123456".into() };
        assert!(exact.validate().is_empty());
    }

    #[test]
    fn phone_is_checked_as_typed() {
        for padded in [" 9876543210", "9876543210 "] {
            let form = LoginForm { phone: padded.into(), password: "secret1".into() };
            assert_eq!(
                form.validate().get(FormField::Phone),
                Some("Phone number must be 10 digits"),
                "{padded:?}"
            );
        }
    }

    #[test]
    fn password_length_counts_utf16_units() {
        // Three emoji are six UTF-16 units
        let emoji = LoginForm { phone: "9876543210".into(), password: "🚑🚑🚑".into() };
        assert!(emoji.validate().is_empty());

        let short = LoginForm { phone: "9876543210".into(), password: "🚑🚑a".into() };
        assert_eq!(
            short.validate().get(FormField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn skills_are_split_and_trimmed() {
        assert_eq!(parse_skills(" CPR ,, First Aid ,"), vec!["CPR", "First Aid"]);
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn signup_needs_a_skill_and_id_proof() {
        let form = SignupForm {
            skills_input: " , ".into(),
            id_proof: String::new(),
            ..valid_signup()
        };
        let errors = form.validate();
        assert_eq!(errors.get(FormField::Skills), Some("At least one skill is required"));
        assert_eq!(errors.get(FormField::IdProof), Some("ID proof is required"));
        assert_eq!(errors.get(FormField::Phone), None);
        assert_eq!(errors.get(FormField::Password), None);
    }

    #[test]
    fn signup_name_required() {
        let form = SignupForm { name: "   ".into(), ..valid_signup() };
        assert_eq!(form.validate().get(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn default_location_is_valid() {
        assert!(valid_signup().validate().is_empty());
        let broken = SignupForm {
            location: Location::new(f64::NAN, 77.0),
            ..valid_signup()
        };
        assert_eq!(broken.validate().get(FormField::Latitude), Some("Latitude is required"));
    }

    #[test]
    fn empty_address_falls_back_to_coordinates() {
        let form = SignupForm {
            location: Location::new(12.97, 77.59),
            ..valid_signup()
        };
        assert!(form.address_locked());
        assert_eq!(form.display_address(), "Lat: 12.97, Long: 77.59");

        let req = form.to_request();
        assert_eq!(req.address, "Lat: 12.97, Long: 77.59");
        assert_eq!(req.skills, vec!["CPR", "First Aid"]);
    }

    #[test]
    fn typed_address_is_kept() {
        let form = SignupForm { address: "12 MG Road".into(), ..valid_signup() };
        assert!(!form.address_locked());
        assert_eq!(form.display_address(), "12 MG Road");
        assert_eq!(form.to_request().address, "12 MG Road");
    }
}
