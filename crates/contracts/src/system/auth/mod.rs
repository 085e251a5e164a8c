use serde::{Deserialize, Serialize};

use crate::domain::common::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.add("password", "Please enter password");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Signed-in user as kept in the session cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
}

/// Sign-up form; first and last name are joined into `fullname` on the wire
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<SignUpRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.first_name.trim().is_empty() {
            errors.add("firstName", "Please enter first name");
        }
        if self.last_name.trim().is_empty() {
            errors.add("lastName", "Please enter last name");
        }
        validate_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.add("password", "Please enter password");
        }
        errors.into_result()?;

        Ok(SignUpRequest {
            fullname: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

fn validate_email(email: &str, errors: &mut FieldErrors) {
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "Please enter email");
    } else if !is_valid_email(email) {
        errors.add("email", "Please enter a valid email address");
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("ops@example.com"));
        assert!(!is_valid_email("ops@example"));
        assert!(!is_valid_email("ops@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ops@example..com"));
    }

    #[test]
    fn test_sign_in_messages() {
        let errors = SignInRequest::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter email"));
        assert_eq!(errors.get("password"), Some("Please enter password"));

        let request = SignInRequest {
            email: "not-an-email".into(),
            password: "pw".into(),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_sign_up_builds_fullname() {
        let form = SignUpForm {
            first_name: " Asha ".into(),
            last_name: "Rao".into(),
            email: "asha@example.com".into(),
            password: "secret".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.fullname, "Asha Rao");

        let errors = SignUpForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
