use super::{Form, normalize_key, required};
use crate::domain::{Credentials, SignUpRequest, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn to_credentials(&self) -> Result<Credentials, ValidationError> {
        Ok(Credentials {
            email: required("Email", &self.email)?.to_string(),
            password: required("Password", &self.password)?.to_string(),
        })
    }
}

impl Form for SignInForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        match normalize_key(field).as_str() {
            "email" => self.email = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => return Err(ValidationError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email", self.email.clone()),
            ("password", mask(&self.password)),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl SignUpForm {
    pub fn to_request(&self) -> Result<SignUpRequest, ValidationError> {
        Ok(SignUpRequest {
            first_name: required("First name", &self.first_name)?.to_string(),
            last_name: required("Last name", &self.last_name)?.to_string(),
            email: required("Email", &self.email)?.to_string(),
            phone_number: required("Phone number", &self.phone_number)?.to_string(),
            password: required("Password", &self.password)?.to_string(),
        })
    }
}

impl Form for SignUpForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        match normalize_key(field).as_str() {
            "first_name" | "firstname" => self.first_name = value.to_string(),
            "last_name" | "lastname" => self.last_name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone_number" | "phone" => self.phone_number = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => return Err(ValidationError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("first-name", self.first_name.clone()),
            ("last-name", self.last_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone_number.clone()),
            ("password", mask(&self.password)),
        ]
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
