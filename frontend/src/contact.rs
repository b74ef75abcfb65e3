use std::collections::BTreeMap;
use std::fmt;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    RocketDesign,
    PropulsionSystems,
    MissionControl,
    Consultation,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::RocketDesign,
        ProjectType::PropulsionSystems,
        ProjectType::MissionControl,
        ProjectType::Consultation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ProjectType::RocketDesign => "rocket-design",
            ProjectType::PropulsionSystems => "propulsion-systems",
            ProjectType::MissionControl => "mission-control",
            ProjectType::Consultation => "consultation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::RocketDesign => "Rocket Design",
            ProjectType::PropulsionSystems => "Propulsion Systems",
            ProjectType::MissionControl => "Mission Control",
            ProjectType::Consultation => "Consultation",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::ProjectType => "Project type",
            ContactField::Message => "Message",
        }
    }
}

/// Body of `POST /api/contacts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(ContactField::label).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("failed to encode contact request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("contact endpoint answered with status {status}")]
    Rejected { status: u16 },
}

impl ContactRequest {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::ProjectType => &self.project_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::ProjectType => self.project_type = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        for (field, value) in [
            (ContactField::FirstName, &self.first_name),
            (ContactField::LastName, &self.last_name),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                errors.insert(field, format!("{} is required", field.label()));
            }
        }

        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !looks_like_email(self.email.trim()) {
            errors.insert(ContactField::Email, "Enter a valid email address");
        }

        if self.project_type.is_empty() {
            errors.insert(ContactField::ProjectType, "Select a project type");
        } else if ProjectType::from_slug(&self.project_type).is_none() {
            errors.insert(ContactField::ProjectType, "Unknown project type");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Validates and posts the request. Nothing is sent when validation fails.
pub async fn submit_contact(request: &ContactRequest) -> Result<(), ContactError> {
    request.validate().map_err(ContactError::Invalid)?;

    let response = Request::post(&config::contacts_endpoint())
        .json(request)
        .map_err(|e| ContactError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Rejected {
            status: response.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            first_name: "Valentina".into(),
            last_name: "Tereshkova".into(),
            email: "valentina@vostok.space".into(),
            project_type: ProjectType::MissionControl.slug().into(),
            message: "We need a ground station.".into(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let body = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            body,
            json!({
                "firstName": "Valentina",
                "lastName": "Tereshkova",
                "email": "valentina@vostok.space",
                "projectType": "mission-control",
                "message": "We need a ground station.",
            })
        );
    }

    #[test]
    fn complete_request_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactRequest::default().validate().unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(ContactField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(ContactField::ProjectType), Some("Select a project type"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut request = filled();
        request.message = "   \n".into();

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(ContactField::Message).is_some());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["plainaddress", "@vostok.space", "a@b", "a@.space", "a b@c.de", "a@b.c."] {
            let mut request = filled();
            request.email = email.into();
            let errors = request.validate().unwrap_err();
            assert_eq!(
                errors.get(ContactField::Email),
                Some("Enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn rejects_unknown_project_type() {
        let mut request = filled();
        request.project_type = "time-travel".into();

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.get(ContactField::ProjectType), Some("Unknown project type"));
    }

    #[test]
    fn project_types_round_trip_through_slugs() {
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ProjectType::from_slug("Rocket Design"), None);
    }

    #[test]
    fn set_field_updates_matching_field() {
        let mut request = ContactRequest::default();
        request.set_field(ContactField::Email, "ops@astrellion.tech".into());

        assert_eq!(request.field(ContactField::Email), "ops@astrellion.tech");
        assert_eq!(request.field(ContactField::FirstName), "");
    }

    #[test]
    fn invalid_error_lists_fields() {
        let errors = ContactRequest::default().validate().unwrap_err();
        let message = ContactError::Invalid(errors).to_string();

        assert_eq!(
            message,
            "invalid fields: First name, Last name, Email, Project type, Message"
        );
    }
}
