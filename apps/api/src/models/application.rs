use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::MissingFields;
use crate::errors::AppError;

/// A candidate's submission against a job.
///
/// `job_title` is the title as it read at submission time. It is kept for the
/// record only; grouping resolves the live job instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub experience: f64,
    pub phone: String,
    pub notice_period: f64,
    pub expected_ctc: f64,
    pub resume_path: String,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An application together with the title of the job it points at, if that
/// job still exists.
#[derive(Debug, Clone, FromRow)]
pub struct JoinedApplication {
    #[sqlx(flatten)]
    pub application: Application,
    pub resolved_title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub job_id: Option<Uuid>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub experience: Option<f64>,
    pub phone: Option<String>,
    pub notice_period: Option<f64>,
    pub expected_ctc: Option<f64>,
    pub resume_path: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub experience: f64,
    pub phone: String,
    pub notice_period: f64,
    pub expected_ctc: f64,
    pub resume_path: String,
    pub cover_letter: Option<String>,
}

impl ApplicationPayload {
    /// The job reference is only checked for presence, not for existence.
    pub fn validate(self) -> Result<NewApplication, AppError> {
        let mut missing = MissingFields::default();
        let job_id = match self.job_id {
            Some(id) => id,
            None => {
                missing.mark("jobId");
                Uuid::nil()
            }
        };
        let application = NewApplication {
            job_id,
            name: missing.text("name", self.name),
            job_title: missing.text("jobTitle", self.job_title),
            email: missing.text("email", self.email),
            experience: missing.number("experience", self.experience),
            phone: missing.text("phone", self.phone),
            notice_period: missing.number("noticePeriod", self.notice_period),
            expected_ctc: missing.number("expectedCtc", self.expected_ctc),
            resume_path: missing.text("resumePath", self.resume_path),
            cover_letter: self.cover_letter,
        };
        missing.finish("Application").map_err(AppError::Validation)?;
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> serde_json::Value {
        json!({
            "jobId": "5f1c7a52-9d8e-4f3a-b4c1-0e2d3f4a5b6c",
            "name": "Asha Rao",
            "jobTitle": "Senior Frontend Developer",
            "email": "asha@example.com",
            "experience": 6,
            "phone": "+91 90000 00000",
            "noticePeriod": 30,
            "expectedCtc": 2200000,
            "resumePath": "asha-rao.pdf"
        })
    }

    #[test]
    fn test_complete_payload_validates_without_cover_letter() {
        let payload: ApplicationPayload = serde_json::from_value(complete()).unwrap();
        let app = payload.validate().unwrap();
        assert_eq!(app.notice_period, 30.0);
        assert_eq!(app.cover_letter, None);
    }

    #[test]
    fn test_cover_letter_is_kept_as_sent() {
        let mut body = complete();
        body["coverLetter"] = json!("");
        let payload: ApplicationPayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.validate().unwrap().cover_letter, Some(String::new()));

        let mut body = complete();
        body["coverLetter"] = json!("  Hello  ");
        let payload: ApplicationPayload = serde_json::from_value(body).unwrap();
        assert_eq!(
            payload.validate().unwrap().cover_letter.as_deref(),
            Some("  Hello  ")
        );
    }

    #[test]
    fn test_missing_numeric_field_is_reported() {
        let mut body = complete();
        body.as_object_mut().unwrap().remove("expectedCtc");
        let payload: ApplicationPayload = serde_json::from_value(body).unwrap();
        match payload.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("expectedCtc is required")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_job_reference_is_reported() {
        let mut body = complete();
        body.as_object_mut().unwrap().remove("jobId");
        let payload: ApplicationPayload = serde_json::from_value(body).unwrap();
        match payload.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("jobId is required")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
