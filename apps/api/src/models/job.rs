use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::MissingFields;
use crate::errors::AppError;

/// A posted position. Never updated once listed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub experience: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Raw POST /api/jobs body. Every field is optional here so that a missing
/// one becomes a validation error naming it instead of a bare decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub skills: Option<Vec<String>>,
    pub description: Option<String>,
}

/// A validated job ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub experience: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub description: String,
}

impl JobPayload {
    pub fn validate(self) -> Result<NewJob, AppError> {
        let mut missing = MissingFields::default();
        let job = NewJob {
            title: missing.text("title", self.title),
            company: missing.text("company", self.company),
            location: missing.text("location", self.location),
            employment_type: missing.text("type", self.employment_type),
            experience: missing.text("experience", self.experience),
            salary: missing.text("salary", self.salary),
            skills: self.skills.unwrap_or_default(),
            description: missing.text("description", self.description),
        };
        missing.finish("Job").map_err(AppError::Validation)?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> JobPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_payload_validates() {
        let job = payload(json!({
            "title": "Data Analyst",
            "company": "DataMetrics Solutions",
            "location": "Hyderabad",
            "type": "Full-time",
            "experience": "1-3 years",
            "salary": "₹8-12 LPA",
            "skills": ["SQL", "Python"],
            "description": "Analyze data"
        }))
        .validate()
        .unwrap();
        assert_eq!(job.employment_type, "Full-time");
        assert_eq!(job.skills, vec!["SQL", "Python"]);
    }

    #[test]
    fn test_skills_default_to_empty() {
        let job = payload(json!({
            "title": "t", "company": "c", "location": "l", "type": "Contract",
            "experience": "e", "salary": "s", "description": "d"
        }))
        .validate()
        .unwrap();
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = payload(json!({ "title": "Only a title", "company": "   " }))
            .validate()
            .unwrap_err();
        let AppError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.starts_with("Job validation failed"));
        assert!(msg.contains("company is required"));
        assert!(msg.contains("type is required"));
        assert!(!msg.contains("title is required"));
    }

    #[test]
    fn test_job_serializes_with_client_field_names() {
        let job = Job {
            id: Uuid::nil(),
            title: "DevOps Engineer".into(),
            company: "CloudTech Systems".into(),
            location: "Remote".into(),
            employment_type: "Full-time".into(),
            experience: "4-7 years".into(),
            salary: "₹22-32 LPA".into(),
            skills: vec!["AWS".into()],
            description: "Manage cloud infrastructure".into(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["type"], "Full-time");
        assert!(value.get("createdAt").is_some());
    }
}
