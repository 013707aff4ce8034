//! Groups applications by the title of the job they target.
//!
//! The key is the live job title from the join, not the `job_title` copy
//! stored on the application. An application whose job no longer exists is
//! kept and filed under [`UNCATEGORIZED`].
//!
//! The whole collection is loaded and grouped in one pass. There is no
//! pagination.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::application::JoinedApplication;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// What the dashboard sees of one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub application_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: f64,
    pub notice_period: f64,
    pub expected_ctc: f64,
    pub cover_letter: Option<String>,
    pub resume: String,
    pub created_at: DateTime<Utc>,
}

pub type GroupedApplications = BTreeMap<String, Vec<ApplicationSummary>>;

impl From<&JoinedApplication> for ApplicationSummary {
    fn from(joined: &JoinedApplication) -> Self {
        let a = &joined.application;
        ApplicationSummary {
            application_id: a.id,
            name: a.name.clone(),
            email: a.email.clone(),
            phone: a.phone.clone(),
            experience: a.experience,
            notice_period: a.notice_period,
            expected_ctc: a.expected_ctc,
            cover_letter: a.cover_letter.clone(),
            resume: a.resume_path.clone(),
            created_at: a.created_at,
        }
    }
}

/// Buckets `applications` by resolved job title. Input order is preserved
/// inside each bucket, so newest-first input gives newest-first groups.
pub fn group_by_job_title(applications: &[JoinedApplication]) -> GroupedApplications {
    let mut grouped = GroupedApplications::new();
    for joined in applications {
        let key = joined
            .resolved_title
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        grouped
            .entry(key)
            .or_default()
            .push(ApplicationSummary::from(joined));
    }
    grouped
}
