use chrono::{DateTime, Duration, Utc};

use crate::models::job::NewJob;

/// Creation time for the seed job at `index`. Earlier entries get later
/// timestamps so the board lists the seed set in declaration order.
pub fn seeded_at(base: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    base - Duration::milliseconds(index as i64)
}

/// Sample postings loaded when `SEED_JOBS` is enabled.
pub fn sample_jobs() -> Vec<NewJob> {
    vec![
        job(
            "Senior Frontend Developer",
            "TechSoft Solutions",
            "Bangalore",
            "5-8 years",
            "₹18-25 LPA",
            &["React", "TypeScript", "Node.js"],
            "Lead frontend development for enterprise applications",
        ),
        job(
            "Machine Learning Engineer",
            "AI Innovations",
            "Hybrid - Bangalore",
            "3-6 years",
            "₹20-30 LPA",
            &["Python", "TensorFlow", "PyTorch"],
            "Develop and deploy ML models for real-world applications",
        ),
        job(
            "DevOps Engineer",
            "CloudTech Systems",
            "Remote",
            "4-7 years",
            "₹22-32 LPA",
            &["AWS", "Docker", "Kubernetes", "Jenkins"],
            "Manage and optimize cloud infrastructure and CI/CD pipelines",
        ),
        job(
            "Mobile App Developer",
            "AppWave Technologies",
            "Pune",
            "2-5 years",
            "₹12-18 LPA",
            &["React Native", "iOS", "Android", "Flutter"],
            "Develop cross-platform mobile applications using modern frameworks",
        ),
        job(
            "Data Analyst",
            "DataMetrics Solutions",
            "Hyderabad",
            "1-3 years",
            "₹8-12 LPA",
            &["SQL", "Python", "Tableau", "Excel"],
            "Analyze data and create meaningful insights for business decisions",
        ),
    ]
}

fn job(
    title: &str,
    company: &str,
    location: &str,
    experience: &str,
    salary: &str,
    skills: &[&str],
    description: &str,
) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        employment_type: "Full-time".to_string(),
        experience: experience.to_string(),
        salary: salary.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}
