use serde::{Deserialize, Serialize};

use crate::enums::{ExperienceLevel, JobStatus, JobType};
use crate::errors::Reason;
use crate::validation::{schema_field, Collector, ObjectReader, Schema};

/// Belongs to one `Company` through `company_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_required: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub posted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub status: JobStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Closed interval of compensation. Shared by job postings and a
/// candidate's desired salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

impl Schema for JobPosting {
    const ENTITY: &'static str = "JobPosting";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let company_id = obj.required(cx, "company_id");
        let title = obj.required(cx, "title");
        let description = obj.required(cx, "description");
        let requirements = obj.optional(cx, "requirements");
        let responsibilities = obj.optional(cx, "responsibilities");
        let salary_range = obj.optional(cx, "salary_range");
        let location = obj.optional(cx, "location");
        let job_type = obj.required(cx, "job_type");
        let experience_level = obj.required(cx, "experience_level");
        let skills_required = obj.optional(cx, "skills_required");
        let benefits = obj.optional(cx, "benefits");
        let department = obj.optional(cx, "department");
        let posted_at = obj.required(cx, "posted_at");
        let deadline = obj.optional(cx, "deadline");
        let status = obj.required(cx, "status");
        let created_at = obj.required(cx, "created_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(JobPosting {
            id: id?,
            company_id: company_id?,
            title: title?,
            description: description?,
            requirements: requirements?,
            responsibilities: responsibilities?,
            salary_range: salary_range?,
            location: location?,
            job_type: job_type?,
            experience_level: experience_level?,
            skills_required: skills_required?,
            benefits: benefits?,
            department: department?,
            posted_at: posted_at?,
            deadline: deadline?,
            status: status?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

impl Schema for SalaryRange {
    const ENTITY: &'static str = "SalaryRange";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let min = obj.required(cx, "min");
        let max = obj.required(cx, "max");
        let range = SalaryRange { min: min?, max: max? };

        if cx.config().enforce_salary_order && !range.is_ordered() {
            cx.report(obj.path().clone(), Reason::InvalidRange);
            return None;
        }
        Some(range)
    }
}

schema_field!(SalaryRange);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::SchemaConfig;

    fn posting() -> serde_json::Value {
        json!({
            "id": "job_1",
            "company_id": "co_1",
            "title": "Staff Engineer",
            "description": "Own the ingestion pipeline.",
            "job_type": "REMOTE",
            "experience_level": "SENIOR",
            "status": "OPEN",
            "salary_range": {"min": 90000, "max": 130000},
            "posted_at": "2024-02-01T00:00:00Z",
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        })
    }

    #[test]
    fn test_remote_senior_posting() {
        let job = JobPosting::validate(&posting()).unwrap();
        assert_eq!(job.job_type, JobType::Remote);
        assert_eq!(job.experience_level, ExperienceLevel::Senior);
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(
            job.salary_range,
            Some(SalaryRange {
                min: 90000.0,
                max: 130000.0
            })
        );
    }

    #[test]
    fn test_hybrid_is_not_a_job_type() {
        let mut raw = posting();
        raw["job_type"] = json!("HYBRID");
        let err = JobPosting::validate(&raw).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has("job_type", Reason::NotInEnumeration));
    }

    #[test]
    fn test_salary_bounds_are_required_inside_range() {
        let mut raw = posting();
        raw["salary_range"] = json!({"min": 90000});
        let err = JobPosting::validate(&raw).unwrap_err();
        assert!(err.has("salary_range.max", Reason::MissingRequired));
    }

    #[test]
    fn test_inverted_range_accepted_by_default() {
        let mut raw = posting();
        raw["salary_range"] = json!({"min": 150000, "max": 100000});
        let job = JobPosting::validate(&raw).unwrap();
        assert!(!job.salary_range.unwrap().is_ordered());
    }

    #[test]
    fn test_inverted_range_rejected_when_enforced() {
        let config = SchemaConfig {
            enforce_salary_order: true,
            ..SchemaConfig::default()
        };
        let mut raw = posting();
        raw["salary_range"] = json!({"min": 150000, "max": 100000});
        let err = JobPosting::validate_with(&raw, &config).unwrap_err();
        assert_eq!(err.reasons_at("salary_range"), vec![Reason::InvalidRange]);

        assert!(JobPosting::validate_with(&posting(), &config).is_ok());
    }

    #[test]
    fn test_equal_bounds_are_ordered() {
        let range = SalaryRange {
            min: 80000.0,
            max: 80000.0,
        };
        assert!(range.is_ordered());
        assert!(range.contains(80000.0));
        assert!(!range.contains(80001.0));
    }

    #[test]
    fn test_every_status_accepted() {
        for status in ["OPEN", "CLOSED", "DRAFT"] {
            let mut raw = posting();
            raw["status"] = json!(status);
            assert!(JobPosting::validate(&raw).is_ok(), "{status} rejected");
        }
    }

    #[test]
    fn test_string_lists_checked_per_element() {
        let mut raw = posting();
        raw["requirements"] = json!(["Rust", null]);
        raw["benefits"] = json!("401k");
        let err = JobPosting::validate(&raw).unwrap_err();
        assert!(err.has("requirements[1]", Reason::WrongType));
        assert!(err.has("benefits", Reason::WrongType));
    }
}
