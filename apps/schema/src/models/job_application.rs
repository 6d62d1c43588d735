use serde::{Deserialize, Serialize};

use crate::enums::ApplicationStatus;
use crate::models::Timestamped;
use crate::validation::{schema_field, Collector, ObjectReader, Schema};

/// Links a job posting, a candidate and the resume they applied with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub custom_resume_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_feedback: Option<Vec<InterviewFeedback>>,
    pub applied_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub stage: String,
    pub feedback: String,
    pub interviewer: String,
    pub date: String,
}

impl JobApplication {
    /// Moves to `status` unconditionally; legality of the move is the caller's call.
    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
        self.touch();
    }

    pub fn record_feedback(&mut self, feedback: InterviewFeedback) {
        self.interview_feedback
            .get_or_insert_with(Vec::new)
            .push(feedback);
        self.touch();
    }
}

impl Schema for JobApplication {
    const ENTITY: &'static str = "JobApplication";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let job_id = obj.required(cx, "job_id");
        let candidate_id = obj.required(cx, "candidate_id");
        let custom_resume_id = obj.required(cx, "custom_resume_id");
        let cover_letter = obj.optional(cx, "cover_letter");
        let status = obj.required(cx, "status");
        let matching_score = obj.optional(cx, "matching_score");
        let notes = obj.optional(cx, "notes");
        let interview_feedback = obj.optional(cx, "interview_feedback");
        let applied_at = obj.required(cx, "applied_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(JobApplication {
            id: id?,
            job_id: job_id?,
            candidate_id: candidate_id?,
            custom_resume_id: custom_resume_id?,
            cover_letter: cover_letter?,
            status: status?,
            matching_score: matching_score?,
            notes: notes?,
            interview_feedback: interview_feedback?,
            applied_at: applied_at?,
            updated_at: updated_at?,
        })
    }
}

impl Schema for InterviewFeedback {
    const ENTITY: &'static str = "InterviewFeedback";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let stage = obj.required(cx, "stage");
        let feedback = obj.required(cx, "feedback");
        let interviewer = obj.required(cx, "interviewer");
        let date = obj.required(cx, "date");
        Some(InterviewFeedback {
            stage: stage?,
            feedback: feedback?,
            interviewer: interviewer?,
            date: date?,
        })
    }
}

schema_field!(InterviewFeedback);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::enums::Enumeration;
    use crate::errors::Reason;

    fn application() -> serde_json::Value {
        json!({
            "id": "app_1",
            "job_id": "job_1",
            "candidate_id": "cand_1",
            "custom_resume_id": "res_1",
            "status": "SUBMITTED",
            "applied_at": "2024-03-02T00:00:00Z",
            "updated_at": "2024-03-02T00:00:00Z"
        })
    }

    fn feedback(stage: &str) -> InterviewFeedback {
        InterviewFeedback {
            stage: stage.to_string(),
            feedback: "Strong systems background".to_string(),
            interviewer: "R. Chen".to_string(),
            date: "2024-03-10".to_string(),
        }
    }

    #[test]
    fn test_application_requires_resume() {
        let mut raw = application();
        raw.as_object_mut().unwrap().remove("custom_resume_id");
        let err = JobApplication::validate(&raw).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has("custom_resume_id", Reason::MissingRequired));
    }

    #[test]
    fn test_every_status_accepted() {
        for status in ApplicationStatus::names() {
            let mut raw = application();
            raw["status"] = json!(status);
            assert!(JobApplication::validate(&raw).is_ok(), "{status} rejected");
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut raw = application();
        raw["status"] = json!("WITHDRAWN");
        let err = JobApplication::validate(&raw).unwrap_err();
        assert!(err.has("status", Reason::NotInEnumeration));
    }

    #[test]
    fn test_hired_is_not_terminal() {
        let mut raw = application();
        raw["status"] = json!("HIRED");
        let mut app = JobApplication::validate(&raw).unwrap();
        app.set_status(ApplicationStatus::Draft);
        assert_eq!(app.status, ApplicationStatus::Draft);
        app.set_status(ApplicationStatus::Rejected);
        assert_eq!(app.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_feedback_is_appended_in_order() {
        let mut app = JobApplication::validate(&application()).unwrap();
        app.record_feedback(feedback("phone screen"));
        app.record_feedback(feedback("onsite"));
        let stages: Vec<_> = app
            .interview_feedback
            .unwrap()
            .into_iter()
            .map(|f| f.stage)
            .collect();
        assert_eq!(stages, vec!["phone screen", "onsite"]);
    }

    #[test]
    fn test_feedback_element_paths() {
        let mut raw = application();
        raw["interview_feedback"] = json!([
            {"stage": "screen", "feedback": "ok", "interviewer": "A", "date": "2024-03-05"},
            {"stage": "onsite", "feedback": "ok", "date": "2024-03-09"}
        ]);
        let err = JobApplication::validate(&raw).unwrap_err();
        assert_eq!(
            err.reasons_at("interview_feedback[1].interviewer"),
            vec![Reason::MissingRequired]
        );
    }

    #[test]
    fn test_matching_score_is_numeric() {
        let mut raw = application();
        raw["matching_score"] = json!("87%");
        assert!(JobApplication::validate(&raw)
            .unwrap_err()
            .has("matching_score", Reason::WrongType));

        raw["matching_score"] = json!(87.5);
        assert_eq!(
            JobApplication::validate(&raw).unwrap().matching_score,
            Some(87.5)
        );
    }
}
