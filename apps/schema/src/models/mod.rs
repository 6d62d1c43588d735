//! Entity records for the resume / job-application domain.
//!
//! Identifiers are opaque strings; uniqueness and referential existence are
//! the store's concern. Timestamps are ISO-8601 strings and are not parsed.

pub mod candidate;
pub mod company;
pub mod custom_resume;
pub mod job_application;
pub mod job_posting;
pub mod skills_matrix;

use chrono::{DateTime, SecondsFormat, Utc};

pub use candidate::{
    Candidate, Certification, Education, Language, PersonalInfo, Skill, WorkExperience,
};
pub use company::{Company, SocialMedia};
pub use custom_resume::{AiSuggestions, CustomResume, ResumeContent};
pub use job_application::{InterviewFeedback, JobApplication};
pub use job_posting::{JobPosting, SalaryRange};
pub use skills_matrix::SkillsMatrix;

/// Entities carrying an `updated_at` stamp. Every mutation helper on an
/// entity calls `touch` so the stamp is always refreshed.
pub trait Timestamped {
    fn updated_at(&self) -> &str;

    fn set_updated_at(&mut self, stamp: String);

    fn touch_at(&mut self, now: DateTime<Utc>) {
        self.set_updated_at(format_timestamp(now));
    }

    fn touch(&mut self) {
        self.touch_at(Utc::now());
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-03-01T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

macro_rules! timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Timestamped for $ty {
                fn updated_at(&self) -> &str {
                    &self.updated_at
                }

                fn set_updated_at(&mut self, stamp: String) {
                    self.updated_at = stamp;
                }
            }
        )+
    };
}

timestamped!(
    Company,
    JobPosting,
    Candidate,
    CustomResume,
    JobApplication,
    SkillsMatrix,
);
