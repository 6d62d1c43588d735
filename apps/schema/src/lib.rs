//! Data contract for the resume / job-application domain.
//!
//! Six entities (companies, job postings, candidates, tailored resumes,
//! applications and a skills taxonomy), their closed enumerations, and a
//! validator that checks raw JSON against them and reports every violation
//! with its field path.

pub mod check;
pub mod config;
pub mod enums;
pub mod errors;
pub mod models;
pub mod validation;

pub use config::SchemaConfig;
pub use enums::{
    all_enumerations, ApplicationStatus, CompanySize, Enumeration, EnumerationInfo,
    ExperienceLevel, FileType, JobStatus, JobType,
};
pub use errors::{Reason, UnknownVariant, ValidationError, VersionExhausted, Violation};
pub use models::{
    AiSuggestions, Candidate, Certification, Company, CustomResume, Education, InterviewFeedback,
    JobApplication, JobPosting, Language, PersonalInfo, ResumeContent, SalaryRange, Skill,
    SkillsMatrix, SocialMedia, Timestamped, WorkExperience,
};
pub use validation::{FieldPath, Schema};
