use serde::{Deserialize, Serialize};

use crate::enums::JobType;
use crate::models::job_posting::SalaryRange;
use crate::validation::{schema_field, Collector, ObjectReader, Schema};

/// A candidate profile. Nothing here limits how many profiles share a `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub user_id: String,
    pub personal_info: PersonalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_job_types: Option<Vec<JobType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_salary_range: Option<SalaryRange>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    /// Absent while the role is current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

/// `level` is free text (e.g. "expert"), not an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.personal_info.first_name, self.personal_info.last_name
        )
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flatten()
            .map(|s| s.name.as_str())
            .collect()
    }
}

impl Schema for Candidate {
    const ENTITY: &'static str = "Candidate";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let user_id = obj.required(cx, "user_id");
        let personal_info = obj.required(cx, "personal_info");
        let professional_summary = obj.optional(cx, "professional_summary");
        let work_experience = obj.optional(cx, "work_experience");
        let education = obj.optional(cx, "education");
        let skills = obj.optional(cx, "skills");
        let certifications = obj.optional(cx, "certifications");
        let languages = obj.optional(cx, "languages");
        let portfolio_urls = obj.optional(cx, "portfolio_urls");
        let preferred_job_types = obj.optional(cx, "preferred_job_types");
        let preferred_locations = obj.optional(cx, "preferred_locations");
        let desired_salary_range = obj.optional(cx, "desired_salary_range");
        let created_at = obj.required(cx, "created_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(Candidate {
            id: id?,
            user_id: user_id?,
            personal_info: personal_info?,
            professional_summary: professional_summary?,
            work_experience: work_experience?,
            education: education?,
            skills: skills?,
            certifications: certifications?,
            languages: languages?,
            portfolio_urls: portfolio_urls?,
            preferred_job_types: preferred_job_types?,
            preferred_locations: preferred_locations?,
            desired_salary_range: desired_salary_range?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

impl Schema for PersonalInfo {
    const ENTITY: &'static str = "PersonalInfo";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let first_name = obj.required(cx, "first_name");
        let last_name = obj.required(cx, "last_name");
        let email = obj.required(cx, "email");
        let phone = obj.optional(cx, "phone");
        let location = obj.optional(cx, "location");
        Some(PersonalInfo {
            first_name: first_name?,
            last_name: last_name?,
            email: email?,
            phone: phone?,
            location: location?,
        })
    }
}

impl Schema for WorkExperience {
    const ENTITY: &'static str = "WorkExperience";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let title = obj.required(cx, "title");
        let company = obj.required(cx, "company");
        let location = obj.optional(cx, "location");
        let start_date = obj.required(cx, "start_date");
        let end_date = obj.optional(cx, "end_date");
        let description = obj.optional(cx, "description");
        let achievements = obj.optional(cx, "achievements");
        Some(WorkExperience {
            title: title?,
            company: company?,
            location: location?,
            start_date: start_date?,
            end_date: end_date?,
            description: description?,
            achievements: achievements?,
        })
    }
}

impl Schema for Education {
    const ENTITY: &'static str = "Education";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let degree = obj.required(cx, "degree");
        let institution = obj.required(cx, "institution");
        let field = obj.required(cx, "field");
        let graduation_date = obj.required(cx, "graduation_date");
        let gpa = obj.optional(cx, "gpa");
        Some(Education {
            degree: degree?,
            institution: institution?,
            field: field?,
            graduation_date: graduation_date?,
            gpa: gpa?,
        })
    }
}

impl Schema for Skill {
    const ENTITY: &'static str = "Skill";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let name = obj.required(cx, "name");
        let level = obj.required(cx, "level");
        Some(Skill {
            name: name?,
            level: level?,
        })
    }
}

impl Schema for Certification {
    const ENTITY: &'static str = "Certification";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let name = obj.required(cx, "name");
        let issuer = obj.required(cx, "issuer");
        let date = obj.required(cx, "date");
        let expiry = obj.optional(cx, "expiry");
        Some(Certification {
            name: name?,
            issuer: issuer?,
            date: date?,
            expiry: expiry?,
        })
    }
}

impl Schema for Language {
    const ENTITY: &'static str = "Language";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let name = obj.required(cx, "name");
        let proficiency = obj.required(cx, "proficiency");
        Some(Language {
            name: name?,
            proficiency: proficiency?,
        })
    }
}

schema_field!(
    PersonalInfo,
    WorkExperience,
    Education,
    Skill,
    Certification,
    Language,
);
