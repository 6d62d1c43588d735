use serde::{Deserialize, Serialize};

use crate::enums::FileType;
use crate::errors::VersionExhausted;
use crate::models::Timestamped;
use crate::validation::{schema_field, Collector, ObjectReader, Schema};

/// A resume tailored for one job posting.
///
/// `ai_suggestions`, `file_url` and `file_type` are written by external
/// producers (suggestion engine, file renderer); this crate only carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResume {
    pub id: String,
    pub candidate_id: String,
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub content: ResumeContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<AiSuggestions>,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub file_type: FileType,
    pub created_at: String,
    pub updated_at: String,
}

/// The selected subset of a candidate's profile. The `selected_*` lists are
/// expected to name entries of the owning candidate; that is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub summary: String,
    pub highlighted_skills: Vec<String>,
    pub selected_experience: Vec<String>,
    pub selected_education: Vec<String>,
    pub selected_certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSuggestions {
    pub keywords: Vec<String>,
    pub improvement_points: Vec<String>,
    pub match_score: f64,
}

impl CustomResume {
    /// Replaces the content, bumps `version` and refreshes `updated_at`.
    /// Leaves the resume untouched once `version` is at `u32::MAX`.
    pub fn revise(&mut self, content: ResumeContent) -> Result<u32, VersionExhausted> {
        let next = self
            .version
            .checked_add(1)
            .ok_or_else(|| VersionExhausted { id: self.id.clone() })?;
        self.content = content;
        self.version = next;
        self.touch();
        Ok(next)
    }

    /// Records a rendered file produced for this resume.
    pub fn attach_file(&mut self, file_url: impl Into<String>, file_type: FileType) {
        self.file_url = Some(file_url.into());
        self.file_type = file_type;
        self.touch();
    }
}

impl Schema for CustomResume {
    const ENTITY: &'static str = "CustomResume";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let candidate_id = obj.required(cx, "candidate_id");
        let job_id = obj.required(cx, "job_id");
        let template_id = obj.optional(cx, "template_id");
        let content = obj.required(cx, "content");
        let ai_suggestions = obj.optional(cx, "ai_suggestions");
        let version = obj.required(cx, "version");
        let file_url = obj.optional(cx, "file_url");
        let file_type = obj.required(cx, "file_type");
        let created_at = obj.required(cx, "created_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(CustomResume {
            id: id?,
            candidate_id: candidate_id?,
            job_id: job_id?,
            template_id: template_id?,
            content: content?,
            ai_suggestions: ai_suggestions?,
            version: version?,
            file_url: file_url?,
            file_type: file_type?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

impl Schema for ResumeContent {
    const ENTITY: &'static str = "ResumeContent";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let summary = obj.required(cx, "summary");
        let highlighted_skills = obj.required(cx, "highlighted_skills");
        let selected_experience = obj.required(cx, "selected_experience");
        let selected_education = obj.required(cx, "selected_education");
        let selected_certifications = obj.required(cx, "selected_certifications");
        Some(ResumeContent {
            summary: summary?,
            highlighted_skills: highlighted_skills?,
            selected_experience: selected_experience?,
            selected_education: selected_education?,
            selected_certifications: selected_certifications?,
        })
    }
}

impl Schema for AiSuggestions {
    const ENTITY: &'static str = "AiSuggestions";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let keywords = obj.required(cx, "keywords");
        let improvement_points = obj.required(cx, "improvement_points");
        let match_score = obj.required(cx, "match_score");
        Some(AiSuggestions {
            keywords: keywords?,
            improvement_points: improvement_points?,
            match_score: match_score?,
        })
    }
}

schema_field!(ResumeContent, AiSuggestions);
