use serde::{Deserialize, Serialize};

use crate::enums::ExperienceLevel;
use crate::validation::{Collector, ObjectReader, Schema};

/// Standalone skill taxonomy entry; references no other entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsMatrix {
    pub id: String,
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_relevance: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_levels: Option<Vec<ExperienceLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl SkillsMatrix {
    /// True when `level` is listed. An entry without levels applies to none.
    pub fn applies_to(&self, level: ExperienceLevel) -> bool {
        self.experience_levels
            .as_deref()
            .is_some_and(|levels| levels.contains(&level))
    }
}

impl Schema for SkillsMatrix {
    const ENTITY: &'static str = "SkillsMatrix";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let skill_name = obj.required(cx, "skill_name");
        let category = obj.optional(cx, "category");
        let related_skills = obj.optional(cx, "related_skills");
        let industry_relevance = obj.optional(cx, "industry_relevance");
        let experience_levels = obj.optional(cx, "experience_levels");
        let keywords = obj.optional(cx, "keywords");
        let created_at = obj.required(cx, "created_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(SkillsMatrix {
            id: id?,
            skill_name: skill_name?,
            category: category?,
            related_skills: related_skills?,
            industry_relevance: industry_relevance?,
            experience_levels: experience_levels?,
            keywords: keywords?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}
