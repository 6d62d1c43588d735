use serde::{Deserialize, Serialize};

use crate::enums::CompanySize;
use crate::validation::{schema_field, Collector, ObjectReader, Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub size: CompanySize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture_values: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Schema for Company {
    const ENTITY: &'static str = "Company";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let id = obj.required(cx, "id");
        let name = obj.required(cx, "name");
        let description = obj.optional(cx, "description");
        let industry = obj.optional(cx, "industry");
        let website = obj.optional(cx, "website");
        let logo_url = obj.optional(cx, "logo_url");
        let location = obj.optional(cx, "location");
        let size = obj.required(cx, "size");
        let founded_year = obj.optional(cx, "founded_year");
        let social_media = obj.optional(cx, "social_media");
        let culture_values = obj.optional(cx, "culture_values");
        let created_at = obj.required(cx, "created_at");
        let updated_at = obj.required(cx, "updated_at");

        Some(Company {
            id: id?,
            name: name?,
            description: description?,
            industry: industry?,
            website: website?,
            logo_url: logo_url?,
            location: location?,
            size: size?,
            founded_year: founded_year?,
            social_media: social_media?,
            culture_values: culture_values?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

impl Schema for SocialMedia {
    const ENTITY: &'static str = "SocialMedia";

    fn read(obj: &ObjectReader<'_>, cx: &mut Collector<'_>) -> Option<Self> {
        let linkedin = obj.optional(cx, "linkedin");
        let twitter = obj.optional(cx, "twitter");
        Some(SocialMedia {
            linkedin: linkedin?,
            twitter: twitter?,
        })
    }
}

schema_field!(SocialMedia);
