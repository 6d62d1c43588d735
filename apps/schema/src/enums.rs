//! Closed value sets used by the entity fields.
//!
//! Every enumeration serializes as its exact wire string and exposes its
//! members in declaration order through [`Enumeration::ALL`], so callers can
//! build UI choices or membership checks without hardcoding strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::UnknownVariant;
use crate::validation::{read_enumeration, Collector, FieldPath, FromField};

pub trait Enumeration: Sized + Copy + 'static {
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Case-sensitive lookup of a wire string.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == raw)
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

macro_rules! enumeration {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Enumeration for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| UnknownVariant {
                    enumeration: Self::NAME,
                    value: s.to_string(),
                })
            }
        }

        impl FromField for $name {
            fn from_field(value: &Value, path: &FieldPath, cx: &mut Collector<'_>) -> Option<Self> {
                read_enumeration(value, path, cx)
            }
        }
    };
}

enumeration! {
    CompanySize {
        Startup => "STARTUP",
        Smb => "SMB",
        Enterprise => "ENTERPRISE",
    }
}

enumeration! {
    /// Also used for a candidate's preferred job types.
    JobType {
        FullTime => "FULL_TIME",
        PartTime => "PART_TIME",
        Contract => "CONTRACT",
        Remote => "REMOTE",
    }
}

enumeration! {
    ExperienceLevel {
        Entry => "ENTRY",
        Mid => "MID",
        Senior => "SENIOR",
        Executive => "EXECUTIVE",
    }
}

enumeration! {
    JobStatus {
        Open => "OPEN",
        Closed => "CLOSED",
        Draft => "DRAFT",
    }
}

enumeration! {
    /// Flat status set. Any member may follow any other; no transition is guarded.
    ApplicationStatus {
        Draft => "DRAFT",
        Submitted => "SUBMITTED",
        Reviewed => "REVIEWED",
        Shortlisted => "SHORTLISTED",
        Rejected => "REJECTED",
        Hired => "HIRED",
    }
}

enumeration! {
    FileType {
        Pdf => "PDF",
        Docx => "DOCX",
    }
}

/// Name and members of one enumeration, for listing all choices at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationInfo {
    pub name: &'static str,
    pub members: Vec<&'static str>,
}

impl EnumerationInfo {
    pub fn of<E: Enumeration>() -> Self {
        Self {
            name: E::NAME,
            members: E::names(),
        }
    }
}

pub fn all_enumerations() -> Vec<EnumerationInfo> {
    vec![
        EnumerationInfo::of::<CompanySize>(),
        EnumerationInfo::of::<JobType>(),
        EnumerationInfo::of::<ExperienceLevel>(),
        EnumerationInfo::of::<JobStatus>(),
        EnumerationInfo::of::<ApplicationStatus>(),
        EnumerationInfo::of::<FileType>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_in_declaration_order() {
        assert_eq!(CompanySize::names(), vec!["STARTUP", "SMB", "ENTERPRISE"]);
        assert_eq!(
            JobType::names(),
            vec!["FULL_TIME", "PART_TIME", "CONTRACT", "REMOTE"]
        );
        assert_eq!(
            ExperienceLevel::names(),
            vec!["ENTRY", "MID", "SENIOR", "EXECUTIVE"]
        );
        assert_eq!(JobStatus::names(), vec!["OPEN", "CLOSED", "DRAFT"]);
        assert_eq!(
            ApplicationStatus::names(),
            vec!["DRAFT", "SUBMITTED", "REVIEWED", "SHORTLISTED", "REJECTED", "HIRED"]
        );
        assert_eq!(FileType::names(), vec!["PDF", "DOCX"]);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(JobType::parse("REMOTE"), Some(JobType::Remote));
        assert_eq!(JobType::parse("remote"), None);
        assert_eq!(JobType::parse("HYBRID"), None);
    }

    #[test]
    fn test_from_str_reports_enumeration_name() {
        let err = "ARCHIVED".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.enumeration, "JobStatus");
        assert_eq!(err.value, "ARCHIVED");
        assert_eq!("CLOSED".parse::<JobStatus>().unwrap(), JobStatus::Closed);
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_value(JobType::FullTime).unwrap(),
            serde_json::json!("FULL_TIME")
        );
        let parsed: ApplicationStatus = serde_json::from_str("\"SHORTLISTED\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::Shortlisted);
    }

    #[test]
    fn test_display_matches_wire_string() {
        for size in CompanySize::ALL {
            assert_eq!(size.to_string(), size.as_str());
        }
    }

    #[test]
    fn test_every_member_round_trips_through_parse() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(*status));
        }
        for file_type in FileType::ALL {
            assert_eq!(FileType::parse(file_type.as_str()), Some(*file_type));
        }
    }

    #[test]
    fn test_catalog_covers_all_six() {
        let catalog = all_enumerations();
        let names: Vec<_> = catalog.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "CompanySize",
                "JobType",
                "ExperienceLevel",
                "JobStatus",
                "ApplicationStatus",
                "FileType"
            ]
        );
        assert_eq!(catalog[4].members.len(), 6);
    }
}
