use std::fmt;

use serde::{Serialize, Serializer};

/// One step from a container into a nested field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a (possibly nested) field inside an entity instance.
///
/// Renders in dot/bracket notation: `personal_info.email`,
/// `work_experience[2].start_date`. The root renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(name.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(name) if i == 0 => f.write_str(name)?,
                Segment::Key(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_as_dollar() {
        assert_eq!(FieldPath::root().to_string(), "$");
    }

    #[test]
    fn test_nested_key_uses_dots() {
        let path = FieldPath::root().key("personal_info").key("email");
        assert_eq!(path.to_string(), "personal_info.email");
    }

    #[test]
    fn test_list_element_uses_brackets() {
        let path = FieldPath::root()
            .key("work_experience")
            .index(2)
            .key("start_date");
        assert_eq!(path.to_string(), "work_experience[2].start_date");
    }

    #[test]
    fn test_trailing_index() {
        let path = FieldPath::root().key("preferred_job_types").index(1);
        assert_eq!(path, "preferred_job_types[1]");
    }

    #[test]
    fn test_serializes_as_string() {
        let path = FieldPath::root().key("content").key("summary");
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!("content.summary")
        );
    }
}
