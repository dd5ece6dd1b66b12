//! Résumé data file model
//!
//! Loaded once before the scene starts and read-only afterwards. The file is
//! trusted: absent fields fall back to empty values instead of failing.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Contact details shown with the final summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// A single career milestone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeEntry {
    pub title: String,
    pub company: String,
    /// Free-form period, e.g. "2019 - 2023"
    pub duration: String,
    /// Bullet points, in display order
    pub achievements: Vec<String>,
}

/// Complete résumé file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub summary: String,
    pub contact: Contact,
    /// One token is placed per entry, in this order
    pub experience: Vec<ResumeEntry>,
}

impl ResumeData {
    /// Parse a résumé from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let data: ResumeData = serde_json::from_str(json)?;
        log::info!("Loaded résumé with {} entries", data.experience.len());
        Ok(data)
    }

    /// Number of entries (and therefore tokens)
    pub fn entry_count(&self) -> usize {
        self.experience.len()
    }

    /// Entry at a token index
    pub fn entry(&self, index: usize) -> Option<&ResumeEntry> {
        self.experience.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let json = r#"{
            "summary": "Builder of things.",
            "contact": { "email": "me@example.com", "phone": "555-0100" },
            "experience": [
                {
                    "title": "Engineer",
                    "company": "Acme",
                    "duration": "2019 - 2023",
                    "achievements": ["Shipped X", "Scaled Y"]
                }
            ]
        }"#;
        let data = ResumeData::from_json(json).unwrap();
        assert_eq!(data.entry_count(), 1);
        assert_eq!(data.contact.email, "me@example.com");
        assert_eq!(data.experience[0].achievements, vec!["Shipped X", "Scaled Y"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let data = ResumeData::from_json(r#"{ "summary": "Hi" }"#).unwrap();
        assert!(data.experience.is_empty());
        assert_eq!(data.contact, Contact::default());

        let data =
            ResumeData::from_json(r#"{ "experience": [{ "title": "Intern" }] }"#).unwrap();
        assert_eq!(data.experience[0].title, "Intern");
        assert!(data.experience[0].achievements.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(ResumeData::from_json("{ not json").is_err());
        assert!(ResumeData::from_json(r#"{ "experience": 3 }"#).is_err());
    }

    #[test]
    fn test_entry_lookup() {
        let data = ResumeData {
            experience: vec![ResumeEntry::default()],
            ..Default::default()
        };
        assert!(data.entry(0).is_some());
        assert!(data.entry(1).is_none());
    }
}
