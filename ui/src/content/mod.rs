//! Portfolio Content
//!
//! Everything the pages display about the site owner lives in one JSON
//! document compiled into the binary. It is parsed once when the site starts
//! and handed to the views through context as a read-only
//! `Rc<PortfolioContent>`.

mod types;

pub use types::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::services::errors::ContentError;

const BUILTIN_CONTENT: &str = include_str!("portfolio.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub mission_statement: String,
    pub bio: String,
    pub skills: Skills,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub contact_info: ContactInfo,
    pub navigation_items: Vec<NavItem>,
}

impl PortfolioContent {
    /// Content shipped with the site
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reject content the views cannot render sensibly
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.personal_info.name.trim().is_empty() {
            return Err(ContentError::MissingField {
                field: "personalInfo.name".to_string(),
            });
        }

        if !self.navigation_items.iter().any(|item| item.path == "/") {
            return Err(ContentError::MissingHomeNavigation);
        }

        check_unique_ids("education", self.education.iter().map(|e| e.id))?;
        check_unique_ids("projects", self.projects.iter().map(|p| p.id))?;
        check_unique_ids("services", self.services.iter().map(|s| s.id))?;

        Ok(())
    }

    /// Bio split on blank lines
    pub fn bio_paragraphs(&self) -> Vec<String> {
        self.bio
            .split("\n\n")
            .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }

    /// Uppercase initials of the owner's name, used for the logo and avatar
    pub fn initials(&self) -> String {
        self.personal_info
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn check_unique_ids(
    collection: &str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection: collection.to_string(),
                id,
            });
        }
    }
    Ok(())
}
