use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedIn")]
    pub linkedin: String,
    pub github: String,
    #[serde(rename = "resumePDF")]
    pub resume_pdf: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Skills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub tools: Vec<String>,
    pub languages: Vec<String>,
}

/// One card on the About page skills grid
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory<'a> {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'a [String],
}

impl Skills {
    pub fn categories(&self) -> [SkillCategory<'_>; 4] {
        [
            SkillCategory {
                icon: "🎨",
                title: "Frontend Development",
                skills: &self.frontend,
            },
            SkillCategory {
                icon: "⚙️",
                title: "Backend Development",
                skills: &self.backend,
            },
            SkillCategory {
                icon: "🔧",
                title: "Tools & Technologies",
                skills: &self.tools,
            },
            SkillCategory {
                icon: "💻",
                title: "Programming Languages",
                skills: &self.languages,
            },
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub demo_link: String,
    pub github_link: String,
    pub highlights: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub technologies: Vec<String>,
    /// "What you get" bullet points
    #[serde(default)]
    pub deliverables: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
    pub social_links: SocialLinks,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavItem {
    pub path: String,
    pub label: String,
}
