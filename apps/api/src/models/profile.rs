use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Static résumé record. Read-only for the process lifetime; consumed by the
/// profile endpoint and injected into the assistant system prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub contact: ContactInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<ProfileProject>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

static PROFILE_JSON: &str = include_str!("../../data/profile.json");

impl Profile {
    /// Deserializes the embedded profile data. Fails only if the embedded
    /// JSON does not match the schema, which is a build-time mistake.
    pub fn load() -> Result<Self> {
        serde_json::from_str(PROFILE_JSON).context("embedded profile.json is invalid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses() {
        let profile = Profile::load().unwrap();
        assert!(!profile.name.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
    }
}
