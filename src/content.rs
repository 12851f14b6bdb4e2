use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// RFC 3339 timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load_portfolio);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub roles: Vec<String>,
    pub tagline: String,
    /// Read aloud by the hero's "Listen" button.
    pub intro: String,
    pub bio: Vec<String>,
    pub facts: Vec<Fact>,
    pub resume_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repo: Option<String>,
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// devicon / extra icon class
    pub icon: String,
}

/// The embedded portfolio document, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    let portfolio = parse_portfolio(&file.data)?;
    log::debug!(
        "loaded portfolio content: {} projects, {} experience entries",
        portfolio.projects.len(),
        portfolio.experience.len()
    );
    Ok(portfolio)
}

pub fn parse_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio = serde_json::from_slice::<Portfolio>(data)
        .map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

impl Portfolio {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if let Some(skill) = self
            .skills
            .iter()
            .flat_map(|g| g.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(ContentError::Invalid(format!(
                "skill level for {} is above 100",
                skill.name
            )));
        }
        let periods = self
            .education
            .iter()
            .map(|e| (&e.institution, e.start, e.end))
            .chain(self.experience.iter().map(|e| (&e.company, e.start, e.end)));
        for (name, start, end) in periods {
            if end.is_some_and(|end| end < start) {
                return Err(ContentError::Invalid(format!("{name} ends before it starts")));
            }
        }
        Ok(())
    }

    /// Every project tag once, in first-seen order.
    pub fn project_tags(&self) -> Vec<String> {
        let mut tags = Vec::<String>::new();
        for tag in self.projects.iter().flat_map(|p| p.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    pub fn filtered_projects(&self, filter: &ProjectFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Tag(String),
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.tags.iter().any(|t| t == tag),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Tag(tag) => tag,
        }
    }
}

/// Copyright year for the footer, taken from the build timestamp.
pub fn build_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

/// "Jan 2021 – Present"
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| "Present".to_string());
    format!("{} – {}", start.format("%b %Y"), end)
}
