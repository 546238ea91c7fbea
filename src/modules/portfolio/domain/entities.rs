use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The whole portfolio, persisted and exported as a single JSON blob.
///
/// Every field falls back to its empty value when missing so that partial or
/// legacy documents still deserialize.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub about: AboutSection,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub cv_files: Vec<CvFile>,
}

impl PortfolioDocument {
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The CV used as the download target, if any file is flagged active.
    pub fn active_cv(&self) -> Option<&CvFile> {
        self.cv_files.iter().find(|cv| cv.is_active)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub bio: String,
    pub profile_image: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub linkedin_url: String,
    pub github: String,
    pub github_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub education_title: String,
    pub education_description: String,
    pub professional_title: String,
    pub professional_description: String,
    pub closing_statement: String,
}

/// Skill categories have no id and are addressed by position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub title: String,
    /// Icon key, see `SkillIcon`
    pub icon: String,
    /// Accent key, see `AccentColor`
    pub color: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    /// Icon key, see `AchievementIcon`
    pub icon: String,
    pub title: String,
    pub rank: String,
    pub subrank: String,
    pub description: String,
    /// Accent key, see `AccentColor`
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleStatus {
    Published,
    #[default]
    ComingSoon,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub status: ArticleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CvFile {
    pub id: String,
    pub name: String,
    pub label: String,
    pub url: String,
    pub is_active: bool,
}
