use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{
    AboutSection, Achievement, Article, Certification, CvFile, Experience, PortfolioDocument,
    Profile, Project, SkillCategory,
};

/// Partial document: every provided top-level field replaces the current one
/// wholesale, omitted fields are kept.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_files: Option<Vec<CvFile>>,
}

impl DocumentPatch {
    pub fn is_empty(&self) -> bool {
        *self == DocumentPatch::default()
    }

    pub fn apply_to(self, document: &mut PortfolioDocument) {
        if let Some(profile) = self.profile {
            document.profile = profile;
        }
        if let Some(about) = self.about {
            document.about = about;
        }
        if let Some(skills) = self.skills {
            document.skills = skills;
        }
        if let Some(experiences) = self.experiences {
            document.experiences = experiences;
        }
        if let Some(projects) = self.projects {
            document.projects = projects;
        }
        if let Some(achievements) = self.achievements {
            document.achievements = achievements;
        }
        if let Some(certifications) = self.certifications {
            document.certifications = certifications;
        }
        if let Some(articles) = self.articles {
            document.articles = articles;
        }
        if let Some(cv_files) = self.cv_files {
            document.cv_files = cv_files;
        }
    }
}
