use chrono::{Datelike, Utc};

use super::{AdminSection, DraftEntity, EditorError, NestedList, SingletonEntity};
use crate::modules::portfolio::domain::appearance::{AccentColor, AchievementIcon};
use crate::modules::portfolio::domain::cv_files;
use crate::modules::portfolio::domain::entities::{
    AboutSection, Achievement, Article, ArticleStatus, Certification, CvFile, Experience,
    PortfolioDocument, Profile, Project, SkillCategory,
};
use crate::modules::portfolio::domain::ids::generate_unique_id;
use crate::modules::portfolio::domain::patch::DocumentPatch;

fn fresh_id<'a, T>(existing: &'a [T], id: fn(&'a T) -> &'a str) -> String {
    generate_unique_id(existing.iter().map(id))
}

impl SingletonEntity for Profile {
    const SECTION: AdminSection = AdminSection::Profile;

    fn slice(document: &PortfolioDocument) -> &Self {
        &document.profile
    }

    fn into_patch(self) -> DocumentPatch {
        DocumentPatch {
            profile: Some(self),
            ..Default::default()
        }
    }
}

impl SingletonEntity for AboutSection {
    const SECTION: AdminSection = AdminSection::About;

    fn slice(document: &PortfolioDocument) -> &Self {
        &document.about
    }

    fn into_patch(self) -> DocumentPatch {
        DocumentPatch {
            about: Some(self),
            ..Default::default()
        }
    }
}

impl DraftEntity for SkillCategory {
    const SECTION: AdminSection = AdminSection::Skills;
    const POSITIONAL: bool = true;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.skills
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            skills: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(_existing: &[Self]) -> Self {
        Self {
            title: "New Category".to_string(),
            icon: "Code".to_string(),
            color: AccentColor::Gray.key().to_string(),
            skills: Vec::new(),
        }
    }

    fn id(&self) -> Option<&str> {
        None
    }

    fn list_mut(&mut self, list: NestedList) -> Option<&mut Vec<String>> {
        match list {
            NestedList::Skills => Some(&mut self.skills),
            _ => None,
        }
    }
}

impl DraftEntity for Experience {
    const SECTION: AdminSection = AdminSection::Experience;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.experiences
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            experiences: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |e| e.id.as_str()),
            title: "New Position".to_string(),
            company: "Company Name".to_string(),
            location: "Location".to_string(),
            period: "Start – End".to_string(),
            description: "Brief description".to_string(),
            highlights: Vec::new(),
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn list_mut(&mut self, list: NestedList) -> Option<&mut Vec<String>> {
        match list {
            NestedList::Highlights => Some(&mut self.highlights),
            _ => None,
        }
    }
}

impl DraftEntity for Project {
    const SECTION: AdminSection = AdminSection::Projects;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.projects
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            projects: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |p| p.id.as_str()),
            title: "New Project".to_string(),
            short_description: "Brief description".to_string(),
            full_description: "Full project description...".to_string(),
            ..Default::default()
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn list_mut(&mut self, list: NestedList) -> Option<&mut Vec<String>> {
        match list {
            NestedList::Technologies => Some(&mut self.technologies),
            NestedList::Images => Some(&mut self.images),
            NestedList::Highlights => Some(&mut self.highlights),
            _ => None,
        }
    }
}

impl DraftEntity for Achievement {
    const SECTION: AdminSection = AdminSection::Achievements;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.achievements
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            achievements: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |a| a.id.as_str()),
            icon: AchievementIcon::Trophy.key().to_string(),
            title: "New Achievement".to_string(),
            rank: "Rank".to_string(),
            subrank: "Subrank".to_string(),
            description: "Description".to_string(),
            color: AccentColor::Gold.key().to_string(),
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl DraftEntity for Certification {
    const SECTION: AdminSection = AdminSection::Certifications;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.certifications
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            certifications: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |c| c.id.as_str()),
            title: "New Certification".to_string(),
            issuer: "Issuer".to_string(),
            date: Utc::now().year().to_string(),
            link: "#".to_string(),
            skills: Vec::new(),
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn list_mut(&mut self, list: NestedList) -> Option<&mut Vec<String>> {
        match list {
            NestedList::Skills => Some(&mut self.skills),
            _ => None,
        }
    }
}

impl DraftEntity for Article {
    const SECTION: AdminSection = AdminSection::Articles;

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.articles
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            articles: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |a| a.id.as_str()),
            title: "New Article".to_string(),
            description: "Article description".to_string(),
            date: "Coming Soon".to_string(),
            read_time: "5 min read".to_string(),
            tags: Vec::new(),
            status: ArticleStatus::ComingSoon,
            url: None,
            cover_image: None,
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn list_mut(&mut self, list: NestedList) -> Option<&mut Vec<String>> {
        match list {
            NestedList::Tags => Some(&mut self.tags),
            _ => None,
        }
    }
}

impl DraftEntity for CvFile {
    const SECTION: AdminSection = AdminSection::Cv;
    const LOCKED_FIELDS: &'static [&'static str] = &["isActive"];

    fn slice(document: &PortfolioDocument) -> &[Self] {
        &document.cv_files
    }

    fn into_patch(items: Vec<Self>) -> DocumentPatch {
        DocumentPatch {
            cv_files: Some(items),
            ..Default::default()
        }
    }

    fn placeholder(existing: &[Self]) -> Self {
        Self {
            id: fresh_id(existing, |cv| cv.id.as_str()),
            name: "new-cv.pdf".to_string(),
            label: "New CV".to_string(),
            url: "/new-cv.pdf".to_string(),
            is_active: existing.is_empty(),
        }
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn remove(items: &mut Vec<Self>, index: usize) {
        let id = items[index].id.clone();
        cv_files::remove_and_promote(items, &id);
    }

    fn activate(items: &mut [Self], key: &str) -> Result<(), EditorError> {
        if cv_files::activate(items, key) {
            Ok(())
        } else {
            Err(EditorError::ItemNotFound(key.to_string()))
        }
    }
}
