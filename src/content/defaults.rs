//! Site content that does not come from the document store, plus the
//! fallback records each section shows when its collection is empty or the
//! store is unreachable.
//!
//! A `SiteContent` value is built once at startup (built-in values, or a YAML
//! file named by `CONTENT_DEFAULTS_PATH`) and injected through `AppState`.

#[cfg(test)]
#[path = "defaults_test.rs"]
mod tests;

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Milestone, Profile, Project, Skill};

#[derive(Debug, thiserror::Error)]
pub enum DefaultsError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: String, source: serde_yaml::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self { label: label.to_owned(), href: href.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub owner: String,
    pub socials: Vec<Link>,
    pub credits: Vec<Link>,
}

/// Static page content plus per-section fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub site_title: String,
    pub description: String,
    pub hero: HeroContent,
    pub footer: FooterContent,
    pub profile: Profile,
    pub milestones: Vec<Milestone>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Load from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid content.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DefaultsError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| DefaultsError::Read { path: display.clone(), source })?;
        serde_yaml::from_str(&raw).map_err(|source| DefaultsError::Parse { path: display, source })
    }

    /// Built-in content used when no defaults file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            site_title: "Portfolio".into(),
            description: "Frontend developer portfolio: experience, skills and selected projects.".into(),
            hero: HeroContent {
                greeting: "Hi, I'm".into(),
                name: "Portfolio Owner".into(),
                role: "Frontend Developer".into(),
                tagline: "Crafting beautiful, responsive web experiences with modern technologies".into(),
                primary_cta: Link::new("Contact Me", "#contact"),
                secondary_cta: Link::new("View Work", "#projects"),
            },
            footer: FooterContent {
                owner: "Portfolio Owner".into(),
                socials: vec![
                    Link::new("GitHub", "https://github.com/"),
                    Link::new("LinkedIn", "https://www.linkedin.com/"),
                    Link::new("Email", "mailto:hello@example.com"),
                ],
                credits: vec![
                    Link::new("Rust", "https://www.rust-lang.org/"),
                    Link::new("Axum", "https://github.com/tokio-rs/axum"),
                    Link::new("Leptos", "https://leptos.dev/"),
                ],
            },
            profile: Profile {
                name: "Portfolio Owner".into(),
                subtitle: "Frontend Developer".into(),
                bio1: "I build [responsive] interfaces that feel fast and look sharp on every screen.".into(),
                bio2: "Most of my work sits where design meets engineering: component systems, [animation] and performance.".into(),
                bio3: "When I am not shipping features I am learning new tools and refining old ones.".into(),
                image_url: "/assets/images/profile.svg".into(),
                resume_url: "#".into(),
            },
            milestones: vec![
                Milestone {
                    year: "04/03/2024-05/04/2025".into(),
                    title: "EVD Technology LLP".into(),
                    description: "Worked as a Frontend Developer, contributing to web application development and user interface enhancements. Collaborated with a small team to build scalable solutions and deliver responsive designs aligned with business goals.".into(),
                },
                Milestone {
                    year: "10/05/2025-05/07/2025".into(),
                    title: "Dheera Digital".into(),
                    description: "Worked as a Freelance Frontend Developer, building and maintaining web pages. Integrated APIs, created dynamic pages, added smooth animations, and ensured full responsiveness across devices.".into(),
                },
            ],
            skills: [
                ("React", "/assets/images/reactjs.svg"),
                ("Next.js", "/assets/images/next.svg"),
                ("JavaScript", "/assets/images/javascript.svg"),
                (
                    "TypeScript",
                    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4c/Typescript_logo_2020.svg/1200px-Typescript_logo_2020.svg.png",
                ),
                ("HTML", "/assets/images/html.svg"),
                ("CSS", "/assets/images/css.svg"),
                ("Material UI", "/assets/images/mui.svg"),
                ("Framer Motion", "/assets/images/framer.svg"),
                ("Tailwind CSS", "/assets/images/tailwind.svg"),
                ("GSAP", "https://dzakifadh.dev/img/gsap.png"),
                ("Redux", "/assets/images/redux.svg"),
            ]
            .into_iter()
            .map(|(name, image)| Skill { id: String::new(), name: name.into(), image: image.into() })
            .collect(),
            projects: vec![
                Project {
                    id: "1".into(),
                    title: "Project 1".into(),
                    description: "A great project description goes here".into(),
                    technologies: vec!["React".into(), "TypeScript".into()],
                    image: "/assets/images/project1.svg".into(),
                    link: "#".into(),
                    ..Project::default()
                },
                Project {
                    id: "2".into(),
                    title: "Project 2".into(),
                    description: "Another excellent project".into(),
                    technologies: vec!["Next.js".into(), "Tailwind CSS".into()],
                    image: "/assets/images/project2.svg".into(),
                    link: "#".into(),
                    ..Project::default()
                },
            ],
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}
