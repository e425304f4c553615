//! Server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are Leptos views rendered to HTML strings on the server; no
//! hydration runs in the browser. Elements that animate in carry a
//! `data-reveal` attribute which the `reveal` wasm binding picks up. Without
//! that binding every element stays visible.

mod about;
mod experience;
mod footer;
mod hero;
mod not_found;
mod notice;
mod project_detail;
mod projects;
mod skills;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::content::Project;
use crate::content::defaults::SiteContent;
use crate::services::image::ImagePolicy;
use crate::services::pagination::Pagination;
use crate::services::portfolio::{HomeContent, ProjectLookup};
use crate::services::section::Section;

use about::About;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use not_found::NotFound;
use project_detail::ProjectDetail;
use projects::{ProjectGrid, ProjectsSection};
use skills::Skills;

const STYLESHEET: &str = "/assets/site.css";
const BOOT_SCRIPT: &str = "/assets/boot.js";

/// Wrap a page body in the document shell.
fn render_document<V>(title: &str, description: &str, body: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    let title = title.to_owned();
    let description = description.to_owned();
    let html = Owner::new().with(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <meta name="description" content=description />
                    <title>{title}</title>
                    <link rel="stylesheet" href=STYLESHEET />
                    <script type="module" src=BOOT_SCRIPT></script>
                </head>
                <body>{body()}</body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

/// Home page: hero, about with experience, skills and one page of projects.
#[must_use]
pub fn home_page(site: &SiteContent, home: HomeContent, pages: Pagination, page: usize, images: Arc<ImagePolicy>) -> String {
    let profile = home.profile(&site.profile).clone();
    let about_notice = home.about.notice.clone();
    let hero = site.hero.clone();
    let footer = site.footer.clone();
    let HomeContent { milestones, skills, projects, .. } = home;
    let about_images = images.clone();
    let skill_images = images.clone();

    let body = move || view! {
        <Hero hero=hero />
        <main>
            <About profile=profile notice=about_notice images=about_images>
                <Experience milestones=milestones />
            </About>
            <Skills skills=skills images=skill_images />
            <ProjectsSection projects=projects pages=pages page=page images=images base_href="/" />
        </main>
        <Footer footer=footer />
    };
    render_document(&site.site_title, &site.description, body)
}

/// Project index with pagination.
#[must_use]
pub fn projects_page(
    site: &SiteContent,
    projects: Section<Project>,
    pages: Pagination,
    page: usize,
    images: Arc<ImagePolicy>,
) -> String {
    let footer = site.footer.clone();
    let body = move || view! {
        <main class="page page--projects">
            <nav class="page__back"><a href="/">"← Home"</a></nav>
            <h1 class="page__title">"Projects"</h1>
            <ProjectGrid projects=projects pages=pages page=page images=images base_href="/projects" />
        </main>
        <Footer footer=footer />
    };
    render_document(&format!("Projects | {}", site.site_title), &site.description, body)
}

/// Detail page for a found project, or the not-found page.
#[must_use]
pub fn project_page(site: &SiteContent, lookup: ProjectLookup, images: Arc<ImagePolicy>) -> Option<String> {
    let ProjectLookup { project, notice } = lookup;
    let project = project?;
    let title = format!("{} | {}", project.title, site.site_title);
    let description = project.description.clone();
    let footer = site.footer.clone();
    let body = move || view! {
        <ProjectDetail project=project notice=notice images=images />
        <Footer footer=footer />
    };
    Some(render_document(&title, &description, body))
}

/// 404 page.
#[must_use]
pub fn not_found_page(site: &SiteContent, message: &str) -> String {
    let message = message.to_owned();
    let footer = site.footer.clone();
    let body = move || view! {
        <NotFound message=message />
        <Footer footer=footer />
    };
    render_document(&format!("Not found | {}", site.site_title), &site.description, body)
}
