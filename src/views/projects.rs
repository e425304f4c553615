//! Project cards and pagination links.

use std::sync::Arc;

use leptos::prelude::*;
use reqwest::Url;
use reveal::{Direction, RevealOptions};

use super::notice::Notice;
use crate::content::Project;
use crate::services::accent::Palette;
use crate::services::image::ImagePolicy;
use crate::services::pagination::Pagination;
use crate::services::section::Section;

const STAGGER_MS: u32 = 100;

/// Home page projects section.
#[component]
pub fn ProjectsSection(
    projects: Section<Project>,
    pages: Pagination,
    page: usize,
    images: Arc<ImagePolicy>,
    base_href: &'static str,
) -> impl IntoView {
    view! {
        <section class="projects" id="projects">
            <h2 class="section__title">"Projects"</h2>
            <ProjectGrid projects=projects pages=pages page=page images=images base_href=base_href />
        </section>
    }
}

/// One page of project cards followed by page links.
#[component]
pub fn ProjectGrid(
    projects: Section<Project>,
    pages: Pagination,
    page: usize,
    images: Arc<ImagePolicy>,
    base_href: &'static str,
) -> impl IntoView {
    let page = pages.clamp(page);
    let cards: Vec<Project> = pages.slice(&projects.items, page).to_vec();

    view! {
        {projects.notice.map(|message| view! { <Notice message=message /> })}
        <div class="projects__grid">
            {cards
                .into_iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard project=project index=index images=images.clone() /> })
                .collect_view()}
        </div>
        <PageLinks pages=pages page=page base_href=base_href />
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, images: Arc<ImagePolicy>) -> impl IntoView {
    let reveal = RevealOptions::new(Direction::Up).staggered(index, STAGGER_MS);
    let style = format!("--accent: {}; {}", Palette::PROJECT_CARDS.for_index(index), reveal.style());
    let image = images.resolve(&project.image);
    let href = project_href(&project.id);
    let alt = project.title.clone();

    view! {
        <article class="project-card" data-reveal=reveal.encode() style=style>
            <a class="project-card__link" href=href>
                <img class="project-card__image" src=image.href().to_owned() alt=alt loading="lazy" />
                <h3 class="project-card__title">{project.title}</h3>
            </a>
            <p class="project-card__description">{project.description}</p>
            <ul class="project-card__tech">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <li class="tag">{tech}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}

/// `?page=N` links; hidden when everything fits on one page.
#[component]
fn PageLinks(pages: Pagination, page: usize, base_href: &'static str) -> impl IntoView {
    let count = pages.page_count();
    if count <= 1 {
        return ().into_any();
    }
    let link = move |n: usize| page_href(base_href, n);
    let previous = pages.has_previous(page).then(|| link(page - 1));
    let next = pages.has_next(page).then(|| link(page + 1));

    view! {
        <nav class="pagination" aria-label="Projects pages">
            {previous.map(|href| view! { <a class="pagination__step" rel="prev" href=href>"Previous"</a> })}
            {(1..=count)
                .map(|n| {
                    view! {
                        <a
                            class="pagination__page"
                            class:active=n == page
                            aria-current=(n == page).then_some("page")
                            href=link(n)
                        >
                            {n}
                        </a>
                    }
                })
                .collect_view()}
            {next.map(|href| view! { <a class="pagination__step" rel="next" href=href>"Next"</a> })}
        </nav>
    }
    .into_any()
}

pub(crate) fn page_href(base_href: &str, page: usize) -> String {
    if base_href == "/" {
        format!("/?page={page}#projects")
    } else {
        format!("{base_href}?page={page}")
    }
}

/// `/projects/<id>` with the id percent-encoded as one path segment.
pub(crate) fn project_href(id: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/projects") else {
        return "/projects".to_owned();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    url.path().to_owned()
}
