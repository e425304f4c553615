//! Project detail page: header, cover image, description, features, and
//! challenges with their solutions.

use std::sync::Arc;

use leptos::prelude::*;
use reveal::{Direction, RevealOptions};

use super::notice::Notice;
use crate::content::{ChallengePair, Project};
use crate::services::accent::Palette;
use crate::services::image::ImagePolicy;

const STAGGER_MS: u32 = 80;

#[component]
pub fn ProjectDetail(project: Project, notice: Option<String>, images: Arc<ImagePolicy>) -> impl IntoView {
    let accent = Palette::DETAIL.for_id(&project.id);
    let image = images.resolve(&project.image);
    let body = project.body_text().to_owned();
    let (pairs, unpaired) = project.challenge_pairs();
    let cover = RevealOptions::new(Direction::Scale).once();
    let Project { title, technologies, link, github, demo_url, features, .. } = project;
    let alt = title.clone();

    view! {
        <main class="project-detail" style=format!("--accent: {accent}")>
            <nav class="page__back"><a href="/#projects">"← Back to projects"</a></nav>
            {notice.map(|message| view! { <Notice message=message /> })}
            <ProjectHeader title=title technologies=technologies link=link github=github demo_url=demo_url />
            <figure class="project-detail__image" data-reveal=cover.encode() style=cover.style()>
                <img src=image.href().to_owned() alt=alt />
            </figure>
            <p class="project-detail__body">{body}</p>
            <Features features=features />
            <Challenges pairs=pairs unpaired=unpaired />
        </main>
    }
}

#[component]
fn ProjectHeader(
    title: String,
    technologies: Vec<String>,
    link: String,
    github: Option<String>,
    demo_url: Option<String>,
) -> impl IntoView {
    let live = Some(link).filter(|href| !href.trim().is_empty() && href != "#");
    let reveal = RevealOptions::new(Direction::Down).once();

    view! {
        <header class="project-detail__header" data-reveal=reveal.encode() style=reveal.style()>
            <h1 class="project-detail__title">{title}</h1>
            <ul class="project-detail__tech">
                {technologies.into_iter().map(|tech| view! { <li class="tag">{tech}</li> }).collect_view()}
            </ul>
            <div class="project-detail__links">
                {live.map(|href| view! { <a class="button button--primary" href=href target="_blank" rel="noopener">"Visit"</a> })}
                {github.map(|href| view! { <a class="button button--secondary" href=href target="_blank" rel="noopener">"GitHub"</a> })}
                {demo_url.map(|href| view! { <a class="button button--secondary" href=href target="_blank" rel="noopener">"Demo"</a> })}
            </div>
        </header>
    }
}

#[component]
fn Features(features: Vec<String>) -> impl IntoView {
    if features.is_empty() {
        return ().into_any();
    }
    view! {
        <section class="project-detail__section project-detail__features">
            <h2>"Key Features"</h2>
            <ul>
                {features
                    .into_iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let reveal = RevealOptions::new(Direction::Left).staggered(index, STAGGER_MS);
                        view! { <li data-reveal=reveal.encode() style=reveal.style()>{feature}</li> }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

#[component]
fn Challenges(pairs: Vec<ChallengePair>, unpaired: Vec<String>) -> impl IntoView {
    if pairs.is_empty() && unpaired.is_empty() {
        return ().into_any();
    }
    let extra = (!unpaired.is_empty()).then(|| {
        view! {
            <div class="challenge challenge--unpaired">
                <h3>"Other solutions"</h3>
                <ul>{unpaired.into_iter().map(|solution| view! { <li>{solution}</li> }).collect_view()}</ul>
            </div>
        }
    });

    view! {
        <section class="project-detail__section project-detail__challenges">
            <h2>"Challenges & Solutions"</h2>
            {pairs
                .into_iter()
                .enumerate()
                .map(|(index, pair)| {
                    let reveal = RevealOptions::new(Direction::Up).staggered(index, STAGGER_MS);
                    view! {
                        <div class="challenge" data-reveal=reveal.encode() style=reveal.style()>
                            <p class="challenge__problem">{pair.challenge}</p>
                            {pair.solution.map(|solution| view! { <p class="challenge__solution">{solution}</p> })}
                        </div>
                    }
                })
                .collect_view()}
            {extra}
        </section>
    }
    .into_any()
}
