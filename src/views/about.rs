//! About section: portrait, biography and the experience timeline.

use std::sync::Arc;

use leptos::prelude::*;
use reveal::{Direction, RevealOptions};

use super::notice::Notice;
use crate::content::Profile;
use crate::services::highlight::{Segment, segments};
use crate::services::image::ImagePolicy;

#[component]
pub fn About(profile: Profile, notice: Option<String>, images: Arc<ImagePolicy>, children: Children) -> impl IntoView {
    let portrait = RevealOptions::new(Direction::Left).once();
    let bio = RevealOptions::new(Direction::Right).once().delay_ms(150);
    let image = images.resolve(&profile.image_url);
    let alt = profile.name.clone();
    let paragraphs: Vec<String> = [profile.bio1, profile.bio2, profile.bio3]
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    let resume_url = Some(profile.resume_url).filter(|url| !url.trim().is_empty());

    view! {
        <section class="about" id="about">
            <h2 class="section__title">"About Me"</h2>
            {notice.map(|message| view! { <Notice message=message /> })}
            <div class="about__body">
                <figure class="about__portrait" data-reveal=portrait.encode() style=portrait.style()>
                    <img src=image.href().to_owned() alt=alt loading="lazy" />
                </figure>
                <div class="about__bio" data-reveal=bio.encode() style=bio.style()>
                    <h3 class="about__name">{profile.name}</h3>
                    <p class="about__subtitle">{profile.subtitle}</p>
                    {paragraphs.into_iter().map(|text| view! { <Biography text=text /> }).collect_view()}
                    {resume_url.map(|href| view! {
                        <a class="button button--primary about__resume" href=href target="_blank" rel="noopener">
                            "Download Resume"
                        </a>
                    })}
                </div>
            </div>
            {children()}
        </section>
    }
}

/// One biography paragraph with `[bracketed]` phrases highlighted.
#[component]
fn Biography(text: String) -> impl IntoView {
    let parts = segments(&text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(plain) => plain.to_owned().into_any(),
            Segment::Highlight(phrase) => view! { <mark class="about__highlight">{phrase.to_owned()}</mark> }.into_any(),
        })
        .collect_view();
    view! { <p class="about__paragraph">{parts}</p> }
}
