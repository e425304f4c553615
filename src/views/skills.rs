use std::sync::Arc;

use leptos::prelude::*;
use reveal::{Direction, RevealOptions};

use super::notice::Notice;
use crate::content::Skill;
use crate::services::accent::Palette;
use crate::services::image::ImagePolicy;
use crate::services::section::Section;

const STAGGER_MS: u32 = 60;

#[component]
pub fn Skills(skills: Section<Skill>, images: Arc<ImagePolicy>) -> impl IntoView {
    view! {
        <section class="skills" id="skills">
            <h2 class="section__title">"Skills"</h2>
            {skills.notice.map(|message| view! { <Notice message=message /> })}
            <ul class="skills__grid">
                {skills
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        let reveal = RevealOptions::new(Direction::Scale).staggered(index, STAGGER_MS);
                        let style = format!("--accent: {}; {}", Palette::SKILL_CARDS.for_index(index), reveal.style());
                        let image = images.resolve(&skill.image);
                        let alt = skill.name.clone();
                        view! {
                            <li class="skill-card" data-reveal=reveal.encode() style=style>
                                <img class="skill-card__icon" src=image.href().to_owned() alt=alt loading="lazy" />
                                <span class="skill-card__name">{skill.name}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
