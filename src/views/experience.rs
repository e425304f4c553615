//! Experience timeline inside the About section.

use leptos::prelude::*;
use reveal::{Direction, RevealOptions};

use super::notice::Notice;
use crate::content::Milestone;
use crate::services::milestone::TimelineEntry;
use crate::services::section::Section;

const STAGGER_MS: u32 = 120;

#[component]
pub fn Experience(milestones: Section<Milestone>) -> impl IntoView {
    let entries: Vec<TimelineEntry> = milestones.items.iter().map(TimelineEntry::from).collect();

    view! {
        <div class="experience" id="experience">
            <h3 class="experience__title">"Experience"</h3>
            {milestones.notice.map(|message| view! { <Notice message=message /> })}
            <ol class="timeline">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let reveal = RevealOptions::new(Direction::alternating(index)).staggered(index, STAGGER_MS);
                        view! {
                            <li
                                class="timeline__item"
                                class:active=entry.current
                                aria-current=entry.current.then_some("true")
                                data-reveal=reveal.encode()
                                style=reveal.style()
                            >
                                <span class="timeline__marker" aria-hidden="true"></span>
                                <p class="timeline__period">{entry.period}</p>
                                <h4 class="timeline__heading">{entry.title}</h4>
                                <p class="timeline__description">{entry.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
