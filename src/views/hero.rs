use leptos::prelude::*;
use reveal::{Direction, RevealOptions};

use crate::content::defaults::HeroContent;

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let heading = RevealOptions::new(Direction::Up).once();
    let tagline = RevealOptions::new(Direction::Fade).once().delay_ms(200);
    let actions = RevealOptions::new(Direction::Up).once().delay_ms(400);

    view! {
        <header class="hero" id="home">
            <div class="hero__content">
                <h1 class="hero__heading" data-reveal=heading.encode() style=heading.style()>
                    <span class="hero__greeting">{hero.greeting}</span>
                    <span class="hero__name">{hero.name}</span>
                </h1>
                <p class="hero__role">{hero.role}</p>
                <p class="hero__tagline" data-reveal=tagline.encode() style=tagline.style()>{hero.tagline}</p>
                <div class="hero__actions" data-reveal=actions.encode() style=actions.style()>
                    <a class="button button--primary" href=hero.primary_cta.href>{hero.primary_cta.label}</a>
                    <a class="button button--secondary" href=hero.secondary_cta.href>{hero.secondary_cta.label}</a>
                </div>
            </div>
        </header>
    }
}
