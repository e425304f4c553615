use leptos::prelude::*;
use time::OffsetDateTime;

use crate::content::defaults::FooterContent;

#[component]
pub fn Footer(footer: FooterContent) -> impl IntoView {
    let year = OffsetDateTime::now_utc().year();

    view! {
        <footer class="footer" id="contact">
            <ul class="footer__socials">
                {footer
                    .socials
                    .into_iter()
                    .map(|link| view! {
                        <li><a href=link.href target="_blank" rel="noopener">{link.label}</a></li>
                    })
                    .collect_view()}
            </ul>
            <p class="footer__credits">
                "Built with "
                {footer
                    .credits
                    .into_iter()
                    .map(|link| view! { <a class="footer__credit" href=link.href>{link.label}</a> })
                    .collect_view()}
            </p>
            <p class="footer__copyright">{format!("© {year} {}. All rights reserved.", footer.owner)}</p>
        </footer>
    }
}
