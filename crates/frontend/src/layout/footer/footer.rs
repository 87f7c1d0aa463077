use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::portfolio::portfolio_content;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let socials = &portfolio_content().socials;
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container">
                <div class="footer__top">
                    <div>
                        <h3 class="footer__brand">"Portfolio"</h3>
                        <p class="footer__tagline">"Графический дизайнер"</p>
                    </div>
                    <div class="footer__socials">
                        {socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href.clone() class="footer__social" aria-label=social.icon.clone()>
                                        {icon(&social.icon, 18)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="footer__bottom">
                    <p>{format!("© {} Portfolio. Все права защищены.", year)}</p>
                </div>
            </div>
        </footer>
    }
}
