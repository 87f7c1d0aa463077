use crate::shared::scroll::scroll_to_section;
use contracts::portfolio::portfolio_content;
use leptos::prelude::*;

/// Фиксированная навигация с плавной прокруткой к секциям
#[component]
pub fn Header() -> impl IntoView {
    let nav = &portfolio_content().nav;

    view! {
        <nav data-zone="header" class="nav">
            <div class="container nav__content">
                <span class="nav__brand">"Portfolio"</span>
                <div class="nav__links">
                    {nav
                        .iter()
                        .map(|section| {
                            let target = section.id.clone();
                            view! {
                                <button
                                    class="nav__link"
                                    on:click=move |_| scroll_to_section(&target)
                                >
                                    {section.label.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
