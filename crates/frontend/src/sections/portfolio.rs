//! Галерея работ с фильтром по категориям.

use crate::shared::category_filter::CategoryFilter;
use crate::shared::components::ui::{Badge, Button, ButtonVariant, Card, CardContent};
use crate::shared::icons::icon;
use crate::shared::reveal::RevealRegion;
use contracts::enums::CategorySelection;
use contracts::portfolio::{portfolio_content, PortfolioItem};
use leptos::prelude::*;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let content = portfolio_content();
    let filter = RwSignal::new(CategoryFilter::new());

    let visible = Memo::new(move |_| {
        filter.with(|f| {
            f.visible_items(&content.items)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let selections: Vec<CategorySelection> = std::iter::once(CategorySelection::All)
        .chain(
            content
                .used_categories()
                .into_iter()
                .map(CategorySelection::Only),
        )
        .collect();

    view! {
        <section id="portfolio" class="section">
            <div class="container">
                <RevealRegion class="section__header">
                    <Badge>"Портфолио"</Badge>
                    <h2 class="section__title">"Мои работы"</h2>
                    <p class="section__lead">
                        "Подборка лучших проектов в области брендинга и визуального дизайна"
                    </p>
                </RevealRegion>

                <div class="filter-bar" role="tablist">
                    {selections
                        .into_iter()
                        .map(|selection| {
                            let is_active = move || filter.with(|f| f.selected() == selection);
                            let count = CategoryFilter::count_for(&content.items, selection);
                            view! {
                                <button
                                    class="filter-bar__chip"
                                    class:filter-bar__chip--active=is_active
                                    role="tab"
                                    aria-selected=move || is_active().to_string()
                                    data-category=selection.code()
                                    on:click=move |_| filter.update(|f| f.set_category(selection))
                                >
                                    {selection.display_name()}
                                    <span class="filter-bar__count">{count}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show
                    when=move || !visible.with(|items| items.is_empty())
                    fallback=|| view! { <p class="portfolio__empty">"В этой категории пока нет работ"</p> }
                >
                    <div class="portfolio__grid">
                        <For
                            each=move || visible.get()
                            key=|item| item.id
                            children=move |item: PortfolioItem| view! { <PortfolioCard item=item /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <RevealRegion>
            <Card hoverable=true class="portfolio__card">
                <div class="portfolio__image">
                    <img src=item.image alt=item.title.clone() />
                    <div class="portfolio__overlay"></div>
                </div>
                <CardContent>
                    <div class="portfolio__meta">
                        <Badge variant="secondary">{item.category.display_name()}</Badge>
                        <span class="portfolio__year">{item.year}</span>
                    </div>
                    <h3 class="card__title">{item.title}</h3>
                    <p class="card__text">{item.description}</p>
                    <Button variant=ButtonVariant::Link class="portfolio__more">
                        "Подробнее"
                        {icon("arrow-right", 16)}
                    </Button>
                </CardContent>
            </Card>
        </RevealRegion>
    }
}
