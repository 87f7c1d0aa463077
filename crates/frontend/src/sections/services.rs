use crate::shared::components::ui::{Badge, Card, CardContent};
use crate::shared::icons::icon;
use crate::shared::reveal::RevealRegion;
use contracts::portfolio::portfolio_content;
use leptos::prelude::*;

#[component]
pub fn ServicesSection() -> impl IntoView {
    let services = &portfolio_content().services;

    view! {
        <section id="services" class="section section--secondary">
            <div class="container">
                <RevealRegion class="section__header">
                    <Badge variant="secondary">"Услуги"</Badge>
                    <h2 class="section__title">"Что я делаю"</h2>
                    <p class="section__lead">
                        "Полный спектр услуг в области графического дизайна и брендинга"
                    </p>
                </RevealRegion>
                <div class="services__grid">
                    {services
                        .iter()
                        .map(|service| {
                            view! {
                                <RevealRegion>
                                    <Card hoverable=true class="services__card">
                                        <CardContent>
                                            <div class="services__icon">{icon(&service.icon, 32)}</div>
                                            <h3 class="card__title">{service.title.clone()}</h3>
                                            <p class="card__text">{service.description.clone()}</p>
                                        </CardContent>
                                    </Card>
                                </RevealRegion>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
