use crate::shared::components::ui::Badge;
use crate::shared::reveal::RevealRegion;
use contracts::portfolio::about_image;
use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section section--muted">
            <div class="container">
                <RevealRegion class="about__grid">
                    <div class="about__photo">
                        <img src=about_image() alt="About me" />
                        <div class="about__experience">
                            <div class="about__experience-value">"5+"</div>
                            <div class="about__experience-label">"лет опыта"</div>
                        </div>
                    </div>
                    <div class="about__text">
                        <Badge variant="secondary">"Обо мне"</Badge>
                        <h2 class="section__title">"Превращаю идеи в визуальные решения"</h2>
                        <p>
                            "Привет! Я графический дизайнер с страстью к созданию уникальных визуальных решений. За 5+ лет работы помог более чем 100 брендам найти свой визуальный голос."
                        </p>
                        <p>
                            "Моя специализация — создание логотипов, брендинг и разработка визуальных материалов, которые не только красиво выглядят, но и эффективно решают бизнес-задачи."
                        </p>
                        <div class="about__stats">
                            <div class="about__stat">
                                <div class="about__stat-value">"150+"</div>
                                <div class="about__stat-label">"Проектов"</div>
                            </div>
                            <div class="about__stat">
                                <div class="about__stat-value about__stat-value--secondary">"50+"</div>
                                <div class="about__stat-label">"Клиентов"</div>
                            </div>
                        </div>
                    </div>
                </RevealRegion>
            </div>
        </section>
    }
}
