use crate::config::PageConfig;
use crate::shared::carousel::use_carousel;
use crate::shared::components::ui::{Badge, Button, ButtonVariant};
use crate::shared::icons::icon;
use crate::shared::reveal::RevealRegion;
use crate::shared::scroll::scroll_to_section;
use contracts::portfolio::{portfolio_content, Slide};
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let slides = portfolio_content().slides.clone();

    view! {
        <section id="hero" class="hero">
            <div class="hero__backdrop"></div>
            <div class="container hero__grid">
                <RevealRegion class="hero__copy">
                    <div class="animate-float">
                        <Badge>"Графический Дизайнер"</Badge>
                    </div>
                    <h1 class="hero__title">
                        "Создаю"
                        <span class="hero__accent">" визуальную"</span>
                        <br/>
                        "магию"
                    </h1>
                    <p class="hero__lead">
                        "Превращаю идеи в яркие визуальные решения. Специализируюсь на брендинге, логотипах и креативных материалах."
                    </p>
                    <div class="hero__actions">
                        <Button large=true on_click=Callback::new(|_| scroll_to_section("portfolio"))>
                            "Посмотреть работы"
                            {icon("arrow-right", 20)}
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            large=true
                            on_click=Callback::new(|_| scroll_to_section("contact"))
                        >
                            "Связаться"
                        </Button>
                    </div>
                </RevealRegion>
                <RevealRegion class="hero__media">
                    <HeroCarousel slides=slides />
                    <div class="hero__bubble hero__bubble--top animate-float"></div>
                    <div class="hero__bubble hero__bubble--bottom animate-float"></div>
                </RevealRegion>
            </div>
        </section>
    }
}

/// Слайды hero-секции с автопрокруткой и точками выбора
#[component]
fn HeroCarousel(slides: Vec<Slide>) -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();

    let carousel = match use_carousel(
        slides.len(),
        config.carousel_interval_ms,
        config.carousel_autoplay,
    ) {
        Ok(carousel) => carousel,
        Err(err) => {
            log::error!("hero: {}", err);
            return view! { <div class="carousel carousel--empty"></div> }.into_any();
        }
    };

    let dots = (0..slides.len())
        .map(|index| {
            view! {
                <button
                    class="carousel__dot"
                    class:carousel__dot--active=move || carousel.current() == index
                    aria-label=format!("Слайд {}", index + 1)
                    on:click=move |_| carousel.select(index)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            {slides
                .into_iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <figure
                            class="carousel__slide"
                            class:carousel__slide--active=move || carousel.current() == index
                        >
                            <img src=slide.image alt=slide.title.clone() />
                            <figcaption class="carousel__caption">
                                <span class="carousel__category">{slide.category.display_name()}</span>
                                <span>{slide.title}</span>
                            </figcaption>
                        </figure>
                    }
                })
                .collect_view()}
            <div class="carousel__dots">{dots}</div>
        </div>
    }
    .into_any()
}
