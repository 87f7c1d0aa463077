use crate::config::PageConfig;
use crate::layout::{Footer, Header};
use crate::sections::{
    AboutSection, ContactSection, HeroSection, PortfolioSection, ResumeSection, ServicesSection,
};
use crate::shared::reveal::provide_reveal_service;
use leptos::prelude::*;

/// Одностраничное портфолио.
///
/// Владеет сервисом появления регионов; карусель и фильтр живут в своих секциях.
/// При размонтировании наблюдение и таймер останавливаются через `on_cleanup`.
#[component]
pub fn Page() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();
    provide_reveal_service(config.reveal_options());

    view! {
        <div class="page">
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <PortfolioSection />
                <ServicesSection />
                <ResumeSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
