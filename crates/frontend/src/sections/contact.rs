use crate::shared::components::ui::{Badge, Button, Card};
use crate::shared::icons::icon;
use crate::shared::reveal::RevealRegion;
use contracts::portfolio::portfolio_content;
use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let contacts = &portfolio_content().contacts;

    view! {
        <section id="contact" class="section section--primary">
            <div class="container">
                <RevealRegion class="section__header">
                    <Badge>"Контакты"</Badge>
                    <h2 class="section__title">"Давайте работать вместе"</h2>
                    <p class="section__lead">
                        "Готов воплотить ваши идеи в жизнь. Свяжитесь со мной для обсуждения проекта"
                    </p>
                </RevealRegion>
                <div class="contact__body">
                    <div class="contact__cards">
                        {contacts
                            .iter()
                            .map(|contact| {
                                view! {
                                    <RevealRegion>
                                        <Card hoverable=true class="contact__card">
                                            <div class="contact__icon">{icon(&contact.icon, 24)}</div>
                                            <h3 class="contact__title">{contact.title.clone()}</h3>
                                            <p class="contact__info">{contact.info.clone()}</p>
                                        </Card>
                                    </RevealRegion>
                                }
                            })
                            .collect_view()}
                    </div>
                    <RevealRegion>
                        <Card class="contact__form">
                            <ContactForm />
                        </Card>
                    </RevealRegion>
                </div>
            </div>
        </section>
    }
}

/// Форма только для вида: отправка не обрабатывается
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <div class="form__grid">
            <label class="form__field">
                <span class="form__label">"Имя"</span>
                <input type="text" class="form__input" placeholder="Ваше имя" />
            </label>
            <label class="form__field">
                <span class="form__label">"Email"</span>
                <input type="email" class="form__input" placeholder="your@email.com" />
            </label>
            <label class="form__field form__field--wide">
                <span class="form__label">"Сообщение"</span>
                <textarea
                    rows="4"
                    class="form__input form__textarea"
                    placeholder="Расскажите о вашем проекте..."
                ></textarea>
            </label>
            <div class="form__field--wide">
                <Button class="form__submit">
                    "Отправить сообщение"
                    {icon("send", 18)}
                </Button>
            </div>
        </div>
    }
}
