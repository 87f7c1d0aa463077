use crate::shared::components::ui::Badge;
use crate::shared::reveal::RevealRegion;
use contracts::portfolio::{portfolio_content, Skill};
use leptos::prelude::*;

#[component]
pub fn ResumeSection() -> impl IntoView {
    let content = portfolio_content();

    view! {
        <section id="resume" class="section">
            <div class="container">
                <RevealRegion class="section__header">
                    <Badge variant="muted">"Резюме"</Badge>
                    <h2 class="section__title">"Опыт и навыки"</h2>
                </RevealRegion>
                <div class="resume__grid">
                    <RevealRegion class="resume__column">
                        <h3 class="resume__heading">"Опыт работы"</h3>
                        {content
                            .experience
                            .iter()
                            .enumerate()
                            .map(|(index, job)| {
                                let marker = if index % 2 == 0 {
                                    "resume__marker"
                                } else {
                                    "resume__marker resume__marker--secondary"
                                };
                                view! {
                                    <div class="resume__job">
                                        <div class=marker></div>
                                        <div>
                                            <h4 class="resume__role">{job.role.clone()}</h4>
                                            <p class="resume__company">
                                                {format!("{} • {}", job.company, job.period)}
                                            </p>
                                            <p class="resume__summary">{job.summary.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </RevealRegion>
                    <RevealRegion class="resume__column">
                        <h3 class="resume__heading">"Навыки"</h3>
                        {content
                            .skills
                            .iter()
                            .map(|skill| view! { <SkillBar skill=skill.clone() /> })
                            .collect_view()}
                    </RevealRegion>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let level = skill.level.min(100);

    view! {
        <div class="skill">
            <div class="skill__header">
                <span class="skill__name">{skill.name}</span>
                <span class="skill__level">{format!("{}%", level)}</span>
            </div>
            <div class="skill__track">
                <div class="skill__fill" style=format!("width: {}%;", level)></div>
            </div>
        </div>
    }
}
