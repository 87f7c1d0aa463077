use leptos::prelude::*;

/// Surface with rounded corners and shadow; `hoverable` lifts it on hover
#[component]
pub fn Card(
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional)]
    hoverable: bool,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let hover_class = if hoverable { "card--hoverable" } else { "" };

    view! {
        <div class=move || format!("card {} {}", hover_class, additional_class())>
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
