use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Заливка основным цветом
    #[default]
    Solid,
    Outline,
    /// Текстовая кнопка без фона, как ссылка "Подробнее"
    Link,
}

impl ButtonVariant {
    fn css_class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "button--solid",
            ButtonVariant::Outline => "button--outline",
            ButtonVariant::Link => "button--link",
        }
    }
}

fn button_classes(variant: ButtonVariant, large: bool, extra: Option<&str>) -> String {
    let mut classes = vec!["button", variant.css_class()];
    if large {
        classes.push("button--large");
    }
    classes.extend(extra.filter(|c| !c.is_empty()));
    classes.join(" ")
}

/// Кнопка страницы. Без `on_click` она только оформляет действие.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] large: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, large, class.as_deref());

    view! {
        <button
            type="button"
            class=classes
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::default(), false, None),
            "button button--solid"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, true, Some("hero__cta")),
            "button button--outline button--large hero__cta"
        );
        assert_eq!(
            button_classes(ButtonVariant::Link, false, Some("")),
            "button button--link"
        );
    }
}
