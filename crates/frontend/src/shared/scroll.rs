use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Плавная прокрутка к секции по id; отсутствующая секция игнорируется
pub fn scroll_to_section(section_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
    else {
        log::debug!("scroll: section '{}' not found", section_id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
