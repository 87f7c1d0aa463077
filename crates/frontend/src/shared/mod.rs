pub mod carousel;
pub mod category_filter;
pub mod components;
pub mod icons;
pub mod reveal;
pub mod scroll;
