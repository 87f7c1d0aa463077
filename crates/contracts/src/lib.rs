pub mod enums;
pub mod portfolio;
