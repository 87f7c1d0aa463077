pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod resume;
pub mod services;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use portfolio::PortfolioSection;
pub use resume::ResumeSection;
pub use services::ServicesSection;
