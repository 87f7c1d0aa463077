pub mod badge;
pub mod button;
pub mod card;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent};
