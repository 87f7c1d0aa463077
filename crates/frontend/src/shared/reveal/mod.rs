pub mod controller;
pub mod dom_observer;
pub mod region;

pub use controller::{
    IntersectionSample, RegionId, RevealController, RevealOptions, VisibilityObserver,
};
pub use dom_observer::{DomVisibilityObserver, RevealError};
pub use region::{provide_reveal_service, use_reveal, RevealRegion, RevealService};
