pub mod choreography;
pub mod constants;
pub mod effects;
pub mod form;
pub mod geometry;
pub mod hover;
pub mod modal;
pub mod motion;
pub mod nav;
pub mod page;
pub mod profile;
pub mod reveal;
pub mod scroll;

pub use constants::*;
pub use effects::*;
pub use geometry::*;
pub use motion::*;
pub use page::LandingPage;
pub use profile::{SiteConfig, SiteProfile};
pub use scroll::ScrollMetrics;
