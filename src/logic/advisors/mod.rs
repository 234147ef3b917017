pub mod prescription;
pub mod roadmap;
pub mod soil_insight;

pub use prescription::prescription;
pub use roadmap::roadmap;
pub use soil_insight::soil_insight;
