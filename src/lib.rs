//! CropWise: rule-based crop suitability scoring and field management advice.
//!
//! The core is a set of pure functions over a compiled-in crop knowledge base:
//! [`logic::recommend`], [`logic::soil_insight`], [`logic::prescription`] and
//! [`logic::roadmap`]. [`logic::AdvisoryEngine`] puts them behind the
//! [`logic::CropAdvisor`] seam so a remote advisor can be tried first.

pub mod config;
pub mod display;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{CropWiseError, Result};
