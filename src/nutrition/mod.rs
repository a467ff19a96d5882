//! Nutrition calculation module
//!
//! Scoring of a single food item and the rounding used for its report.

pub mod rounding;
pub mod scorer;

pub use rounding::round2;
pub use scorer::{assess, clamp_score, raw_health_score, score, NutritionAssessment};
