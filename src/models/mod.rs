//! Data models
//!
//! Request and response structures for nutrition scoring.

mod nutrient_record;
mod report;

pub use nutrient_record::{
    parse_real, to_real, NutrientRecord, ValidationError, ValidationResult, REQUIRED_FIELDS,
};
pub use report::{
    DetailedStatus, EnergyCalculation, FoodInfo, HealthAssessment, HealthCategory,
    MacronutrientBreakdown, NutrientValues, NutritionReport, ADEQUATE_THRESHOLD,
    HEALTHY_THRESHOLD, VERY_HEALTHY_THRESHOLD,
};
