//! Nutrition report model
//!
//! The response payload of a scoring call. Fields are declared in
//! alphabetical order so serialized keys come out sorted.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) for "Sangat Sehat"
pub const VERY_HEALTHY_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) for "Sehat", and for `is_healthy`
pub const HEALTHY_THRESHOLD: f64 = 60.0;
/// Lower bound (inclusive) for "Cukup"
pub const ADEQUATE_THRESHOLD: f64 = 40.0;

/// Four-tier ordinal label derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailedStatus {
    #[serde(rename = "Sangat Sehat")]
    VeryHealthy,
    #[serde(rename = "Sehat")]
    Healthy,
    #[serde(rename = "Cukup")]
    Adequate,
    #[serde(rename = "Kurang Sehat")]
    LessHealthy,
}

impl DetailedStatus {
    /// Thresholds are checked from the top down; the first match wins
    pub fn from_score(score: f64) -> Self {
        if score >= VERY_HEALTHY_THRESHOLD {
            DetailedStatus::VeryHealthy
        } else if score >= HEALTHY_THRESHOLD {
            DetailedStatus::Healthy
        } else if score >= ADEQUATE_THRESHOLD {
            DetailedStatus::Adequate
        } else {
            DetailedStatus::LessHealthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailedStatus::VeryHealthy => "Sangat Sehat",
            DetailedStatus::Healthy => "Sehat",
            DetailedStatus::Adequate => "Cukup",
            DetailedStatus::LessHealthy => "Kurang Sehat",
        }
    }
}

/// Binary health verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCategory {
    #[serde(rename = "Sehat")]
    Healthy,
    #[serde(rename = "Tidak Sehat")]
    NotHealthy,
}

impl HealthCategory {
    pub fn from_is_healthy(is_healthy: bool) -> Self {
        if is_healthy {
            HealthCategory::Healthy
        } else {
            HealthCategory::NotHealthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCategory::Healthy => "Sehat",
            HealthCategory::NotHealthy => "Tidak Sehat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInfo {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientValues {
    pub calories: f64,
    pub carbs: f64,
    pub fat: f64,
    pub iron: f64,
    pub protein: f64,
    pub vitamin_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientBreakdown {
    pub carbs_percentage: f64,
    pub fat_percentage: f64,
    pub protein_percentage: f64,
    pub total_macronutrients: f64,
}

/// Energy in kcal, at 4 kcal/g protein and carbs, 9 kcal/g fat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyCalculation {
    pub from_carbs: f64,
    pub from_fat: f64,
    pub from_protein: f64,
    pub total_energy_calculated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub detailed_status: DetailedStatus,
    pub health_category: HealthCategory,
    pub health_score: f64,
    pub is_healthy: bool,
}

/// Rounded, serializable result of scoring one food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    pub energy_calculation: EnergyCalculation,
    pub food_info: FoodInfo,
    pub health_assessment: HealthAssessment,
    pub macronutrient_breakdown: MacronutrientBreakdown,
    pub nutrient_values: NutrientValues,
}
