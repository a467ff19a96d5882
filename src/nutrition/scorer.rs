//! Nutrition scoring
//!
//! Turns a validated `NutrientRecord` into macronutrient shares, energy
//! estimates and a bounded health score. Pure arithmetic, no state.

use crate::models::{
    DetailedStatus, EnergyCalculation, FoodInfo, HealthAssessment, HealthCategory,
    MacronutrientBreakdown, NutrientRecord, NutrientValues, NutritionReport, HEALTHY_THRESHOLD,
};

use super::rounding::round2;

/// kcal per gram of protein
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
/// kcal per gram of fat
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

const PROTEIN_WEIGHT: f64 = 0.25;
const IRON_WEIGHT: f64 = 2.0;
const VITAMIN_C_WEIGHT: f64 = 0.5;
const FAT_PENALTY: f64 = 0.1;

pub const MIN_HEALTH_SCORE: f64 = 0.0;
pub const MAX_HEALTH_SCORE: f64 = 100.0;

/// Unrounded scoring result. Every threshold decision is made on these
/// values; rounding happens only in `to_report`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionAssessment {
    pub total_macronutrients: f64,
    pub protein_percentage: f64,
    pub carbs_percentage: f64,
    pub fat_percentage: f64,
    pub from_protein: f64,
    pub from_carbs: f64,
    pub from_fat: f64,
    pub total_energy_calculated: f64,
    pub raw_score: f64,
    pub health_score: f64,
    pub detailed_status: DetailedStatus,
    pub is_healthy: bool,
    pub health_category: HealthCategory,
}

/// Score a record and produce the rounded report
pub fn score(record: &NutrientRecord) -> NutritionReport {
    assess(record).to_report(record)
}

/// Compute every metric for a record without rounding
pub fn assess(record: &NutrientRecord) -> NutritionAssessment {
    let total_macronutrients = record.protein + record.carbs + record.fat;

    // `> 0`, not `!= 0`: negative and NaN totals also give zero shares
    let share = |grams: f64| {
        if total_macronutrients > 0.0 {
            grams / total_macronutrients * 100.0
        } else {
            0.0
        }
    };

    let from_protein = record.protein * PROTEIN_KCAL_PER_GRAM;
    let from_carbs = record.carbs * CARBS_KCAL_PER_GRAM;
    let from_fat = record.fat * FAT_KCAL_PER_GRAM;

    let raw_score = raw_health_score(record);
    let health_score = clamp_score(raw_score);
    let is_healthy = health_score >= HEALTHY_THRESHOLD;

    NutritionAssessment {
        total_macronutrients,
        protein_percentage: share(record.protein),
        carbs_percentage: share(record.carbs),
        fat_percentage: share(record.fat),
        from_protein,
        from_carbs,
        from_fat,
        total_energy_calculated: from_protein + from_carbs + from_fat,
        raw_score,
        health_score,
        detailed_status: DetailedStatus::from_score(health_score),
        is_healthy,
        health_category: HealthCategory::from_is_healthy(is_healthy),
    }
}

/// Linear score before clamping
pub fn raw_health_score(record: &NutrientRecord) -> f64 {
    record.protein * PROTEIN_WEIGHT + record.iron * IRON_WEIGHT
        + record.vitamin_c * VITAMIN_C_WEIGHT
        - record.fat * FAT_PENALTY
}

/// Bound a raw score to [0, 100].
///
/// The lower bound only yields to values strictly above it, and the upper
/// bound only to values strictly below it, so NaN lands on 0.
pub fn clamp_score(raw: f64) -> f64 {
    let floored = if raw > MIN_HEALTH_SCORE {
        raw
    } else {
        MIN_HEALTH_SCORE
    };
    if floored < MAX_HEALTH_SCORE {
        floored
    } else {
        MAX_HEALTH_SCORE
    }
}

impl NutritionAssessment {
    /// Round for presentation and attach the record's passthrough fields
    pub fn to_report(&self, record: &NutrientRecord) -> NutritionReport {
        NutritionReport {
            energy_calculation: EnergyCalculation {
                from_carbs: round2(self.from_carbs),
                from_fat: round2(self.from_fat),
                from_protein: round2(self.from_protein),
                total_energy_calculated: round2(self.total_energy_calculated),
            },
            food_info: FoodInfo {
                category: record.category.clone(),
                name: record.food_name.clone(),
            },
            health_assessment: HealthAssessment {
                detailed_status: self.detailed_status,
                health_category: self.health_category,
                health_score: round2(self.health_score),
                is_healthy: self.is_healthy,
            },
            macronutrient_breakdown: MacronutrientBreakdown {
                carbs_percentage: round2(self.carbs_percentage),
                fat_percentage: round2(self.fat_percentage),
                protein_percentage: round2(self.protein_percentage),
                total_macronutrients: round2(self.total_macronutrients),
            },
            nutrient_values: NutrientValues {
                calories: round2(record.calories),
                carbs: round2(record.carbs),
                fat: round2(record.fat),
                iron: round2(record.iron),
                protein: round2(record.protein),
                vitamin_c: round2(record.vitamin_c),
            },
        }
    }
}
