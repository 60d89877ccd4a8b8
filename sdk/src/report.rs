use serde::{Deserialize, Serialize};

use crate::{
    calculator::calculate,
    classification::{classify, Classification},
    types::BmiResult,
};

/// Outcome of a single BMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub weight: f64,

    pub height: f64,

    pub bmi: f64,

    pub classification: Classification,
}

impl BmiReport {
    pub fn new(weight: f64, height: f64) -> BmiResult<Self> {
        let bmi = calculate(weight, height)?;

        Ok(Self {
            weight,
            height,
            bmi,
            classification: classify(bmi),
        })
    }
}
