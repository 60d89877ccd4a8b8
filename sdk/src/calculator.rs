use log::debug;

use crate::types::{BmiError, BmiResult};

/// Body Mass Index for a weight in kilograms and a height in meters.
///
/// Height is validated before weight, so a request with both wrong reports
/// the height.
pub fn calculate(weight: f64, height: f64) -> BmiResult<f64> {
    if !height.is_finite() || height <= 0.0 {
        return Err(BmiError::InvalidHeight(height));
    }

    if !weight.is_finite() || weight <= 0.0 {
        return Err(BmiError::InvalidWeight(weight));
    }

    let squared = height.powi(2);

    // underflows to zero for absurdly small heights
    if squared == 0.0 {
        return Err(BmiError::InvalidHeight(height));
    }

    let bmi = weight / squared;

    if !bmi.is_finite() {
        return Err(BmiError::OutOfRange { weight, height });
    }

    debug!("bmi: weight={weight} height={height} -> {bmi}");

    Ok(bmi)
}
