//! Elementary statistics behind the distribution chart.
//!
//! Both routines define their degenerate cases explicitly: fewer than two
//! samples or a constant sequence is an error, which the calling handler
//! surfaces as that chart's error response instead of producing NaNs.

/// Scales `values` to zero mean and unit variance using the sequence's own
/// statistics. Divides by the population standard deviation, matching the
/// usual machine-learning scaler convention.
pub fn standardize(values: &[f64]) -> Result<Vec<f64>, String> {
    if values.len() < 2 {
        return Err(format!(
            "Standardization needs at least 2 values, got {}",
            values.len()
        ));
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance == 0.0 {
        return Err("Standardization is undefined for a constant sequence".to_string());
    }
    let std_dev = variance.sqrt();
    Ok(values.iter().map(|v| (v - mean) / std_dev).collect())
}

/// Gaussian kernel density estimator with Scott's-rule bandwidth
/// (`n^(-1/5)` times the sample standard deviation).
pub struct GaussianKde {
    points: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    pub fn fit(points: &[f64]) -> Result<Self, String> {
        if points.len() < 2 {
            return Err(format!(
                "Density estimation needs at least 2 values, got {}",
                points.len()
            ));
        }
        let n = points.len() as f64;
        let mean = points.iter().sum::<f64>() / n;
        // Sample variance here, matching the reference estimator.
        let variance = points.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        if variance == 0.0 {
            return Err("Density estimation is undefined for a constant sequence".to_string());
        }
        Ok(GaussianKde {
            points: points.to_vec(),
            bandwidth: n.powf(-0.2) * variance.sqrt(),
        })
    }

    /// The estimated probability density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        let norm =
            (2.0 * std::f64::consts::PI).sqrt() * self.bandwidth * self.points.len() as f64;
        let sum: f64 = self
            .points
            .iter()
            .map(|p| (-((x - p) / self.bandwidth).powi(2) / 2.0).exp())
            .sum();
        sum / norm
    }
}
