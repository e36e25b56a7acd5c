use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub(super) fn validate_positive(name: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(value)
}

pub(super) fn validate_color(name: &str, color: Color) -> ChartResult<Color> {
    color
        .validate()
        .map_err(|e| ChartError::InvalidConfig(format!("{name}: {e}")))?;
    Ok(color)
}

pub(super) fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(())
}
