use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BezierError {
    #[error("Bezier name cannot be empty")]
    EmptyName,
    #[error("Control value {field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
}

/// Named cubic easing curve defined by two control points
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bezier {
    /// Name the curve is referenced by in animation declarations
    pub name: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bezier {
    /// Create a new curve, rejecting NaN and infinite control values
    pub fn new(
        name: impl Into<String>,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    ) -> Result<Self, BezierError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BezierError::EmptyName);
        }

        for (field, value) in [("X0", x0), ("Y0", y0), ("X1", x1), ("Y1", y1)] {
            if !value.is_finite() {
                return Err(BezierError::NonFiniteValue { field, value });
            }
        }

        Ok(Self { name, x0, y0, x1, y1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bezier() {
        let bezier = Bezier::new("easeOut", 0.05, 0.9, 0.1, 1.05).unwrap();
        assert_eq!(bezier.name, "easeOut");
        assert_eq!((bezier.x0, bezier.y0, bezier.x1, bezier.y1), (0.05, 0.9, 0.1, 1.05));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(matches!(
            Bezier::new("bad", 0.0, f64::NAN, 1.0, 1.0),
            Err(BezierError::NonFiniteValue { field: "Y0", .. })
        ));
        assert!(matches!(
            Bezier::new("bad", 0.0, 0.0, f64::INFINITY, 1.0),
            Err(BezierError::NonFiniteValue { field: "X1", .. })
        ));
        assert_eq!(
            Bezier::new("", 0.0, 0.0, 1.0, 1.0).unwrap_err(),
            BezierError::EmptyName
        );
    }
}
