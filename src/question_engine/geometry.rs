//! Shape measurement helpers for the geometry side of the shape game.
//!
//! All dimensions must be finite and strictly positive; triangle side
//! lengths must additionally satisfy the triangle inequality.

use std::f64::consts::PI;

use crate::question_engine::arithmetic::{MathError, MathResult};

fn validate_positive(values: &[f64]) -> MathResult<()> {
    for &v in values {
        if !v.is_finite() {
            return Err(MathError::InvalidInput(format!("{} is not a number", v)));
        }
        if v <= 0.0 {
            return Err(MathError::InvalidInput(format!("{} must be positive", v)));
        }
    }
    Ok(())
}

fn validate_triangle(a: f64, b: f64, c: f64) -> MathResult<()> {
    validate_positive(&[a, b, c])?;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(MathError::InvalidInput(
            "the sum of any two triangle sides must exceed the third".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 2D shapes
// ---------------------------------------------------------------------------

pub fn circle_area(radius: f64) -> MathResult<f64> {
    validate_positive(&[radius])?;
    Ok(PI * radius * radius)
}

pub fn circle_circumference(radius: f64) -> MathResult<f64> {
    validate_positive(&[radius])?;
    Ok(2.0 * PI * radius)
}

pub fn square_area(side: f64) -> MathResult<f64> {
    validate_positive(&[side])?;
    Ok(side * side)
}

pub fn square_perimeter(side: f64) -> MathResult<f64> {
    validate_positive(&[side])?;
    Ok(4.0 * side)
}

pub fn rectangle_area(length: f64, width: f64) -> MathResult<f64> {
    validate_positive(&[length, width])?;
    Ok(length * width)
}

pub fn rectangle_perimeter(length: f64, width: f64) -> MathResult<f64> {
    validate_positive(&[length, width])?;
    Ok(2.0 * (length + width))
}

pub fn triangle_area(base: f64, height: f64) -> MathResult<f64> {
    validate_positive(&[base, height])?;
    Ok(0.5 * base * height)
}

/// Heron's formula from the three side lengths.
pub fn triangle_area_heron(a: f64, b: f64, c: f64) -> MathResult<f64> {
    validate_triangle(a, b, c)?;
    let s = (a + b + c) / 2.0;
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}

pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> MathResult<f64> {
    validate_triangle(a, b, c)?;
    Ok(a + b + c)
}

// ---------------------------------------------------------------------------
// 3D shapes
// ---------------------------------------------------------------------------

pub fn sphere_volume(radius: f64) -> MathResult<f64> {
    validate_positive(&[radius])?;
    Ok(4.0 / 3.0 * PI * radius.powi(3))
}

pub fn sphere_surface_area(radius: f64) -> MathResult<f64> {
    validate_positive(&[radius])?;
    Ok(4.0 * PI * radius * radius)
}

pub fn cube_volume(side: f64) -> MathResult<f64> {
    validate_positive(&[side])?;
    Ok(side.powi(3))
}

pub fn cube_surface_area(side: f64) -> MathResult<f64> {
    validate_positive(&[side])?;
    Ok(6.0 * side * side)
}
