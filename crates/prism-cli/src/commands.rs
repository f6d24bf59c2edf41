//! Command implementations. Inputs are validated here so the math
//! preconditions never fire on user data.

use anyhow::{bail, Result};
use prism_math::{Real, Vector3};

/// Parse a vector argument written as `x,y,z` or `"x y z"`.
pub fn parse_vec3(s: &str) -> prism_math::Result<Vector3> {
    s.replace(',', " ").parse()
}

/// Normalize a user-supplied vector, rejecting zero and non-finite input.
pub fn unit(v: Vector3, what: &str) -> Result<Vector3> {
    if !v.is_finite() {
        bail!("{what} vector ({v}) has non-finite components");
    }
    if v.is_zero() {
        bail!("{what} vector ({v}) is too short to normalize");
    }
    let n = v.get_normalized();
    if n != v {
        log::debug!("normalized {what} ({v}) to ({n})");
    }
    Ok(n)
}

/// Reflect direction `dir` off a surface with normal `normal`.
pub fn reflect(normal: Vector3, dir: Vector3) -> Result<Vector3> {
    let n = unit(normal, "normal")?;
    let d = unit(dir, "direction")?;
    Ok(n.reflection(&d))
}

/// Refract direction `dir` through a surface with normal `normal`.
///
/// `Ok(None)` means the ray does not pass: grazing, back-face, or total
/// internal reflection.
pub fn refract(normal: Vector3, dir: Vector3, density: Real) -> Result<Option<Vector3>> {
    if !(density > 0.0 && density.is_normal()) {
        bail!("density must be a positive normal number, got {density}");
    }
    let n = unit(normal, "normal")?;
    let d = unit(dir, "direction")?;
    let out = n.transmission(&d, density);
    if out.is_none() {
        log::info!("no transmission at density {density}: cos(incidence) = {}", -n.dot(&d));
    }
    Ok(out)
}

/// Axis-aligned bounds of a point set as `(min, max)`.
pub fn bounds(points: &[Vector3]) -> Result<(Vector3, Vector3)> {
    if points.is_empty() {
        bail!("bounds needs at least one point");
    }
    let mut lo = Vector3::max();
    let mut hi = -Vector3::max();
    for p in points {
        lo.update_min(p);
        hi.update_max(p);
    }
    Ok((lo, hi))
}
