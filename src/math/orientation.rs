use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, OperationError, Result};

use super::{rotate_about, Vector3, TOLERANCE};

/// An orthonormal frame made of `forward`, `up` and the derived `right`.
///
/// The identity orientation looks down the negative Z axis with up along
/// positive Y, so `right` is positive X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    forward: Vector3,
    up: Vector3,
    right: Vector3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            forward: -Vector3::z(),
            up: Vector3::y(),
            right: Vector3::x(),
        }
    }
}

impl Orientation {
    /// Creates an orientation looking along `forward`.
    ///
    /// When `up` is omitted, the vector perpendicular to `forward` that lies
    /// closest to positive Y is used. Looking straight along ±Y gives an up
    /// of ±Z.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `forward` or `up` is
    /// zero-length, or [`OperationError::InvalidInput`] if `up` is not
    /// perpendicular to `forward`.
    pub fn new(forward: Vector3, up: Option<Vector3>) -> Result<Self> {
        let f_len = forward.norm();
        if f_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let forward = forward / f_len;

        let up = match up {
            Some(up) => {
                let u_len = up.norm();
                if u_len < TOLERANCE {
                    return Err(GeometryError::ZeroVector.into());
                }
                let up = up / u_len;
                if forward.dot(&up).abs() > 1e-9 {
                    return Err(OperationError::InvalidInput(format!(
                        "up {up:?} must be perpendicular to forward {forward:?}"
                    ))
                    .into());
                }
                up
            }
            None => default_up(&forward)?,
        };

        Ok(Self {
            forward,
            up,
            right: forward.cross(&up),
        })
    }

    /// The forward direction.
    #[must_use]
    pub fn forward(&self) -> &Vector3 {
        &self.forward
    }

    /// The up direction.
    #[must_use]
    pub fn up(&self) -> &Vector3 {
        &self.up
    }

    /// The right direction, `forward × up`.
    #[must_use]
    pub fn right(&self) -> &Vector3 {
        &self.right
    }

    /// Rotates about the forward axis. Positive angles roll to the right.
    ///
    /// # Errors
    ///
    /// Propagates rotation failures, which only occur if the frame has
    /// collapsed.
    pub fn roll(&mut self, angle: f64) -> Result<()> {
        self.up = rotate_about(&self.up, &self.forward, angle)?.normalize();
        self.right = self.forward.cross(&self.up);
        Ok(())
    }

    /// Rotates about the down axis. Positive angles yaw to the right.
    ///
    /// # Errors
    ///
    /// Propagates rotation failures, which only occur if the frame has
    /// collapsed.
    pub fn yaw(&mut self, angle: f64) -> Result<()> {
        self.forward = rotate_about(&self.forward, &self.up, -angle)?.normalize();
        self.right = self.forward.cross(&self.up);
        Ok(())
    }

    /// Rotates about the right axis. Positive angles pitch up.
    ///
    /// # Errors
    ///
    /// Propagates rotation failures, which only occur if the frame has
    /// collapsed.
    pub fn pitch(&mut self, angle: f64) -> Result<()> {
        self.forward = rotate_about(&self.forward, &self.right, angle)?.normalize();
        self.up = rotate_about(&self.up, &self.right, angle)?.normalize();
        Ok(())
    }

    /// Rotates the whole frame about an arbitrary axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis is zero-length.
    pub fn rotate(&mut self, axis: &Vector3, angle: f64) -> Result<()> {
        self.forward = rotate_about(&self.forward, axis, angle)?;
        self.up = rotate_about(&self.up, axis, angle)?;
        self.right = self.forward.cross(&self.up);
        Ok(())
    }
}

/// Up vector perpendicular to `forward` and as near to +Y as possible.
fn default_up(forward: &Vector3) -> Result<Vector3> {
    let flat = Vector3::new(forward.x, 0.0, forward.z);
    if flat.norm() < TOLERANCE {
        return Ok(if forward.y > 0.0 {
            Vector3::z()
        } else {
            -Vector3::z()
        });
    }
    let axis = flat.cross(&Vector3::y());
    Ok(rotate_about(forward, &axis, FRAC_PI_2)?.normalize())
}
