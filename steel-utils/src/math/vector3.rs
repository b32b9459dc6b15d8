//! Three component vectors.

use std::ops::{Add, Mul, Sub};

/// A three component vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector3<T> {
    /// The x component.
    pub x: T,
    /// The y component.
    pub y: T,
    /// The z component.
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Add<Output = T>> Vector3<T> {
    /// Component-wise addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Copy + Sub<Output = T>> Vector3<T> {
    /// Component-wise subtraction.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Copy + Mul<Output = T>> Vector3<T> {
    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Vector3<f64> {
    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// The integer cell containing this point.
    #[must_use]
    pub fn floor(&self) -> Vector3<i32> {
        Vector3::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_negative() {
        let v = Vector3::new(-0.5, 64.2, 3.999);
        assert_eq!(v.floor(), Vector3::new(-1, 64, 3));
    }

    #[test]
    fn test_lerp() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(2.0, 4.0, -6.0);
        assert_eq!(a.lerp(&b, 0.5), Vector3::new(1.0, 2.0, -3.0));
    }
}
