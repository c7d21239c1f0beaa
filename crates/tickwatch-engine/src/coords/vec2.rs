use core::ops::Mul;

/// 2D vector in logical pixels. Used for sizes (`x` = width, `y` = height).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Width over height. `None` when the height is not positive or either
    /// component is not finite.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        (self.is_finite() && self.y > 0.0).then(|| self.x / self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_wide_box() {
        assert_eq!(Vec2::new(300.0, 100.0).aspect(), Some(3.0));
    }

    #[test]
    fn aspect_rejects_zero_height() {
        assert_eq!(Vec2::new(300.0, 0.0).aspect(), None);
        assert_eq!(Vec2::new(f32::NAN, 10.0).aspect(), None);
    }
}
