use crate::core::data::vector3::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    #[must_use]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
