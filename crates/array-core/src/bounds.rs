use glam::Vec3;

/// An axis-aligned bounding box defined by two opposite corners.
///
/// A box with any `min` component greater than the matching `max` component
/// is empty; [`Aabb::EMPTY`] is the identity for [`Aabb::union`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut out = Self::EMPTY;
        for p in points {
            out.enclose_point(p);
        }
        out
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns the smallest box that contains both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows this box in-place so that it contains `point`.
    pub fn enclose_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.size().z
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Applies `p * scale + translation` to every corner and re-encloses them.
    /// Negative scale components flip the box but keep it well-formed.
    pub fn transformed(&self, scale: Vec3, translation: Vec3) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::from_points(self.corners().into_iter().map(|c| c * scale + translation))
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
