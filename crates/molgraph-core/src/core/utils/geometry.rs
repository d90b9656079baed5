use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
}

/// Componentwise min/max fold over a set of positions. Empty sets have no box.
pub fn bounding_box<'a, I>(positions: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let mut iter = positions.into_iter();
    let first = iter.next()?;
    let mut min = *first;
    let mut max = *first;
    for position in iter {
        min.x = min.x.min(position.x);
        min.y = min.y.min(position.y);
        min.z = min.z.min(position.z);
        max.x = max.x.max(position.x);
        max.y = max.y.max(position.y);
        max.z = max.z.max(position.z);
    }
    Some(BoundingBox { min, max })
}
