use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub position: Point3<f64>, // Coordinates in Angstroms
    pub bonds: Vec<usize>,     // Identities of bonded atoms; recorded on the source side only
}

impl Atom {
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            bonds: Vec::new(),
        }
    }
}
