/// Axis-aligned bounding rectangle for 2D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox { min_x, min_y, max_x, max_y }
    }

    /// Computes the bounding box of a flat `[x, y, x, y, ...]` site array.
    ///
    /// Only sites contribute to the box; vertices synthesized later to close
    /// infinite rays lie well outside it and must not widen it.
    pub fn from_sites(sites: &[f64]) -> BoundingBox {
        let mut b = BoundingBox::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for i in 0..sites.len() / 2 {
            let x = sites[i * 2];
            let y = sites[i * 2 + 1];
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        b
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Corner loop in counterclockwise order, as a flat vertex array.
    pub fn corners(&self) -> Vec<f64> {
        vec![
            self.min_x, self.min_y, // Bottom-Left
            self.max_x, self.min_y, // Bottom-Right
            self.max_x, self.max_y, // Top-Right
            self.min_x, self.max_y, // Top-Left
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sites() {
        let sites = vec![0.0, 0.0, 2.0, 1.0, -1.0, 3.0];
        let b = BoundingBox::from_sites(&sites);
        assert_eq!(b, BoundingBox::new(-1.0, 0.0, 2.0, 3.0));
        assert!((b.area() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains() {
        let b = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.contains(0.5, 0.5));
        assert!(b.contains(1.0, 0.0));
        assert!(!b.contains(1.5, 0.5));
    }

    #[test]
    fn test_corners_loop() {
        let b = BoundingBox::new(0.0, 0.0, 2.0, 1.0);
        let c = b.corners();
        assert_eq!(c.len(), 8);
        assert_eq!(&c[..2], &[0.0, 0.0]);
        assert_eq!(&c[4..6], &[2.0, 1.0]);
    }
}
