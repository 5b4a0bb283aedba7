/// A finite 2D polygon stored as a flat vertex loop `[x, y, x, y, ...]`.
///
/// The loop is open (the first vertex is not repeated at the end) and
/// counterclockwise for every polygon produced by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<f64>,
}

impl Polygon {
    pub fn new(vertices: Vec<f64>) -> Polygon {
        Polygon { vertices }
    }

    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    pub fn count_vertices(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn vertex(&self, index: usize) -> [f64; 2] {
        [self.vertices[index * 2], self.vertices[index * 2 + 1]]
    }

    /// True when the polygon has collapsed below a triangle.
    pub fn is_empty(&self) -> bool {
        self.count_vertices() < 3
    }

    pub fn area(&self) -> f64 {
        let n = self.vertices.len() / 2;
        if n < 3 { return 0.0; }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];
            area += xi * yj - xj * yi;
        }
        (area * 0.5).abs()
    }

    pub fn centroid(&self) -> [f64; 2] {
        let n = self.vertices.len() / 2;
        if n < 3 { return [0.0, 0.0]; }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];

            let cross = xi * yj - xj * yi;
            area += cross;
            cx += (xi + xj) * cross;
            cy += (yi + yj) * cross;
        }

        if area.abs() < 1e-9 {
            return [0.0, 0.0];
        }

        let factor = 1.0 / (3.0 * area);
        [cx * factor, cy * factor]
    }

    /// Even-odd ray-casting point-in-polygon test.
    ///
    /// Points exactly on the boundary are not guaranteed either way, which is
    /// why site assignment runs against pre-clip polygons.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len() / 2;
        if n < 3 { return false; }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let xi = self.vertices[i * 2];
            let yi = self.vertices[i * 2 + 1];
            let xj = self.vertices[j * 2];
            let yj = self.vertices[j * 2 + 1];

            if (yi > y) != (yj > y) {
                let x_cross = xi + (y - yi) / (yj - yi) * (xj - xi);
                if x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True when every turn of the loop bends the same way (or is straight).
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len() / 2;
        if n < 3 { return false; }

        let mut sign = 0.0f64;
        for i in 0..n {
            let a = self.vertex(i);
            let b = self.vertex((i + 1) % n);
            let c = self.vertex((i + 2) % n);
            let cross = (b[0] - a[0]) * (c[1] - b[1]) - (b[1] - a[1]) * (c[0] - b[0]);
            if cross.abs() < 1e-12 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// The loop with the first vertex repeated at the end, the convention of
    /// the persisted artifact.
    pub fn closed_loop(&self) -> Vec<f64> {
        let mut loop_vertices = self.vertices.clone();
        if !loop_vertices.is_empty() {
            loop_vertices.push(self.vertices[0]);
            loop_vertices.push(self.vertices[1]);
        }
        loop_vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])
    }

    #[test]
    fn test_square_metrics() {
        let p = unit_square();
        assert!((p.area() - 1.0).abs() < 1e-6);
        let c = p.centroid();
        assert!((c[0] - 0.5).abs() < 1e-6);
        assert!((c[1] - 0.5).abs() < 1e-6);
        assert!(p.is_convex());
    }

    #[test]
    fn test_contains() {
        let p = unit_square();
        assert!(p.contains(0.5, 0.5));
        assert!(p.contains(0.01, 0.99));
        assert!(!p.contains(1.5, 0.5));
        assert!(!p.contains(-0.01, 0.5));
    }

    #[test]
    fn test_non_convex() {
        let p = Polygon::new(vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 1.0, 0.5, 0.0, 2.0]);
        assert!(!p.is_convex());
    }

    #[test]
    fn test_closed_loop() {
        let p = unit_square();
        let l = p.closed_loop();
        assert_eq!(l.len(), 10);
        assert_eq!(&l[8..], &[0.0, 0.0]);
    }

    #[test]
    fn test_degenerate() {
        let p = Polygon::new(vec![0.0, 0.0, 1.0, 1.0]);
        assert!(p.is_empty());
        assert_eq!(p.area(), 0.0);
        assert!(!p.contains(0.5, 0.5));
    }
}
