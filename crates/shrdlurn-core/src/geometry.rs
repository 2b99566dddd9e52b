use serde::{Deserialize, Serialize};

/// A point in board space. `z` points up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Rotates about the vertical axis through `origin` by `angle` radians.
    pub fn rotate_z(&self, origin: &Point3, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let px = self.x - origin.x;
        let py = self.y - origin.y;
        Self {
            x: px * cos - py * sin + origin.x,
            y: px * sin + py * cos + origin.y,
            z: self.z,
        }
    }

    /// Larger values lie further from an isometric viewer.
    pub fn depth(&self) -> f64 {
        self.x + self.y - 2.0 * self.z
    }
}

/// A planar polygon, one face of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub points: Vec<Point3>,
}

impl Face {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(dx, dy, dz)).collect(),
        }
    }

    pub fn rotate_z(&self, origin: &Point3, angle: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.rotate_z(origin, angle)).collect(),
        }
    }

    /// Mean depth of the vertices; 0 for an empty face.
    pub fn depth(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(Point3::depth).sum::<f64>() / self.points.len() as f64
    }
}

/// A closed solid made of faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub faces: Vec<Face>,
}

impl Shape {
    /// An axis-aligned rectangular prism with its minimum corner at `origin`.
    pub fn prism(origin: Point3, dx: f64, dy: f64, dz: f64) -> Self {
        let Point3 { x, y, z } = origin;

        let front = Face::new(vec![
            origin,
            Point3::new(x + dx, y, z),
            Point3::new(x + dx, y, z + dz),
            Point3::new(x, y, z + dz),
        ]);
        let side = Face::new(vec![
            origin,
            Point3::new(x, y, z + dz),
            Point3::new(x, y + dy, z + dz),
            Point3::new(x, y + dy, z),
        ]);
        let bottom = Face::new(vec![
            origin,
            Point3::new(x + dx, y, z),
            Point3::new(x + dx, y + dy, z),
            Point3::new(x, y + dy, z),
        ]);

        let faces = vec![
            front.reversed().translate(0.0, dy, 0.0),
            front,
            side.reversed().translate(dx, 0.0, 0.0),
            side,
            bottom.reversed().translate(0.0, 0.0, dz),
            bottom,
        ];
        Self { faces }
    }

    pub fn rotate_z(self, origin: &Point3, angle: f64) -> Self {
        Self {
            faces: self.faces.iter().map(|f| f.rotate_z(origin, angle)).collect(),
        }
    }

    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            faces: self.faces.iter().map(|f| f.translate(dx, dy, dz)).collect(),
        }
    }

    /// Faces ordered back to front, so later faces may be painted over earlier ones.
    pub fn ordered_faces(&self) -> Vec<&Face> {
        let mut faces: Vec<&Face> = self.faces.iter().collect();
        faces.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
        faces
    }

    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        self.faces.iter().flat_map(|f| f.points.iter())
    }

    /// Lowest-coordinate corner over all vertices.
    pub fn min_corner(&self) -> Option<Point3> {
        self.points().copied().reduce(|a, b| {
            Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
        })
    }
}
