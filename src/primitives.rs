use super::mesh::Vertex;

// Unit cube centered on the origin. Vertex color is white so the material
// color survives the multiply in the fragment shader.
pub const CUBE_VERTICES: &[Vertex] = &[
    Vertex::new(
        glam::Vec3::new(1.0, 1.0, 1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(0.577, 0.577, 0.577),
    ),
    Vertex::new(
        glam::Vec3::new(-1.0, 1.0, 1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(-0.577, 0.577, 0.577),
    ),
    Vertex::new(
        glam::Vec3::new(1.0, -1.0, 1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(0.577, -0.577, 0.577),
    ),
    Vertex::new(
        glam::Vec3::new(-1.0, -1.0, 1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(-0.577, -0.577, 0.577),
    ),
    Vertex::new(
        glam::Vec3::new(1.0, 1.0, -1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(0.577, 0.577, -0.577),
    ),
    Vertex::new(
        glam::Vec3::new(-1.0, 1.0, -1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(-0.577, 0.577, -0.577),
    ),
    Vertex::new(
        glam::Vec3::new(1.0, -1.0, -1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(0.577, -0.577, -0.577),
    ),
    Vertex::new(
        glam::Vec3::new(-1.0, -1.0, -1.0),
        glam::Vec3::ONE,
        glam::Vec3::new(-0.577, -0.577, -0.577),
    ),
];

#[rustfmt::skip]
pub const CUBE_INDICES: &[u16] = &[
    // Front
    0, 1, 3,
    0, 3, 2,
    // Back
    5, 4, 6,
    5, 6, 7,
    // Left
    1, 5, 7,
    1, 7, 3,
    // Right
    4, 0, 2,
    4, 2, 6,
    // Top
    4, 5, 1,
    4, 1, 0,
    // Bottom
    7, 6, 2,
    7, 2, 3,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_index_table_is_closed() {
        assert_eq!(CUBE_INDICES.len(), 36);
        let max = CUBE_INDICES.iter().max().copied().unwrap_or(0);
        assert!((max as usize) < CUBE_VERTICES.len());
    }
}
