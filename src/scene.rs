use super::renderer::Instance;

/// Shape descriptions with a prebuilt GPU mesh.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shape {
    Cube,
}

/// Flat, unlit surface color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BasicMaterial {
    pub color: glam::Vec4,
}

impl Default for BasicMaterial {
    fn default() -> Self {
        Self {
            color: glam::Vec4::ONE,
        }
    }
}

impl BasicMaterial {
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: glam::Vec4::new(r, g, b, a),
        }
    }

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: glam::Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0,
        }
    }
}

/// A shape plus a surface description, positioned in the scene. Not mutated
/// after it is added to a [`Scene`].
#[derive(Debug, Clone)]
pub struct Object3d {
    pub shape: Shape,
    pub material: BasicMaterial,
    pub position: glam::Vec3,
    pub rotation: glam::Mat3,
    pub scale: f32,
}

impl Object3d {
    pub fn instance(&self) -> Instance {
        let rotation = glam::Quat::from_mat3(&self.rotation);
        let model_matrix = glam::Mat4::from_scale_rotation_translation(
            glam::Vec3::splat(self.scale),
            rotation,
            self.position,
        );
        Instance {
            model_matrix,
            color: self.material.color,
        }
    }
}

pub struct ObjectBuilder {
    pub shape: Shape,
    pub material: BasicMaterial,
    pub position: glam::Vec3,
    pub rotation: glam::Mat3,
    pub scale: f32,
}

impl ObjectBuilder {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            material: BasicMaterial::default(),
            position: glam::Vec3::default(),
            rotation: glam::Mat3::default(),
            scale: 1.0,
        }
    }

    pub fn with_position(self, position: glam::Vec3) -> Self {
        Self { position, ..self }
    }

    pub fn with_rotation(self, rotation: glam::Mat3) -> Self {
        Self { rotation, ..self }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_material(self, material: BasicMaterial) -> Self {
        Self { material, ..self }
    }

    pub fn build(self) -> Object3d {
        let ObjectBuilder {
            shape,
            material,
            position,
            rotation,
            scale,
        } = self;
        Object3d {
            shape,
            material,
            position,
            rotation,
            scale,
        }
    }
}

/// Top-level container of everything to be displayed.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Object3d>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: Object3d) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Object3d> {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let object = ObjectBuilder::new(Shape::Cube).build();
        assert_eq!(object.shape, Shape::Cube);
        assert_eq!(object.scale, 1.0);
        assert_eq!(object.position, glam::Vec3::ZERO);
        assert_eq!(object.material, BasicMaterial::default());
    }

    #[test]
    fn material_from_u8_normalizes() {
        let material = BasicMaterial::from_rgba_u8(0, 255, 0, 255);
        assert_eq!(material.color, glam::Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn scene_counts_added_objects() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.add(ObjectBuilder::new(Shape::Cube).build());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.iter().count(), 1);
    }

    #[test]
    fn instance_carries_position_and_color() {
        let object = ObjectBuilder::new(Shape::Cube)
            .with_position(glam::Vec3::new(1.0, 2.0, 3.0))
            .with_material(BasicMaterial::from_rgba(1.0, 0.0, 0.0, 1.0))
            .build();
        let instance = object.instance();
        assert_eq!(instance.model_matrix.w_axis.truncate(), object.position);
        assert_eq!(instance.color, glam::Vec4::new(1.0, 0.0, 0.0, 1.0));
    }
}
