/// View/projection seam consumed by the renderer.
pub trait Camera {
    fn view_matrix(&self) -> &glam::Mat4;
    fn proj_matrix(&self) -> &glam::Mat4;
}

/// Fixed perspective camera: fov/aspect/near/far plus a world position and
/// look-at target. Configured once at startup; only the aspect ratio changes
/// afterwards, when the surface is resized.
#[derive(Debug)]
pub struct PerspectiveCamera {
    position: glam::Vec3,
    target: glam::Vec3,
    fovy: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
    view_matrix: glam::Mat4,
    proj_matrix: glam::Mat4,
}

impl Camera for PerspectiveCamera {
    fn view_matrix(&self) -> &glam::Mat4 {
        &self.view_matrix
    }
    fn proj_matrix(&self) -> &glam::Mat4 {
        &self.proj_matrix
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fovy_degrees: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let fovy = fovy_degrees.to_radians();
        let position = glam::Vec3::ZERO;
        let target = glam::Vec3::ZERO;
        Self {
            position,
            target,
            fovy,
            aspect,
            z_near,
            z_far,
            view_matrix: glam::Mat4::IDENTITY,
            proj_matrix: glam::Mat4::perspective_rh(fovy, aspect, z_near, z_far),
        }
    }

    pub fn position(&self) -> glam::Vec3 {
        self.position
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_position(&mut self, position: glam::Vec3) {
        self.position = position;
        self.update();
    }

    pub fn look_at(&mut self, target: glam::Vec3) {
        self.target = target;
        self.update();
    }

    pub fn update_aspect(&mut self, window_size: glam::UVec2) {
        self.aspect = if window_size.x == 0 || window_size.y == 0 {
            1.0
        } else {
            window_size.x as f32 / window_size.y as f32
        };
        self.proj_matrix =
            glam::Mat4::perspective_rh(self.fovy, self.aspect, self.z_near, self.z_far);
    }

    fn update(&mut self) {
        // Degenerate when position == target; callers offset the camera first.
        self.view_matrix = glam::Mat4::look_at_rh(self.position, self.target, glam::Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_window_size() {
        let mut cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0);
        cam.update_aspect(glam::UVec2::new(1920, 1080));
        assert_eq!(cam.aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn zero_size_falls_back_to_square_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.update_aspect(glam::UVec2::new(0, 1080));
        assert_eq!(cam.aspect(), 1.0);
    }

    #[test]
    fn offset_camera_views_origin_down_negative_z() {
        let mut cam = PerspectiveCamera::default();
        cam.set_position(glam::Vec3::new(0.0, 0.0, 5.0));
        let origin_in_view = cam.view_matrix().transform_point3(glam::Vec3::ZERO);
        assert!((origin_in_view.z + 5.0).abs() < 1e-6);
        assert!(origin_in_view.x.abs() < 1e-6);
        assert!(origin_in_view.y.abs() < 1e-6);
    }

    #[test]
    fn projection_changes_with_aspect() {
        let mut cam = PerspectiveCamera::new(60.0, 1.0, 0.1, 100.0);
        let before = *cam.proj_matrix();
        cam.update_aspect(glam::UVec2::new(200, 100));
        assert_ne!(before, *cam.proj_matrix());
    }
}
