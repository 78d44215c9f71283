use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec3A, Vec4};

/// Perspective camera with a precomputed per-pixel ray direction grid.
///
/// Directions are generated once against a fixed resolution and stay valid
/// until the next [`generate_ray_directions`](Camera::generate_ray_directions)
/// call; they are not regenerated when a render target resizes.
pub struct Camera {
    position: Vec3A,
    /// Yaw and pitch in degrees. No roll.
    yaw: f32,
    pitch: f32,

    projection: Mat4,
    view: Mat4,

    /// Row-major, indexed `x + y * width` of the last generation call.
    ray_directions: Vec<Vec3A>,
}

impl Camera {
    /// Creates a perspective camera. Depth maps to [0, 1], so the near
    /// plane unprojects at z = 0 and the far plane at z = 1. The view
    /// matrix starts at identity.
    pub fn perspective(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3A::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            projection: Mat4::perspective_rh(fov_deg.to_radians(), aspect, near, far),
            view: Mat4::IDENTITY,
            ray_directions: Vec::new(),
        }
    }

    pub fn set_perspective_projection(&mut self, fov_deg: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Mat4::perspective_rh(fov_deg.to_radians(), aspect, near, far);
    }

    pub fn position(&self) -> Vec3A {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3A) {
        self.position = position;
    }

    /// Sets yaw and pitch in degrees.
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Precomputes one world-space ray direction per pixel.
    ///
    /// The grid is dense, `width * height` entries, row-major by
    /// `x + y * width`, using the projection and view matrices as they are
    /// at the time of the call.
    pub fn generate_ray_directions(&mut self, width: u32, height: u32) {
        let size = Vec2::new(width as f32, height as f32);

        self.ray_directions.clear();
        self.ray_directions.resize((width * height) as usize, Vec3A::ZERO);

        for y in 0..height {
            for x in 0..width {
                let coords = Vec2::new(x as f32, y as f32);
                self.ray_directions[(x + y * width) as usize] =
                    self.screen_to_world_ray(coords, size);
            }
        }
    }

    /// Number of directions stored by the last generation call.
    pub fn ray_direction_count(&self) -> usize {
        self.ray_directions.len()
    }

    /// Direction for the pixel at `index = x + y * width`.
    ///
    /// # Panics
    /// Panics when `index` is outside the last generated grid. An
    /// out-of-range lookup is a caller bug and never wraps or clamps.
    pub fn ray_direction_at(&self, index: usize) -> Vec3A {
        assert!(
            index < self.ray_directions.len(),
            "ray direction index {index} out of range ({} generated)",
            self.ray_directions.len()
        );
        self.ray_directions[index]
    }

    /// Unprojects a pixel into a normalized world-space direction.
    ///
    /// Pixel coordinates map to NDC in [-1, 1] with y flipped for the
    /// top-left pixel origin. Near (z = 0) and far (z = 1) points are pushed
    /// through the inverse view-projection and perspective-divided; a zero w
    /// on either point yields the zero vector as the defined fallback.
    fn screen_to_world_ray(&self, coords: Vec2, size: Vec2) -> Vec3A {
        let x = (coords.x / size.x) * 2.0 - 1.0;
        let y = (coords.y / size.y) * 2.0 - 1.0;

        let inv = (self.projection * self.view).inverse();

        let ray_origin = inv * Vec4::new(x, -y, 0.0, 1.0);
        let ray_end = inv * Vec4::new(x, -y, 1.0, 1.0);

        if ray_origin.w == 0.0 || ray_end.w == 0.0 {
            return Vec3A::ZERO;
        }

        let ray_origin = ray_origin / ray_origin.w;
        let ray_end = ray_end / ray_end.w;

        Vec3A::from((ray_end - ray_origin).truncate().normalize())
    }

    /// Orientation from yaw/pitch only.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (-self.yaw).to_radians(),
            (-self.pitch).to_radians(),
            0.0,
        )
    }

    pub fn up(&self) -> Vec3A {
        self.orientation() * Vec3A::Y
    }

    pub fn right(&self) -> Vec3A {
        self.orientation() * Vec3A::X
    }

    pub fn forward(&self) -> Vec3A {
        self.orientation() * Vec3A::NEG_Z
    }

    /// Rebuilds the look-at view matrix from position and orientation.
    ///
    /// The up vector's sign flips when the camera's up dips below the
    /// horizon, keeping the look-at well-defined at the poles.
    pub fn recalculate_view_matrix(&mut self) {
        let yaw_sign = if self.up().y < 0.0 { -1.0 } else { 1.0 };

        let look_at = self.position + self.forward();
        self.view = Mat4::look_at_rh(
            Vec3::from(self.position),
            Vec3::from(look_at),
            Vec3::new(0.0, yaw_sign, 0.0),
        );
    }
}
