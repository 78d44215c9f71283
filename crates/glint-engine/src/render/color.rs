use glam::Vec3A;

/// Sky color at the horizon.
pub const HORIZON: Vec3A = Vec3A::new(0.5, 0.7, 1.0);

/// Sky color at the zenith.
pub const ZENITH: Vec3A = Vec3A::ZERO;

/// Normal-visualization shading: maps a unit normal into [0, 1] per axis.
#[inline]
pub fn normal_color(normal: Vec3A) -> Vec3A {
    0.5 * (normal + 1.0)
}

/// Background gradient for rays that hit nothing.
///
/// Blends from [`HORIZON`] toward [`ZENITH`] on the ray's vertical
/// component. A miss is never an error; this is the defined fallback.
#[inline]
pub fn sky_color(direction: Vec3A) -> Vec3A {
    let t = 0.5 * (direction.y + 1.0);
    HORIZON.lerp(ZENITH, t)
}

/// Packs a linear [0, 1] color into `0xAABBGGRR`.
#[inline]
pub fn pack_rgba(color: Vec3A, alpha: f32) -> u32 {
    let r = (color.x * 255.0) as u8;
    let g = (color.y * 255.0) as u8;
    let b = (color.z * 255.0) as u8;
    let a = (alpha * 255.0) as u8;

    (u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(g) << 8) | u32::from(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_orders_channels_abgr() {
        assert_eq!(pack_rgba(Vec3A::new(1.0, 0.0, 0.0), 1.0), 0xFF00_00FF);
        assert_eq!(pack_rgba(Vec3A::new(0.0, 1.0, 0.0), 1.0), 0xFF00_FF00);
        assert_eq!(pack_rgba(Vec3A::new(0.0, 0.0, 1.0), 1.0), 0xFFFF_0000);
        assert_eq!(pack_rgba(Vec3A::ZERO, 0.0), 0x0000_0000);
    }

    #[test]
    fn normal_color_centers_the_unit_cube() {
        assert_eq!(normal_color(Vec3A::Z), Vec3A::new(0.5, 0.5, 1.0));
        assert_eq!(normal_color(Vec3A::NEG_Y), Vec3A::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn sky_blends_from_horizon_to_zenith() {
        // Straight down: t = 0, pure horizon color.
        assert_eq!(sky_color(Vec3A::NEG_Y), HORIZON);
        // Straight up: t = 1, pure zenith color.
        assert_eq!(sky_color(Vec3A::Y), ZENITH);
        // Level ray sits halfway.
        let level = sky_color(Vec3A::NEG_Z);
        assert!((level - HORIZON * 0.5).length() < 1e-6);
    }
}
