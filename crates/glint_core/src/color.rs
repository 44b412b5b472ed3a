//! Linear/sRGB color pipeline and pixel packing.
//!
//! Light transport happens in linear space; the framebuffer stores
//! gamma-encoded sRGB. Conversion is applied exactly once per pixel, after
//! all samples have been averaged in linear space.

use glam::Vec3;

/// Convert a single sRGB-encoded channel to linear.
#[inline]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear channel to sRGB encoding.
#[inline]
pub fn linear_channel_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert an sRGB-encoded color to linear, element-wise.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(c.x),
        srgb_channel_to_linear(c.y),
        srgb_channel_to_linear(c.z),
    )
}

/// Convert a linear color to sRGB encoding, element-wise.
pub fn linear_to_srgb(c: Vec3) -> Vec3 {
    Vec3::new(
        linear_channel_to_srgb(c.x),
        linear_channel_to_srgb(c.y),
        linear_channel_to_srgb(c.z),
    )
}

/// Pack a linear color into a BGRA8888 pixel with opaque alpha.
///
/// The color is gamma-encoded, clamped to [0, 1], scaled to [0, 255] and
/// truncated. Channel order matches the external framebuffer format:
/// blue in the low byte, alpha in the high byte.
pub fn pack_bgra8(linear: Vec3) -> u32 {
    let srgb = linear_to_srgb(linear);
    let r = (srgb.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (srgb.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (srgb.z.clamp(0.0, 1.0) * 255.0) as u32;
    b | (g << 8) | (r << 16) | (0xFF << 24)
}

/// Unpack a BGRA8888 pixel into sRGB-encoded bytes in RGBA order.
pub fn bgra8_to_rgba_bytes(pixel: u32) -> [u8; 4] {
    let b = (pixel & 0xFF) as u8;
    let g = ((pixel >> 8) & 0xFF) as u8;
    let r = ((pixel >> 16) & 0xFF) as u8;
    let a = ((pixel >> 24) & 0xFF) as u8;
    [r, g, b, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_round_trip() {
        // linear_to_srgb(srgb_to_linear(c)) == c within 1e-5 across [0, 1]
        for i in 0..=1000 {
            let c = i as f32 / 1000.0;
            let back = linear_channel_to_srgb(srgb_channel_to_linear(c));
            assert!(
                (back - c).abs() < 1e-5,
                "round trip failed at {}: got {}",
                c,
                back
            );
        }
    }

    #[test]
    fn test_black_and_white_fixed_points() {
        assert_eq!(srgb_channel_to_linear(0.0), 0.0);
        assert!((srgb_channel_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(linear_channel_to_srgb(0.0), 0.0);
        assert!((linear_channel_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mid_gray_darker_in_linear() {
        let mid = srgb_channel_to_linear(0.5);
        assert!(mid < 0.5);
        assert!(mid > 0.1);
    }

    #[test]
    fn test_pack_channel_order() {
        // Over-bright red clamps to a full channel: alpha in the high byte,
        // then r, g, b
        let px = pack_bgra8(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(px, 0xFFFF0000);

        let px = pack_bgra8(Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(px, 0xFF0000FF);
    }

    #[test]
    fn test_pack_clamps_out_of_range() {
        // Over-bright radiance clamps to white, never wraps
        let px = pack_bgra8(Vec3::new(37.0, 2.0, 1.5));
        assert_eq!(px, 0xFFFFFFFF);

        // Negative values clamp to zero
        let px = pack_bgra8(Vec3::new(-1.0, -0.5, -100.0));
        assert_eq!(px, 0xFF000000);
    }

    #[test]
    fn test_unpack_matches_pack() {
        let px = pack_bgra8(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(bgra8_to_rgba_bytes(px), [255, 0, 0, 255]);
    }
}
