//! Synthetic carrier-image generator for integration tests.
//!
//! Stands in for the carrier-generator collaborator described as external
//! to this crate: a seeded, reproducible raster with a gradient background,
//! translucent ellipses, small gray patches, and thin lines, textured
//! enough across most of its area to keep the cost map's mean cost low.

use image::{Rgba, RgbaImage};

/// Small xorshift64* stream, good enough for test-fixture geometry, seeded
/// explicitly so carrier images are reproducible across test runs.
struct TestRng(u64);

impl TestRng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_u64() % (hi - lo).max(1) as u64) as u32
    }
}

fn blend(base: Rgba<u8>, over: [u8; 3], alpha: f32) -> Rgba<u8> {
    let mut out = base;
    for c in 0..3 {
        let b = base.0[c] as f32;
        let o = over[c] as f32;
        out.0[c] = (b * (1.0 - alpha) + o * alpha).round() as u8;
    }
    out
}

/// Build a `width x height` RGBA8 cover textured enough to drive the
/// schedule toward a broad, non-border spread of positions.
pub fn carrier_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height).max(1)) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    let mut rng = TestRng::new(seed);

    for _ in 0..64 {
        let cx = rng.range_u32(0, width) as i64;
        let cy = rng.range_u32(0, height) as i64;
        let rx = rng.range_u32(width / 20 + 1, width / 6 + 2) as i64;
        let ry = rng.range_u32(height / 20 + 1, height / 6 + 2) as i64;
        let color = [
            rng.range_u32(0, 256) as u8,
            rng.range_u32(0, 256) as u8,
            rng.range_u32(0, 256) as u8,
        ];
        let alpha = 0.3 + 0.5 * rng.next_f64() as f32;

        for dy in -ry..=ry {
            for dx in -rx..=rx {
                if (dx * dx) as f64 / (rx * rx).max(1) as f64
                    + (dy * dy) as f64 / (ry * ry).max(1) as f64
                    > 1.0
                {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                    continue;
                }
                let p = img.get_pixel(x as u32, y as u32);
                let blended = blend(*p, color, alpha);
                img.put_pixel(x as u32, y as u32, blended);
            }
        }
    }

    for _ in 0..220 {
        let cx = rng.range_u32(0, width);
        let cy = rng.range_u32(0, height);
        let gray = rng.range_u32(40, 220) as u8;
        let size = rng.range_u32(1, 4);
        for dy in 0..size {
            for dx in 0..size {
                let x = cx.saturating_add(dx).min(width - 1);
                let y = cy.saturating_add(dy).min(height - 1);
                img.put_pixel(x, y, Rgba([gray, gray, gray, 255]));
            }
        }
    }

    for _ in 0..16 {
        let horizontal = rng.next_u64() % 2 == 0;
        let shade = rng.range_u32(0, 256) as u8;
        if horizontal {
            let y = rng.range_u32(0, height);
            for x in 0..width {
                img.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
            }
        } else {
            let x = rng.range_u32(0, width);
            for y in 0..height {
                img.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
            }
        }
    }

    img
}
