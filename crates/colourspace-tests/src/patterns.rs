//! Sample pattern generation
//!
//! Patterns are 8-bit RGB triples expressed as `f64` in 0-255, the units the
//! RGB use cases take.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample pattern types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// RGB cube corners (8 colours)
    ColourCube,
    /// Neutral ramp 0-255
    Grayscale,
    /// Hue ramp at full saturation
    HueRamp,
    /// Random triples with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colours near the gamut boundary
    GamutBoundary,
}

/// Generate `count` samples of a pattern
pub fn generate_samples(pattern: SamplePattern, count: usize) -> Vec<[f64; 3]> {
    let to_f64 = |c: [u8; 3]| c.map(f64::from);

    match pattern {
        SamplePattern::ColourCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            (0..count).map(|i| to_f64(corners[i % 8])).collect()
        }
        SamplePattern::Grayscale => (0..count)
            .map(|i| {
                let v = if count > 1 {
                    (i as f64 / (count - 1) as f64 * 255.0).round()
                } else {
                    0.0
                };
                [v, v, v]
            })
            .collect(),
        SamplePattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f64 / count as f64) * 360.0;
                hsl_to_rgb(hue, 1.0, 0.5)
            })
            .collect(),
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut data = vec![0u8; count * 3];
            rng.fill_bytes(&mut data);
            data.chunks_exact(3)
                .map(|c| to_f64([c[0], c[1], c[2]]))
                .collect()
        }
        SamplePattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..count).map(|i| to_f64(tones[i % 6])).collect()
        }
        SamplePattern::GamutBoundary => {
            let colours: [[u8; 3]; 8] = [
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ];
            (0..count).map(|i| to_f64(colours[i % 8])).collect()
        }
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r, g, b].map(|v| ((v + m) * 255.0).round())
}
