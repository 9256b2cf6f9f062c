use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::neuron::pattern::Pattern;
use crate::neuron::perceptron::Perceptron;

/// Size of the square grid sampled by `render_boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width and height in pixels; also the sampling resolution of `a` and `b`.
    pub size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { size: 256 }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig { reason: "render size must be at least 1".into() });
        }
        Ok(())
    }
}

/// Colors one sample of the decision surface.
///
/// Red follows the output, blue its complement, and a dim green channel
/// marks the region where the unit answers `1`.
pub fn boundary_color(output: f64, answer: u8) -> Rgb<u8> {
    let channel = |v: f64| (v.clamp(0.0, 255.0)).round() as u8;
    Rgb([
        channel(255.0 * output),
        channel(63.0 * f64::from(answer)),
        channel(255.0 * (1.0 - output)),
    ])
}

/// Paints the unit's response over the unit square of inputs `a` and `b`.
///
/// Pixel `(x, y)` is fed `{ a: x / size, b: (size - y) / size }`, so `a`
/// grows to the right and `b` grows upwards. Feeding overwrites the unit's
/// last input and output; weights only change for inputs never seen before.
pub fn render_boundary(perceptron: &mut Perceptron, config: &RenderConfig) -> Result<RgbImage> {
    config.validate()?;
    let size = config.size;
    let scale = f64::from(size);

    let mut img = RgbImage::new(size, size);
    for x in 0..size {
        for y in 0..size {
            let inputs = Pattern::from([
                ("a", f64::from(x) / scale),
                ("b", f64::from(size - y) / scale),
            ]);
            let output = perceptron.feed_forward(&inputs);
            img.put_pixel(x, y, boundary_color(output, perceptron.answer()));
        }
    }

    debug!(size, "decision boundary rendered");
    Ok(img)
}

/// Renders the boundary and writes it as a PNG.
pub fn save_boundary_png(perceptron: &mut Perceptron, config: &RenderConfig, path: &str) -> Result<()> {
    let img = render_boundary(perceptron, config)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_extremes() {
        assert_eq!(boundary_color(1.0, 1), Rgb([255, 63, 0]));
        assert_eq!(boundary_color(0.0, 0), Rgb([0, 0, 255]));
        assert_eq!(boundary_color(0.5, 0), Rgb([128, 0, 128]));
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut p = Perceptron::seeded(0);
        let err = render_boundary(&mut p, &RenderConfig { size: 0 }).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
