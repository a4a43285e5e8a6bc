// The visible region of the complex plane
//
// Scale is complex units per display pixel. The imaginary axis points up the
// image so pixel rows increase as the imaginary part decreases.

use json::JsonValue;
use num::complex::Complex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub centre : Complex<f64>,
    pub scale : f64
}

impl Viewport {
    pub fn new(centre : Complex<f64>, scale : f64) -> Viewport {
        Viewport { centre, scale }
    }

    // `size` is the visible width in complex units
    pub fn from_json(input : &JsonValue, width : u32) -> Viewport {
        let centre_x = input["centre_x"].as_f64().unwrap_or(0.0);
        let centre_y = input["centre_y"].as_f64().unwrap_or(0.0);
        let size = input["size"].as_f64().unwrap_or(4.0);
        Viewport::new(Complex::new(centre_x, centre_y), size / width.max(1) as f64)
    }

    // Pixel coordinates may be fractional, (w/2, h/2) is the centre
    pub fn pixel_to_complex(&self, x : f64, y : f64, width : u32, height : u32) -> Complex<f64> {
        Complex::new(
            self.centre.re + (x - width as f64 / 2.0) * self.scale,
            self.centre.im - (y - height as f64 / 2.0) * self.scale
        )
    }

    pub fn complex_to_pixel(&self, z : Complex<f64>, width : u32, height : u32) -> (f64, f64) {
        (
            (z.re - self.centre.re) / self.scale + width as f64 / 2.0,
            (self.centre.im - z.im) / self.scale + height as f64 / 2.0
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_centre_maps_to_centre() {
        let viewport = Viewport::new(Complex::new(1.0, -2.0), 0.01);
        let z = viewport.pixel_to_complex(320.0, 240.0, 640, 480);
        assert_eq!(z, Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_imaginary_axis_up() {
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 0.5);
        let top = viewport.pixel_to_complex(50.0, 0.0, 100, 100);
        assert_abs_diff_eq!(top.im, 25.0);
        let right = viewport.pixel_to_complex(100.0, 50.0, 100, 100);
        assert_abs_diff_eq!(right.re, 25.0);
    }

    #[test]
    fn test_inverse_mapping() {
        let viewport = Viewport::new(Complex::new(0.3, 0.7), 0.004);
        let z = Complex::new(-0.1, 1.2);
        let (x, y) = viewport.complex_to_pixel(z, 800, 600);
        let back = viewport.pixel_to_complex(x, y, 800, 600);
        assert_abs_diff_eq!(back.re, z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(back.im, z.im, epsilon = 1e-12);
    }

    #[test]
    fn test_from_json_defaults() {
        let input = json::parse(r#"{"centre_x": 0.5}"#).unwrap();
        let viewport = Viewport::from_json(&input, 400);
        assert_eq!(viewport.centre, Complex::new(0.5, 0.0));
        assert_abs_diff_eq!(viewport.scale, 0.01);
    }
}
