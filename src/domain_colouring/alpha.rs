// How visible each raster pixel is, independent of its colour
//
// Both policies read the light falloff setting: 0 fades hard, 100 is wide
// enough that the fade is no longer noticeable.

// Width in raster pixels of the fade at each image edge
const EDGE_BAND : f64 = 4.0;
const RADIAL_BASE : f64 = 0.25;
const MAGNITUDE_BASE : f64 = 0.05;

// Everything the policy may look at for a single raster pixel
pub struct PixelSample {
    pub x : u32,
    pub y : u32,
    pub width : u32,
    pub height : u32,
    pub magnitude : f64
}

pub trait AlphaPolicy : Sync {
    fn alpha(&self, sample : &PixelSample) -> f64;
}

// Doubles every ten steps of falloff
fn falloff_gain(light_falloff : f64) -> f64 {
    2.0_f64.powf(light_falloff.clamp(0.0, 100.0) / 10.0)
}

fn pixel_centre(sample : &PixelSample) -> (f64, f64) {
    (sample.x as f64 + 0.5, sample.y as f64 + 0.5)
}

// Linear fade with distance from the raster centre
pub struct RadialFade {
    radius : f64
}

impl RadialFade {
    pub fn new(width : u32, height : u32, light_falloff : f64) -> RadialFade {
        let area = width as f64 * height as f64;
        RadialFade { radius : RADIAL_BASE * area.sqrt() * falloff_gain(light_falloff) }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl AlphaPolicy for RadialFade {
    fn alpha(&self, sample : &PixelSample) -> f64 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        let (x, y) = pixel_centre(sample);
        let dx = x - sample.width as f64 / 2.0;
        let dy = y - sample.height as f64 / 2.0;
        (1.0 - dx.hypot(dy) / self.radius).max(0.0)
    }
}

// Brightest near roots, faded out along the raster edges
pub struct MagnitudeEdgeFade {
    softness : f64
}

impl MagnitudeEdgeFade {
    pub fn new(light_falloff : f64) -> MagnitudeEdgeFade {
        MagnitudeEdgeFade { softness : MAGNITUDE_BASE * falloff_gain(light_falloff) }
    }

    fn edge(&self, sample : &PixelSample) -> f64 {
        let (x, y) = pixel_centre(sample);
        let nearest = x.min(sample.width as f64 - x)
            .min(y)
            .min(sample.height as f64 - y);
        (nearest / EDGE_BAND).clamp(0.0, 1.0)
    }
}

impl AlphaPolicy for MagnitudeEdgeFade {
    fn alpha(&self, sample : &PixelSample) -> f64 {
        let magnitude = if sample.magnitude.is_nan() { f64::INFINITY } else { sample.magnitude };
        let strength = self.softness / (magnitude + self.softness);
        strength * self.edge(sample)
    }
}

pub fn alpha_to_byte(alpha : f64) -> u8 {
    (alpha * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
