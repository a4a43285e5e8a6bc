// Domain colouring of a complex polynomial
//
// Every pixel of a reduced resolution raster is coloured by the phase of the
// polynomial at that point and given an alpha from the configured policy.
// The raster is then scaled up to the requested size in one go.

use std::io::{Error, ErrorKind};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use json::JsonValue;
use log::debug;
use num::complex::Complex;
use rayon::prelude::*;

use crate::complex::{argument, evaluate_polynomial, magnitude};
use crate::viewport::Viewport;

pub mod alpha;
pub mod lut;

use alpha::{AlphaPolicy, MagnitudeEdgeFade, PixelSample, RadialFade, alpha_to_byte};
use lut::{phase_lut, PhaseLut};

pub const DEFAULT_DOWNSAMPLE : u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaMode {
    Radial,
    Magnitude
}

impl AlphaMode {
    pub fn from_name(name : &str) -> Option<AlphaMode> {
        match name {
            "radial" => Some(AlphaMode::Radial),
            "magnitude" => Some(AlphaMode::Magnitude),
            _ => None
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    light_falloff : f64,
    pub alpha_mode : AlphaMode,
    pub downsample : u32
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            light_falloff : 50.0,
            alpha_mode : AlphaMode::Magnitude,
            downsample : DEFAULT_DOWNSAMPLE
        }
    }
}

impl RenderSettings {
    pub fn from_json(input : &JsonValue) -> std::io::Result<RenderSettings> {
        let mut settings = RenderSettings::default();
        if let Some(falloff) = input["light_falloff"].as_f64() {
            settings.set_light_falloff(falloff);
        }
        if let Some(name) = input["alpha"].as_str() {
            settings.alpha_mode = AlphaMode::from_name(name).ok_or_else(
                || Error::new(ErrorKind::InvalidData, "Unknown alpha mode")
            )?;
        }
        settings.downsample = input["downsample"].as_u32().unwrap_or(DEFAULT_DOWNSAMPLE).max(1);
        Ok(settings)
    }

    pub fn light_falloff(&self) -> f64 {
        self.light_falloff
    }

    pub fn set_light_falloff(&mut self, falloff : f64) {
        self.light_falloff = if falloff.is_nan() { 0.0 } else { falloff.clamp(0.0, 100.0) };
    }

    fn alpha_policy(&self, width : u32, height : u32) -> Box<dyn AlphaPolicy> {
        match self.alpha_mode {
            AlphaMode::Radial => Box::new(RadialFade::new(width, height, self.light_falloff)),
            AlphaMode::Magnitude => Box::new(MagnitudeEdgeFade::new(self.light_falloff))
        }
    }
}

pub struct Rasterizer {
    settings : RenderSettings,
    raster : RgbaImage
}

fn raster_size(target : u32, downsample : u32) -> u32 {
    ((target + downsample - 1) / downsample).max(1)
}

impl Rasterizer {
    pub fn new(settings : RenderSettings) -> Rasterizer {
        Rasterizer { settings, raster : RgbaImage::new(0, 0) }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    // The reduced resolution buffer from the last render
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    pub fn render(
        &mut self,
        target_width : u32,
        target_height : u32,
        viewport : &Viewport,
        coefficients : &[Complex<f64>]
    ) -> RgbaImage {
        self.fill_raster(target_width, target_height, viewport, coefficients);
        imageops::resize(&self.raster, target_width, target_height, FilterType::Triangle)
    }

    pub fn fill_raster(
        &mut self,
        target_width : u32,
        target_height : u32,
        viewport : &Viewport,
        coefficients : &[Complex<f64>]
    ) {
        let downsample = self.settings.downsample.max(1);
        let width = raster_size(target_width, downsample);
        let height = raster_size(target_height, downsample);
        if self.raster.dimensions() != (width, height) {
            debug!("Reallocating raster to {}x{}", width, height);
            self.raster = RgbaImage::new(width, height);
        }
        let policy = self.settings.alpha_policy(width, height);
        let policy = policy.as_ref();
        let lut = phase_lut();
        // Display pixels covered by one raster pixel, may be fractional at
        // the edges so work from the true ratio
        let step_x = target_width as f64 / width as f64;
        let step_y = target_height as f64 / height as f64;
        let row_bytes = width as usize * 4;
        let pixels : &mut [u8] = &mut self.raster;
        pixels.par_chunks_mut(row_bytes).enumerate().for_each(
            |(y, row)| {
                let py = (y as f64 + 0.5) * step_y;
                for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                    let px = (x as f64 + 0.5) * step_x;
                    let z = viewport.pixel_to_complex(px, py, target_width, target_height);
                    let value = evaluate_polynomial(coefficients, z);
                    let colour = lut.colour(argument(value));
                    let sample = PixelSample {
                        x : x as u32,
                        y : y as u32,
                        width,
                        height,
                        magnitude : magnitude(value)
                    };
                    let alpha = alpha_to_byte(policy.alpha(&sample));
                    pixel.copy_from_slice(&Rgba([colour.0[0], colour.0[1], colour.0[2], alpha]).0);
                }
            }
        );
    }
}

// Index into the phase table for a given point, exposed for overlays and tests
pub fn phase_index(coefficients : &[Complex<f64>], z : Complex<f64>) -> usize {
    PhaseLut::index(argument(evaluate_polynomial(coefficients, z)))
}
