// Lookup table from phase angle to colour
//
// Entry i covers raw hue i / LUT_SIZE. Hues are warped away from the
// secondaries and given a lightness profile so the phase bands read evenly,
// then converted from HSL.

use std::f64::consts::PI;
use std::sync::OnceLock;

use image::Rgb;

pub const LUT_SIZE : usize = 1024;

// Largest hue shift toward a primary, in turns
const SECONDARY_PULL : f64 = 0.02;
// Constant rotation toward orange
const WARM_BIAS : f64 = 0.015;
const SATURATION : f64 = 0.9;
const BASE_LIGHTNESS : f64 = 0.5;

// (centre hue, radius, lightness change)
const LIGHTNESS_BUMPS : [(f64, f64, f64); 4] = [
    (0.0, 0.12, 0.08),
    (2.0 / 3.0, 0.12, 0.10),
    (1.0 / 3.0, 0.12, -0.10),
    (1.0 / 6.0, 0.08, -0.08),
];

pub struct PhaseLut {
    colours : Vec<Rgb<u8>>
}

static LUT : OnceLock<PhaseLut> = OnceLock::new();

// Built on first use, shared by everyone after that
pub fn phase_lut() -> &'static PhaseLut {
    LUT.get_or_init(PhaseLut::build)
}

fn wrap_unit(v : f64) -> f64 {
    v.rem_euclid(1.0)
}

fn hue_distance(a : f64, b : f64) -> f64 {
    let d = wrap_unit(a - b);
    d.min(1.0 - d)
}

fn bump(hue : f64, centre : f64, radius : f64) -> f64 {
    let dist = hue_distance(hue, centre);
    if dist < radius {
        (1.0 + (PI * dist / radius).cos()) / 2.0
    } else {
        0.0
    }
}

// One at yellow, cyan and magenta, zero at the primaries
pub fn secondary_weight(raw_hue : f64) -> f64 {
    (1.0 - (6.0 * PI * raw_hue).cos()) / 2.0
}

// Odd about every secondary so hues either side move toward their nearest
// primary, vanishes on the secondaries and primaries themselves. An exact
// secondary sits halfway between two primaries so it has no nearer one to
// move to, and pushing it either way would tear the ramp there.
pub fn warp_hue(raw_hue : f64) -> f64 {
    let pull = -SECONDARY_PULL * (6.0 * PI * raw_hue).sin();
    wrap_unit(raw_hue + pull + WARM_BIAS)
}

pub fn lightness(hue : f64) -> f64 {
    let adjust : f64 = LIGHTNESS_BUMPS.iter().map(
        |(centre, radius, amount)| amount * bump(hue, *centre, *radius)
    ).sum();
    (BASE_LIGHTNESS + adjust).clamp(0.0, 1.0)
}

fn hue_to_channel(p : f64, q : f64, t : f64) -> f64 {
    let t = wrap_unit(t);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v : f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

// Hue in turns, saturation and lightness in [0, 1]
pub fn hsl_to_rgb(hue : f64, saturation : f64, lightness : f64) -> Rgb<u8> {
    if saturation == 0.0 {
        let grey = to_byte(lightness);
        return Rgb([grey, grey, grey]);
    }
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    Rgb([
        to_byte(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, hue)),
        to_byte(hue_to_channel(p, q, hue - 1.0 / 3.0))
    ])
}

impl PhaseLut {
    fn build() -> PhaseLut {
        let colours = (0..LUT_SIZE).map(
            |i| {
                let hue = warp_hue(i as f64 / LUT_SIZE as f64);
                hsl_to_rgb(hue, SATURATION, lightness(hue))
            }
        ).collect();
        PhaseLut { colours }
    }

    // Phase in (-pi, pi] maps linearly onto [0, LUT_SIZE)
    pub fn index(phase : f64) -> usize {
        let t = (phase + PI) / (2.0 * PI);
        let index = (t * LUT_SIZE as f64).floor();
        if index.is_nan() || index < 0.0 {
            0
        } else {
            (index as usize).min(LUT_SIZE - 1)
        }
    }

    pub fn colour(&self, phase : f64) -> Rgb<u8> {
        self.colours[PhaseLut::index(phase)]
    }

    pub fn entry(&self, index : usize) -> Rgb<u8> {
        self.colours[index]
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }
}
