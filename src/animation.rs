// Frames made by moving roots between keyframes
//
// Each keyframe is a full list of roots. Time runs over [0, 1) and is split
// evenly between successive keyframes, roots are interpolated linearly and
// expanded back into coefficients for every frame.

use json::JsonValue;
use num::complex::Complex;
use num::One;
use std::io::{Error, ErrorKind};

use crate::polynomial::{complex_from_json, complex_list_from_json, complex_list_to_json, roots_to_coefficients};

struct Keyframes {
    frames : Vec<Vec<Complex<f64>>>,
    leading : Complex<f64>
}

impl Keyframes {
    fn from_json(input : &JsonValue) -> std::io::Result<Keyframes> {
        if !input["keyframes"].is_array() {
            return Err(Error::new(ErrorKind::InvalidData, "Missing keyframes"))
        }
        let frames = input["keyframes"].members().map(
            complex_list_from_json
        ).collect::<std::io::Result<Vec<_>>>()?;
        let root_count = frames.first().map(|f| f.len()).ok_or_else(
            || Error::new(ErrorKind::InvalidData, "No keyframes")
        )?;
        if frames.iter().any(|f| f.len() != root_count) {
            return Err(Error::new(ErrorKind::InvalidData, "Keyframes need the same number of roots"))
        }
        let leading = complex_from_json(&input["leading"]).unwrap_or(Complex::one());
        Ok(Keyframes { frames, leading })
    }

    // Roots at time in [0, 1]
    fn roots_at(&self, time : f64) -> Vec<Complex<f64>> {
        if self.frames.len() == 1 {
            return self.frames[0].clone();
        }
        let spans = (self.frames.len() - 1) as f64;
        let position = time.clamp(0.0, 1.0) * spans;
        let index = (position.floor() as usize).min(self.frames.len() - 2);
        let local = position - index as f64;
        self.frames[index].iter().zip(self.frames[index + 1].iter()).map(
            |(from, to)| from + (to - from) * local
        ).collect()
    }
}

pub fn make_frames(input : &JsonValue) -> std::io::Result<Vec<JsonValue>> {
    let base = &input["base"];
    let frame_count = input["frames_count"].as_usize().unwrap_or(60).max(1);
    let keyframes = Keyframes::from_json(input)?;
    // Last frame lands on the final keyframe
    let per_frame = if frame_count > 1 { 1.0 / (frame_count - 1) as f64 } else { 0.0 };
    let frames = (0..frame_count).map(
        |i| {
            let mut frame = base.clone();
            let roots = keyframes.roots_at(i as f64 * per_frame);
            let coefficients = roots_to_coefficients(&roots, keyframes.leading);
            frame.remove("roots");
            frame["coefficients"] = complex_list_to_json(&coefficients);
            frame
        }
    ).collect();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::polynomial::Polynomial;

    use super::*;

    fn input() -> JsonValue {
        json::parse(r#"{
            "algorithm": "animation",
            "base": {"algorithm": "domain-colouring", "roots": [9], "size": 3.0},
            "frames_count": 3,
            "keyframes": [[1, -1], [[0, 1], [0, -1]]]
        }"#).unwrap()
    }

    #[test]
    fn test_frame_count_and_base_kept() {
        let frames = make_frames(&input()).unwrap();
        assert_eq!(frames.len(), 3);
        for frame in frames.iter() {
            assert_eq!(frame["algorithm"].as_str(), Some("domain-colouring"));
            assert_eq!(frame["size"].as_f64(), Some(3.0));
            assert!(frame["roots"].is_null());
        }
    }

    #[test]
    fn test_end_frames_hit_keyframes() {
        let frames = make_frames(&input()).unwrap();
        let first = Polynomial::from_json(&frames[0]).unwrap();
        // (z - 1)(z + 1)
        assert_abs_diff_eq!(first.coefficients()[0].re, -1.0);
        assert_abs_diff_eq!(first.coefficients()[1].re, 0.0);
        let last = Polynomial::from_json(&frames[2]).unwrap();
        // (z - i)(z + i) = z^2 + 1
        assert_abs_diff_eq!(last.coefficients()[0].re, 1.0);
        assert_abs_diff_eq!(last.coefficients()[0].im, 0.0);
    }

    #[test]
    fn test_midpoint_interpolated() {
        let keyframes = Keyframes::from_json(&input()).unwrap();
        let mid = keyframes.roots_at(0.5);
        assert_abs_diff_eq!(mid[0].re, 0.5);
        assert_abs_diff_eq!(mid[0].im, 0.5);
        assert_abs_diff_eq!(mid[1].re, -0.5);
        assert_abs_diff_eq!(mid[1].im, -0.5);
    }

    #[test]
    fn test_mismatched_keyframes_rejected() {
        let input = json::parse(r#"{"keyframes": [[1, 2], [3]]}"#).unwrap();
        assert!(make_frames(&input).is_err());
        let input = json::parse(r#"{"frames_count": 2}"#).unwrap();
        assert!(make_frames(&input).is_err());
    }
}
