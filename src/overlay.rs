// Marks the found roots on top of a rendered image

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;

use crate::roots::RootSet;
use crate::viewport::Viewport;

const MARKER_RADIUS : i32 = 6;

pub fn marker_colour(converged : bool) -> Rgba<u8> {
    if converged {
        Rgba([255, 255, 255, 255])
    } else {
        Rgba([255, 40, 40, 255])
    }
}

// Returns how many markers were drawn, roots that are off the image or not
// finite are skipped
pub fn draw_roots(image : &mut RgbaImage, viewport : &Viewport, roots : &RootSet) -> usize {
    let (width, height) = image.dimensions();
    let colour = marker_colour(roots.converged);
    let mut drawn = 0;
    for root in roots.roots.iter() {
        if !(root.re.is_finite() && root.im.is_finite()) {
            continue;
        }
        let (x, y) = viewport.complex_to_pixel(*root, width, height);
        if x < 0.0 || y < 0.0 || x >= width as f64 || y >= height as f64 {
            continue;
        }
        draw_hollow_circle_mut(image, (x as i32, y as i32), MARKER_RADIUS, colour);
        drawn += 1;
    }
    drawn
}
