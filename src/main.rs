// Load a json file that describes a polynomial and what to do with it:
// colour its domain, list its roots, or animate its roots between keyframes

use std::io::{Error, Read, ErrorKind};
use std::fs::{File, create_dir_all};
use std::env;
use std::path::Path;

use image::RgbaImage;
use json::JsonValue;
use log::info;

use polynomial_phase::{animation, overlay, roots};
use polynomial_phase::domain_colouring::{Rasterizer, RenderSettings};
use polynomial_phase::polynomial::Polynomial;
use polynomial_phase::viewport::Viewport;

fn make_directory_for_image(path_str : &str) -> std::io::Result<()> {
    let path = Path::new(path_str);
    if let Some(dir) = path.parent() {
        create_dir_all(dir)
    } else {
        Ok(())
    }
}

fn save_image(image : &RgbaImage, path : &str) -> std::io::Result<()> {
    make_directory_for_image(path)?;
    image.save(path).map_err(
        |_| Error::new(ErrorKind::InvalidData, "Couldn't write image")
    )
}

fn make_image(input : &JsonValue, rasterizer : &mut Rasterizer) -> std::io::Result<RgbaImage> {
    let polynomial = Polynomial::from_json(input)?;
    let width = input["resolution_x"].as_u32().unwrap_or(1024);
    let height = input["resolution_y"].as_u32().unwrap_or(1024);
    let viewport = Viewport::from_json(input, width);
    info!("Rendering {} at {}x{}", polynomial, width, height);
    let mut image = rasterizer.render(width, height, &viewport, polynomial.coefficients());
    if input["show_roots"].as_bool().unwrap_or(true) {
        let roots = roots::find_roots(&polynomial)?;
        let drawn = overlay::draw_roots(&mut image, &viewport, &roots);
        info!("Marked {} of {} roots", drawn, roots.roots.len());
    }
    Ok(image)
}

fn print_roots(input : &JsonValue) -> std::io::Result<()> {
    let polynomial = Polynomial::from_json(input)?;
    let roots = roots::find_roots(&polynomial)?;
    println!("p({}) = {}", polynomial.variable(), polynomial);
    for (i, root) in roots.roots.iter().enumerate() {
        println!("  {}_{} = {}", polynomial.variable(), i + 1, root);
    }
    println!("converged: {}", roots.converged);
    Ok(())
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    // Get file to use else default
    let in_filename = env::args().nth(1).unwrap_or("input.json".to_string());
    let out_filename = env::args().nth(2).unwrap_or("output.png".to_string());
    println!("Loading input file: {}", in_filename);
    let mut file = File::open(in_filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    println!("Parsing input file");
    let input = json::parse(&contents).map_err(
        |_| Error::new(ErrorKind::InvalidData, "Couldn't parse input")
    )?;
    let algorithm = input["algorithm"].as_str().unwrap_or("none");
    let out_filename_base = out_filename.strip_suffix(".png").unwrap_or(&out_filename);
    match algorithm {
        "roots" => print_roots(&input)?,
        "domain-colouring" => {
            let mut rasterizer = Rasterizer::new(RenderSettings::from_json(&input)?);
            let image = make_image(&input, &mut rasterizer)?;
            println!("Writing output to {}", out_filename);
            save_image(&image, &out_filename)?;
        },
        "animation" => {
            let frames = animation::make_frames(&input)?;
            // One rasterizer so the reduced buffer is reused between frames
            let mut rasterizer = Rasterizer::new(RenderSettings::from_json(&input["base"])?);
            for (i, frame) in frames.iter().enumerate() {
                println!("Frame {} of {}", i + 1, frames.len());
                let image = make_image(frame, &mut rasterizer)?;
                save_image(&image, &format!("{}/{}.png", out_filename_base, i))?;
            }
        },
        _ => return Err(Error::new(ErrorKind::InvalidData, "Unknown algorithm"))
    }
    Ok(())
}
