// Copyright 2020 TwoCookingMice

use meringue::core::properties::{Properties, Value};
use meringue::core::scene::{RenderMode, Scene};
use meringue::integrators::stokes::StokesIntegrator;
use meringue::integrators::uniform::UniformStokesIntegrator;
use meringue::io::exr_utils;
use meringue::math::spectrum::SpectralMode;
use meringue::renderers::simple::{Renderer, SimpleAovRenderer};

use std::env;
use std::sync::Arc;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.exr> [--width N] [--height N] [--spp N] [--seed N] \
                   [--mode mono|rgb|spectral] [--s0 V] [--s1 V] [--s2 V] [--s3 V]", args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut width: usize = 256;
    let mut height: usize = 256;
    let mut spp: u32 = 4;
    let mut seed: u64 = 0;
    let mut mode = SpectralMode::Rgb;
    let mut stokes = [1.0f32, 0.0, 0.0, 0.0];

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--mode" => {
                i += 1;
                mode = match args.get(i).map(|v| v.as_str()) {
                    Some("mono") => SpectralMode::Monochromatic,
                    Some("spectral") => SpectralMode::Spectral,
                    _ => SpectralMode::Rgb,
                };
            }
            "--s0" | "--s1" | "--s2" | "--s3" => {
                let slot = args[i].as_bytes()[3] - b'0';
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<f32>().ok()) {
                    stokes[slot as usize] = v;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let render_mode = RenderMode::new(mode, true);

    let mut source_props = Properties::new();
    source_props.set("s0", Value::Float(stokes[0]));
    source_props.set("s1", Value::Float(stokes[1]));
    source_props.set("s2", Value::Float(stokes[2]));
    source_props.set("s3", Value::Float(stokes[3]));
    let source = Arc::new(UniformStokesIntegrator::new(&source_props, render_mode));

    let mut props = Properties::new();
    props.put_object("integrator", source);
    let integrator = Arc::new(StokesIntegrator::new(&props, render_mode)
        .expect("failed to build stokes integrator"));

    let scene = Scene::new(render_mode);
    let renderer = SimpleAovRenderer::new(integrator, width, height, spp, seed);
    let frame = renderer.render(&scene);
    exr_utils::write_aov_layers(&frame, output_path);
}
