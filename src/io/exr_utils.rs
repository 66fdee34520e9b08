/* Copyright 2020 @TwoCookingMice */

use crate::renderers::frame::AovFrame;

use exr::prelude::*;

// Write an AOV frame as a single-part OpenEXR image with one channel per
// auxiliary output, named after the integrator's channel list.
pub fn write_aov_layers(frame: &AovFrame, file_path: &str) {
    log::info!("Starting writing openexr AOV image: {}.", file_path);

    let width = frame.width();
    let height = frame.height();

    let mut channels = Vec::new();
    for (index, name) in frame.names().iter().enumerate() {
        let samples: Vec<f32> = (0..width * height)
            .map(|i| frame.pixel(i % width, i / width)[index])
            .collect();
        channels.push(AnyChannel::new(name.as_str(), FlatSamples::F32(samples)));
    }

    let layer = Layer::new(
        (width, height),
        LayerAttributes::named("stokes"),
        Encoding::FAST_LOSSLESS,
        AnyChannels::sort(channels.into()),
    );

    let write_result = Image::from_layer(layer).write().to_file(file_path);
    match write_result {
        Ok(()) => println!("EXR written to: {}.", file_path),
        Err(e) => println!("EXR written error: {}.", e.to_string())
    }
}
