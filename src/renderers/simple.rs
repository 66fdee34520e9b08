// Copyright @yucwang 2021

use crate::core::integrator::SamplingIntegrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::color::sample_rgb_spectrum;
use crate::math::constants::{Float, Vector3f, SPECTRUM_SAMPLES};
use crate::math::ray::Ray3f;
use crate::math::spectrum::SpectralMode;
use crate::renderers::frame::AovFrame;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

/// Drives a sampling integrator over a pixel grid and accumulates its
/// auxiliary channels into an `AovFrame`. The integrator is shared
/// read-only across workers; every pixel owns its own sampler.
pub struct SimpleAovRenderer {
    integrator: Arc<dyn SamplingIntegrator>,
    width: usize,
    height: usize,
    samples_per_pixel: u32,
    seed: u64,
}

impl SimpleAovRenderer {
    pub fn new(integrator: Arc<dyn SamplingIntegrator>,
               width: usize, height: usize,
               samples_per_pixel: u32, seed: u64) -> Self {
        Self { integrator, width, height, samples_per_pixel, seed }
    }

    fn pixel_ray(&self, x: usize, y: usize, sampler: &mut Sampler,
                 spectral: bool) -> Ray3f {
        let jitter = sampler.next_2d();
        let u = 2.0 * (x as Float + jitter.x) / (self.width as Float) - 1.0;
        let v = 1.0 - 2.0 * (y as Float + jitter.y) / (self.height as Float);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(u, v, 1.0), None, None);

        if spectral {
            // One primary sample, rotated across the wavelength bank.
            let u0 = sampler.next_1d();
            let mut wavelengths = [0.0; SPECTRUM_SAMPLES];
            for i in 0..SPECTRUM_SAMPLES {
                let ui = (u0 + i as Float / SPECTRUM_SAMPLES as Float).fract();
                wavelengths[i] = sample_rgb_spectrum(ui);
            }
            ray.with_wavelengths(wavelengths)
        } else {
            ray
        }
    }
}

impl Renderer for SimpleAovRenderer {
    fn render(&self, scene: &Scene) -> AovFrame {
        let names = self.integrator.aov_names();
        let stride = names.len();
        let mut frame = AovFrame::new(names, self.width, self.height);
        if self.width == 0 || self.height == 0 || stride == 0 {
            return frame;
        }

        let spp = match self.samples_per_pixel {
            0 => 1,
            v => v,
        };
        let inv_spp = 1.0 / (spp as Float);
        let spectral = scene.mode().spectral_mode == SpectralMode::Spectral;

        log::info!("Rendering {}x{} AOV frame, {} channels, {} spp.",
                   self.width, self.height, stride, spp);

        let block_size = 32usize;
        let blocks_x = (self.width + block_size - 1) / block_size;
        let blocks_y = (self.height + block_size - 1) / block_size;
        let total_blocks = blocks_x * blocks_y;
        let integrator_ref: &dyn SamplingIntegrator = self.integrator.as_ref();

        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let (tx, rx) = mpsc::channel::<(usize, usize, usize, usize, Vec<Float>)>();

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let bx = block_index % blocks_x;
                        let by = block_index / blocks_x;
                        let x0 = bx * block_size;
                        let y0 = by * block_size;
                        let x1 = (x0 + block_size).min(self.width);
                        let y1 = (y0 + block_size).min(self.height);

                        let mut block = vec![0.0 as Float; (x1 - x0) * (y1 - y0) * stride];
                        for y in y0..y1 {
                            for x in x0..x1 {
                                let pixel_seed = ((self.seed & 0xFFF) << 32)
                                    | (((y as u64) & 0xFFFF) << 16)
                                    | ((x as u64) & 0xFFFF);
                                let mut sampler = Sampler::new(pixel_seed);
                                let mut accum = vec![0.0 as Float; stride];
                                let mut aovs = vec![0.0 as Float; stride];
                                for _ in 0..spp {
                                    let ray = self.pixel_ray(x, y, &mut sampler, spectral);
                                    aovs.iter_mut().for_each(|v| *v = 0.0);
                                    integrator_ref.sample(scene, &mut sampler, &ray,
                                                          &mut aovs, true);
                                    for c in 0..stride {
                                        accum[c] += aovs[c];
                                    }
                                }
                                let offset = ((y - y0) * (x1 - x0) + (x - x0)) * stride;
                                for c in 0..stride {
                                    block[offset + c] = accum[c] * inv_spp;
                                }
                            }
                        }
                        if tx.send((x0, y0, x1, y1, block)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(tx);

            for _ in 0..total_blocks {
                let (x0, y0, x1, y1, block) = match rx.recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                };
                for y in y0..y1 {
                    for x in x0..x1 {
                        let offset = ((y - y0) * (x1 - x0) + (x - x0)) * stride;
                        frame.pixel_mut(x, y)
                            .copy_from_slice(&block[offset..offset + stride]);
                    }
                }
                progress.inc(1);
            }
        });

        progress.finish_and_clear();
        log::info!("Rendering finished.");
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::Properties;
    use crate::core::scene::RenderMode;
    use crate::integrators::stokes::StokesIntegrator;
    use crate::integrators::uniform::UniformStokesIntegrator;

    #[test]
    fn test_renderer_fills_every_pixel() {
        let mode = RenderMode::new(SpectralMode::Rgb, true);
        let source = Arc::new(UniformStokesIntegrator::new(&Properties::new(), mode));
        let mut props = Properties::new();
        props.put_object("integrator", source);
        let stokes = Arc::new(StokesIntegrator::new(&props, mode).unwrap());

        let renderer = SimpleAovRenderer::new(stokes, 8, 4, 2, 0);
        let scene = Scene::new(mode);
        let frame = renderer.render(&scene);

        assert_eq!(frame.stride(), 12);
        // The uniform source emits S0 = (1, 1, 1) everywhere.
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y)[0], 1.0);
                assert_eq!(frame.pixel(x, y)[3], 0.0);
            }
        }
    }
}
