use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

use crate::adapters::pixel_format::blit_rgba;
use crate::controllers::mosaic::ports::display_surface::DisplaySurface;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// `pixels` framebuffer of the configured screen size, scaled onto the
/// window surface, with an egui pass drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    buffer_size: ScreenSize,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer_size: ScreenSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let mut pixels = Pixels::new(buffer_size.width, buffer_size.height, surface_texture)?;
        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            buffer_size,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            // Scale the mosaic onto the surface first
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the mosaic underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Follows the window surface; the mosaic buffer keeps its size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl DisplaySurface for PixelsPresenter {
    fn size(&self) -> ScreenSize {
        self.buffer_size
    }

    fn blit(&mut self, origin: Point, tile: &PixelBuffer) {
        let ScreenSize { width, height } = self.buffer_size;
        blit_rgba(self.pixels.frame_mut(), width, height, origin, tile);
    }
}
