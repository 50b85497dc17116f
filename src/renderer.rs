use egui::{Color32, Context, Painter, Rect, TextureHandle, TextureOptions, pos2};

use crate::surface::Surface;

/// Presents the CPU surface through an egui texture.
///
/// The pixel buffer is re-uploaded only when the surface revision moves, so
/// idle frames cost nothing beyond a painter call.
pub struct SurfacePresenter {
    texture: Option<TextureHandle>,
    uploaded_revision: u64,
}

impl SurfacePresenter {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded_revision: 0,
        }
    }

    /// Uploads the surface if it changed since the last call and paints it
    /// into `rect`.
    pub fn present(&mut self, ctx: &Context, painter: &Painter, rect: Rect, surface: &Surface) {
        if surface.width() == 0 || surface.height() == 0 {
            return;
        }

        let revision = surface.revision();
        if self.texture.is_none() || self.uploaded_revision != revision {
            let image = surface.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("sketch_surface", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = revision;
        }

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

impl Default for SurfacePresenter {
    fn default() -> Self {
        Self::new()
    }
}
