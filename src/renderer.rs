use crate::canvas::Canvas;
use egui::{Color32, ColorImage, Pos2, Rect, TextureHandle, TextureOptions, Vec2};

/// Keeps a GPU texture in sync with the canvas bitmap and paints it.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas revision the texture was last uploaded from.
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the canvas with its top-left corner at `rect.min`, one pixel per point.
    ///
    /// The painter is expected to be clipped to the canvas area.
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect, canvas: &Canvas) {
        let texture = self.sync_texture(ctx, canvas);
        let [width, height] = canvas.size();
        let image_rect = Rect::from_min_size(rect.min, Vec2::new(width as f32, height as f32));

        painter.image(
            texture.id(),
            image_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn sync_texture(&mut self, ctx: &egui::Context, canvas: &Canvas) -> &TextureHandle {
        let revision = canvas.revision();
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if self.uploaded_revision != Some(revision) {
                    texture.set(color_image(canvas), TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("canvas", color_image(canvas), TextureOptions::NEAREST),
        };
        self.uploaded_revision = Some(revision);
        self.texture.insert(texture)
    }
}

fn color_image(canvas: &Canvas) -> ColorImage {
    let [width, height] = canvas.size();
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], canvas.image().as_raw())
}
