use crate::config::BACKGROUND_COLOR;
use crate::document::ImageDocument;
use crate::error::CanvasError;
use crate::print;
use crate::stroke::{ActiveStroke, Pen};
use egui::{Color32, Pos2, Vec2};
use image::{DynamicImage, ImageError, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Initial bitmap size before the canvas is first laid out.
const INITIAL_SIZE: [u32; 2] = [500, 500];

/// Freehand drawing surface: the bitmap, the pen, and the modification flag.
#[derive(Debug)]
pub struct Canvas {
    image: RgbaImage,
    pen: Pen,
    stroke: Option<ActiveStroke>,
    modified: bool,
    /// Bumped on every pixel change so the renderer knows when to re-upload.
    revision: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Pen::default())
    }
}

impl Canvas {
    pub fn new(pen: Pen) -> Self {
        Self {
            image: blank_image(INITIAL_SIZE[0], INITIAL_SIZE[1]),
            pen,
            stroke: None,
            modified: false,
            revision: 0,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn size(&self) -> [u32; 2] {
        [self.image.width(), self.image.height()]
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen.color()
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.pen.set_color(color);
    }

    pub fn pen_width(&self) -> u32 {
        self.pen.width()
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.pen.set_width(width);
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn begin_stroke(&mut self, at: Pos2) {
        self.stroke = Some(ActiveStroke::new(at));
    }

    pub fn stroke_to(&mut self, to: Pos2) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if stroke.extend(&mut self.image, &self.pen, to) {
            self.touch();
        }
    }

    pub fn end_stroke(&mut self, at: Option<Pos2>) {
        if let Some(at) = at {
            self.stroke_to(at);
        }
        self.stroke = None;
    }

    /// Grow the bitmap to cover `size`, keeping existing pixels. Never shrinks.
    pub fn resize_to(&mut self, size: Vec2) {
        let width = (size.x.max(0.0).ceil() as u32).max(self.image.width());
        let height = (size.y.max(0.0).ceil() as u32).max(self.image.height());
        if width == self.image.width() && height == self.image.height() {
            return;
        }
        let mut grown = blank_image(width, height);
        image::imageops::replace(&mut grown, &self.image, 0, 0);
        self.image = grown;
        self.revision += 1;
    }

    /// Send the bitmap to the printer. Failures are logged, not returned.
    pub fn print(&self) {
        if let Err(err) = print::print_image(&self.image) {
            log::error!("Printing failed: {}", err);
        }
    }

    fn touch(&mut self) {
        self.modified = true;
        self.revision += 1;
    }

    fn try_load(&mut self, path: &Path) -> Result<(), CanvasError> {
        let loaded = image::open(path)
            .map_err(|source| CanvasError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let width = loaded.width().max(self.image.width());
        let height = loaded.height().max(self.image.height());
        let mut image = blank_image(width, height);
        image::imageops::replace(&mut image, &loaded, 0, 0);
        self.image = image;
        Ok(())
    }

    fn try_save(&self, path: &Path, format: &str) -> Result<(), CanvasError> {
        let image_format = ImageFormat::from_extension(format)
            .ok_or_else(|| CanvasError::UnknownFormat(format.to_owned()))?;

        let rgba = DynamicImage::ImageRgba8(self.image.clone());
        let mut result = rgba.save_with_format(path, image_format);
        // Not every encoder takes 8-bit RGBA; fall back through the other layouts.
        let fallbacks: [fn(&DynamicImage) -> DynamicImage; 3] = [
            |img| DynamicImage::ImageRgb8(img.to_rgb8()),
            |img| DynamicImage::ImageRgba16(img.to_rgba16()),
            |img| DynamicImage::ImageRgb32F(img.to_rgb32f()),
        ];
        for convert in fallbacks {
            if !matches!(result, Err(ImageError::Unsupported(_))) {
                break;
            }
            result = convert(&rgba).save_with_format(path, image_format);
        }

        result.map_err(|source| CanvasError::Encode {
            path: path.to_path_buf(),
            format: format.to_owned(),
            source,
        })
    }
}

impl ImageDocument for Canvas {
    fn is_modified(&self) -> bool {
        self.modified
    }

    fn clear(&mut self) {
        let [width, height] = self.size();
        self.image = blank_image(width, height);
        self.stroke = None;
        self.modified = false;
        self.revision += 1;
    }

    fn load(&mut self, path: &Path) -> bool {
        match self.try_load(path) {
            Ok(()) => {
                self.stroke = None;
                self.modified = false;
                self.revision += 1;
                log::info!("Loaded {}", path.display());
                true
            }
            Err(err) => {
                log::error!("{}", err);
                false
            }
        }
    }

    fn save(&mut self, path: &Path, format: &str) -> bool {
        match self.try_save(path, format) {
            Ok(()) => {
                self.modified = false;
                log::info!("Saved {} as {}", path.display(), format);
                true
            }
            Err(err) => {
                log::error!("{}", err);
                false
            }
        }
    }
}

fn blank_image(width: u32, height: u32) -> RgbaImage {
    let [r, g, b, a] = BACKGROUND_COLOR.to_srgba_unmultiplied();
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, a]))
}
