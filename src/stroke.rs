use crate::config::{DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH, PEN_WIDTH_MAX, PEN_WIDTH_MIN};
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

/// The brush freehand strokes are drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    color: Color32,
    width: u32,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH)
    }
}

impl Pen {
    pub fn new(color: Color32, width: u32) -> Self {
        Self {
            color,
            width: width.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX);
    }

    fn pixel(&self) -> Rgba<u8> {
        let [r, g, b, a] = self.color.to_srgba_unmultiplied();
        Rgba([r, g, b, a])
    }
}

/// Stroke being drawn with the pointer held down.
#[derive(Debug, Clone, Copy)]
pub struct ActiveStroke {
    last_point: Pos2,
}

impl ActiveStroke {
    pub fn new(start: Pos2) -> Self {
        Self { last_point: start }
    }

    pub fn last_point(&self) -> Pos2 {
        self.last_point
    }

    /// Draw from the last point to `to` and advance. Returns whether any pixel changed.
    pub fn extend(&mut self, image: &mut RgbaImage, pen: &Pen, to: Pos2) -> bool {
        let changed = draw_segment(image, pen, self.last_point, to);
        self.last_point = to;
        changed
    }
}

/// Rasterize a round-capped line segment by stamping pen-sized discs along it.
///
/// Points outside the bitmap are clipped. Returns whether any pixel was written.
pub fn draw_segment(image: &mut RgbaImage, pen: &Pen, from: Pos2, to: Pos2) -> bool {
    let distance = from.distance(to);
    let steps = distance.ceil().max(1.0) as u32;
    let mut changed = false;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        changed |= stamp_disc(image, pen, from.lerp(to, t));
    }
    changed
}

fn stamp_disc(image: &mut RgbaImage, pen: &Pen, center: Pos2) -> bool {
    let radius = (pen.width() as f32 / 2.0).max(0.5);
    let pixel = pen.pixel();
    let (width, height) = image.dimensions();

    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = (center.x + radius).ceil().min(width as f32);
    let max_y = (center.y + radius).ceil().min(height as f32);
    if max_x <= 0.0 || max_y <= 0.0 {
        return false;
    }
    let (max_x, max_y) = (max_x as u32, max_y as u32);

    let mut changed = false;
    for y in min_y..max_y {
        for x in min_x..max_x {
            // Sample at the pixel center.
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius * radius {
                image.put_pixel(x, y, pixel);
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn segment_covers_both_endpoints() {
        let mut image = blank(20, 20);
        let pen = Pen::new(Color32::RED, 1);

        assert!(draw_segment(&mut image, &pen, pos2(2.5, 2.5), pos2(15.5, 2.5)));
        assert_eq!(image.get_pixel(2, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(9, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(15, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(9, 10), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn wide_pen_paints_a_disc() {
        let mut image = blank(40, 40);
        let pen = Pen::new(Color32::BLACK, 10);

        draw_segment(&mut image, &pen, pos2(20.0, 20.0), pos2(20.0, 20.0));
        assert_eq!(image.get_pixel(20, 16), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(16, 20), &Rgba([0, 0, 0, 255]));
        // Corner of the bounding square lies outside the disc.
        assert_eq!(image.get_pixel(15, 15), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn segment_outside_bitmap_is_clipped() {
        let mut image = blank(10, 10);
        let pen = Pen::new(Color32::BLACK, 4);

        assert!(!draw_segment(&mut image, &pen, pos2(-50.0, -50.0), pos2(-20.0, -30.0)));
        assert!(!draw_segment(&mut image, &pen, pos2(30.0, 30.0), pos2(60.0, 40.0)));
        assert!(draw_segment(&mut image, &pen, pos2(-5.0, 5.0), pos2(3.0, 5.0)));
    }

    #[test]
    fn pen_width_is_clamped() {
        let mut pen = Pen::new(Color32::BLACK, 0);
        assert_eq!(pen.width(), PEN_WIDTH_MIN);
        pen.set_width(120);
        assert_eq!(pen.width(), PEN_WIDTH_MAX);
    }
}
