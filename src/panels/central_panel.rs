use crate::canvas::Canvas;
use crate::renderer::Renderer;

/// The drawing area. Pointer drags draw freehand strokes and clicks leave a dot,
/// unless `interactive` is false.
pub fn central_panel(
    canvas: &mut Canvas,
    renderer: &mut Renderer,
    ctx: &egui::Context,
    interactive: bool,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            canvas.resize_to(rect.size());

            let to_canvas = |pos: egui::Pos2| (pos - rect.min).to_pos2();
            let pointer = response.interact_pointer_pos().map(to_canvas);

            if !interactive {
                if canvas.is_drawing() {
                    canvas.end_stroke(None);
                }
            } else if response.drag_started() {
                // Start where the button went down, not where the drag was recognized.
                let origin = ctx.input(|i| i.pointer.press_origin()).map(to_canvas);
                if let Some(start) = origin.or(pointer) {
                    canvas.begin_stroke(start);
                }
                if let Some(pos) = pointer {
                    canvas.stroke_to(pos);
                }
            } else if response.dragged() {
                if let Some(pos) = pointer {
                    canvas.stroke_to(pos);
                }
            } else if response.drag_stopped() {
                canvas.end_stroke(pointer);
            } else if response.clicked() {
                if let Some(pos) = pointer {
                    canvas.begin_stroke(pos);
                    canvas.end_stroke(Some(pos));
                }
            }

            renderer.render(ctx, &painter, rect, canvas);
        });
}
