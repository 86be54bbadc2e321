use std::f32::consts::TAU;

use egui::{pos2, vec2, Pos2, Shape, Stroke};

const HEART_SEGMENTS: usize = 48;

/// Outline of a heart centered on `center`, fitting in `size`.
fn heart_outline(center: Pos2, size: f32) -> Vec<Pos2> {
    // classic parametric heart, spans roughly 34x30 units
    let scale = size / 34.0;
    (0..HEART_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f32 / HEART_SEGMENTS as f32;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            pos2(center.x + x * scale, center.y - (y + 2.5) * scale)
        })
        .collect()
}

/// Two overlapping heart outlines.
pub fn heart_multiple_icon(size: f32, color: egui::Color32) -> impl egui::Widget {
    move |ui: &mut egui::Ui| -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(vec2(size, size), egui::Sense::hover());
        let stroke = Stroke::new((size / 16.0).max(1.0), color);
        let painter = ui.painter();

        let back = rect.center() + vec2(-size * 0.14, -size * 0.1);
        let front = rect.center() + vec2(size * 0.12, size * 0.1);

        painter.add(Shape::closed_line(heart_outline(back, size * 0.6), stroke));
        painter.add(Shape::closed_line(heart_outline(front, size * 0.6), stroke));

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_fits_in_its_box() {
        let size = 34.0;
        let center = pos2(100.0, 100.0);
        let points = heart_outline(center, size);

        assert_eq!(points.len(), HEART_SEGMENTS);
        for p in points {
            assert!((p.x - center.x).abs() <= size / 2.0 + 0.01, "{p:?}");
            assert!((p.y - center.y).abs() <= size / 2.0 + 0.01, "{p:?}");
        }
    }
}
