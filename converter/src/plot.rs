use airfoilcore::export::SvgDocument;
use airfoilcore::math::{Affine, Bounds};
use airfoilcore::Airfoil;
use anyhow::Context;
use std::path::Path;

/// Pixels per chord unit in the preview.
const PREVIEW_SCALE: f64 = 800.0;
const PREVIEW_MARGIN: f64 = 20.0;
const COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// Overlays closed contours on shared, equal-aspect axes with y pointing up.
pub fn render_preview(airfoils: &[&Airfoil]) -> SvgDocument {
    let contours: Vec<_> = airfoils.iter().map(|a| a.get_coords(true)).collect();
    let all: Vec<_> = contours.iter().flatten().copied().collect();
    let bounds = Bounds::from_points(&all).unwrap_or_default();

    let to_canvas = Affine::scale(PREVIEW_SCALE)
        .then_flip_vertical()
        .then_translate(
            PREVIEW_MARGIN - bounds.min.x * PREVIEW_SCALE,
            PREVIEW_MARGIN + bounds.max.y * PREVIEW_SCALE,
        );
    let title = airfoils
        .first()
        .map(|a| a.name().to_string())
        .unwrap_or_default();
    let mut doc = SvgDocument::new(
        bounds.width() * PREVIEW_SCALE + 2.0 * PREVIEW_MARGIN,
        bounds.height() * PREVIEW_SCALE + 2.0 * PREVIEW_MARGIN,
    )
    .with_title(&title);

    for (index, contour) in contours.iter().enumerate() {
        doc.polyline(
            &to_canvas.apply_all(contour),
            1.0,
            COLORS[index % COLORS.len()],
        );
    }
    doc
}

pub fn write_preview(path: &Path, airfoils: &[&Airfoil]) -> anyhow::Result<()> {
    render_preview(airfoils)
        .save(path)
        .with_context(|| format!("writing plot {}", path.display()))
}
