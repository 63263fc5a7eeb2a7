//! Raster export of the floor map.
//! Draws the map with tiny-skia and encodes it as PNG.
//!
//! Features:
//! - Optional grid at the snapping increment
//! - Machine tokens filled with their status gradient
//! - Selection ring around selected machines

use floorkit_core::constants::{TOKEN_HEIGHT_PX, TOKEN_WIDTH_PX};
use floorkit_core::{ExportError, Rgb, StatusKind, TokenFill};
use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Point as SkPoint,
    Rect, SpreadMode, Stroke, Transform,
};

use crate::canvas::Canvas;
use crate::selection_manager::SelectionManager;

fn bg_color() -> Color {
    Color::from_rgba8(248, 250, 252, 255)
}
fn grid_color() -> Color {
    Color::from_rgba8(203, 213, 225, 255)
}
fn selection_color() -> Color {
    Color::from_rgba8(37, 99, 235, 255)
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba8(rgb.0, rgb.1, rgb.2, 255)
}

/// Token geometry used when drawing machines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub token_width: f32,
    pub token_height: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            token_width: TOKEN_WIDTH_PX as f32,
            token_height: TOKEN_HEIGHT_PX as f32,
        }
    }
}

/// Renders the canvas to PNG bytes.
///
/// Returns `Ok(None)` when the canvas has not been measured yet. The image
/// is as wide as the viewport and as tall as the larger of the viewport
/// height and the scrollable extent.
pub fn render_png(
    canvas: &Canvas,
    selection: &SelectionManager,
    kind: StatusKind,
    options: &RenderOptions,
) -> Result<Option<Vec<u8>>, ExportError> {
    let Some(pixmap) = render_pixmap(canvas, selection, kind, options)? else {
        return Ok(None);
    };
    pixmap
        .encode_png()
        .map(Some)
        .map_err(|e| ExportError::Encode(e.to_string()))
}

/// Draws the canvas into a pixmap.
///
/// The map origin sits `canvas.top_margin()` pixels below the top of the
/// image so machines above the top edge stay visible.
pub fn render_pixmap(
    canvas: &Canvas,
    selection: &SelectionManager,
    kind: StatusKind,
    options: &RenderOptions,
) -> Result<Option<Pixmap>, ExportError> {
    let Some(viewport) = canvas.viewport() else {
        tracing::debug!("Canvas has no viewport, skipping image export");
        return Ok(None);
    };
    let width = viewport.width().ceil() as u32;
    let height = viewport.height().max(canvas.min_height()).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
    pixmap.fill(bg_color());

    let top = canvas.top_margin() as f32;
    if canvas.grid_visible() {
        draw_grid(&mut pixmap, canvas.grid_px() as f32, top);
    }

    for machine in canvas.machines() {
        let Some(center) = canvas.pixel_center(machine.id) else {
            continue;
        };
        let Some(rect) = Rect::from_xywh(
            center.x as f32 - options.token_width / 2.0,
            top + center.y as f32 - options.token_height / 2.0,
            options.token_width,
            options.token_height,
        ) else {
            continue;
        };
        fill_token(&mut pixmap, rect, machine.fill(kind));
        if selection.is_selected(machine.id) {
            stroke_ring(&mut pixmap, rect);
        }
    }

    Ok(Some(pixmap))
}

/// Grid lines line up with the map origin, which sits `origin_y` down.
fn draw_grid(pixmap: &mut Pixmap, step: f32, origin_y: f32) {
    if step <= 0.0 {
        return;
    }
    let mut paint = Paint::default();
    paint.set_color(grid_color());
    paint.anti_alias = false;

    let (w, h) = (pixmap.width() as f32, pixmap.height() as f32);
    let mut x = 0.0;
    while x < w {
        if let Some(line) = Rect::from_xywh(x, 0.0, 1.0, h) {
            pixmap.fill_rect(line, &paint, Transform::identity(), None);
        }
        x += step;
    }
    let mut y = origin_y.rem_euclid(step);
    while y < h {
        if let Some(line) = Rect::from_xywh(0.0, y, w, 1.0) {
            pixmap.fill_rect(line, &paint, Transform::identity(), None);
        }
        y += step;
    }
}

fn fill_token(pixmap: &mut Pixmap, rect: Rect, fill: TokenFill) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    if fill.is_solid() {
        paint.set_color(to_color(fill.start));
    } else {
        let shader = LinearGradient::new(
            SkPoint::from_xy(rect.left(), rect.top()),
            SkPoint::from_xy(rect.right(), rect.top()),
            vec![
                GradientStop::new(0.0, to_color(fill.start)),
                GradientStop::new(1.0, to_color(fill.end)),
            ],
            SpreadMode::Pad,
            Transform::identity(),
        );
        match shader {
            Some(shader) => paint.shader = shader,
            None => paint.set_color(to_color(fill.start)),
        }
    }
    let path = PathBuilder::from_rect(rect);
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn stroke_ring(pixmap: &mut Pixmap, rect: Rect) {
    let Some(ring) = Rect::from_ltrb(
        rect.left() - 3.0,
        rect.top() - 3.0,
        rect.right() + 3.0,
        rect.bottom() + 3.0,
    ) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(selection_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 2.0,
        ..Stroke::default()
    };
    pixmap.stroke_path(&PathBuilder::from_rect(ring), &paint, &stroke, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{ExtentOptions, Viewport};
    use floorkit_core::{Floor, Machine};

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_unmeasured_canvas_renders_nothing() {
        let canvas = Canvas::new(Floor::CyberStudio, 40.0, ExtentOptions::default());
        let png = render_png(&canvas, &SelectionManager::new(), StatusKind::Machine, &RenderOptions::default());
        assert!(matches!(png, Ok(None)));
    }

    #[test]
    fn test_renders_png_at_extent_height() {
        let mut canvas = Canvas::new(Floor::CyberStudio, 40.0, ExtentOptions::default());
        canvas.set_viewport(Viewport::new(200.0, 100.0).unwrap());
        canvas.set_grid_visible(true);
        canvas.set_machines(vec![
            Machine::new(1, Floor::CyberStudio, 50.0, 50.0).with_machine_status("go live"),
            Machine::new(2, Floor::CyberStudio, -20.0, 130.0).with_power_status("on"),
        ]);
        let mut selection = SelectionManager::new();
        selection.select_only(floorkit_core::MachineId(1));

        let png = render_png(&canvas, &selection, StatusKind::Machine, &RenderOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
        // IHDR height is the big-endian u32 at bytes 20..24
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!(height as f64, canvas.min_height());
    }

    #[test]
    fn test_machines_above_the_top_edge_are_drawn() {
        let mut canvas = Canvas::new(Floor::CyberStudio, 40.0, ExtentOptions::default());
        canvas.set_viewport(Viewport::new(200.0, 100.0).unwrap());
        canvas.set_machines(vec![
            Machine::new(1, Floor::CyberStudio, 50.0, -20.0).with_power_status("on"),
        ]);
        // vh clamps to 800: 20% of 800 plus 200 padding
        assert_eq!(canvas.top_margin(), 360.0);

        let pixmap = render_pixmap(&canvas, &SelectionManager::new(), StatusKind::Power, &RenderOptions::default())
            .unwrap()
            .unwrap();
        // token centre lands at (100, 360 - 20)
        let token = pixmap.pixel(100, 340).unwrap();
        assert_eq!((token.red(), token.green(), token.blue()), (22, 163, 74));
        let above = pixmap.pixel(100, 10).unwrap();
        assert_eq!((above.red(), above.green(), above.blue()), (248, 250, 252));
    }
}
