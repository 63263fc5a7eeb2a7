//! Drag engine: moves a set of machines by a grid-snapped pointer delta.
//!
//! A session remembers where the pointer and every dragged machine were
//! when the gesture began. Each move applies the same snapped delta to
//! every start position, so the group keeps its shape no matter how the
//! pointer wanders. On release, every dragged machine's offset from its
//! start is snapped again and the final positions are returned for
//! persistence.

use floorkit_core::{MachineId, PositionUpdate};

use crate::canvas::Canvas;
use crate::viewport::{Percent, Point};

/// Snaps a pixel value to the nearest multiple of `unit`.
///
/// Halfway values round towards positive infinity, so a delta of -20 px
/// on a 40 px grid snaps to 0 rather than -40.
pub fn snap_to_grid(value: f64, unit: f64) -> f64 {
    if unit <= 0.0 {
        return value;
    }
    (value / unit + 0.5).floor() * unit
}

/// Snaps both axes of a pixel delta independently.
pub fn snap_delta(delta: Point, unit: f64) -> Point {
    Point::new(snap_to_grid(delta.x, unit), snap_to_grid(delta.y, unit))
}

/// State of one pointer-down to pointer-up drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    anchor: MachineId,
    anchor_start: Point,
    pointer_start: Point,
    starts: Vec<(MachineId, Point)>,
    grid_px: f64,
}

impl DragSession {
    /// Starts a drag of `dragging`, anchored on the pressed machine.
    ///
    /// Returns `None` if the canvas has no viewport or the anchor is not on
    /// it. Dragged ids missing from the canvas are skipped.
    pub fn begin(
        canvas: &Canvas,
        anchor: MachineId,
        dragging: &[MachineId],
        pointer: Point,
    ) -> Option<Self> {
        let anchor_start = canvas.pixel_center(anchor)?;
        let starts = dragging
            .iter()
            .filter_map(|id| canvas.pixel_center(*id).map(|p| (*id, p)))
            .collect();
        Some(Self {
            anchor,
            anchor_start,
            pointer_start: pointer,
            starts,
            grid_px: canvas.grid_px(),
        })
    }

    pub fn anchor(&self) -> MachineId {
        self.anchor
    }

    pub fn dragged_ids(&self) -> Vec<MachineId> {
        self.starts.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start pixel position of a dragged machine.
    pub fn start_of(&self, id: MachineId) -> Option<Point> {
        self.starts.iter().find(|(m, _)| *m == id).map(|(_, p)| *p)
    }

    /// Snapped pointer delta since the gesture began.
    pub fn snapped_delta(&self, pointer: Point) -> Point {
        snap_delta(pointer.delta_from(self.pointer_start), self.grid_px)
    }

    /// Pixel position every dragged machine takes for `pointer`.
    pub fn targets(&self, pointer: Point) -> Vec<(MachineId, Point)> {
        let delta = self.snapped_delta(pointer);
        self.starts
            .iter()
            .map(|(id, start)| (*id, start.offset_by(delta)))
            .collect()
    }

    /// Applies a pointer move to the working set.
    ///
    /// Returns the anchor's new percent position for the position readout.
    pub fn apply_move(&self, canvas: &mut Canvas, pointer: Point) -> Option<Percent> {
        let viewport = canvas.viewport()?.clone();
        for (id, target) in self.targets(pointer) {
            canvas.set_position(id, viewport.pixel_to_percent(target));
        }
        let anchor = self.anchor_start.offset_by(self.snapped_delta(pointer));
        Some(viewport.pixel_to_percent(anchor))
    }

    /// Ends the gesture and returns the final positions to persist.
    ///
    /// Each machine's offset from its start is re-snapped, which leaves
    /// positions produced by `apply_move` unchanged. Machines that left the
    /// canvas mid-gesture are dropped.
    pub fn finish(self, canvas: &mut Canvas) -> Vec<PositionUpdate> {
        let Some(viewport) = canvas.viewport().cloned() else {
            return Vec::new();
        };
        let mut updates = Vec::with_capacity(self.starts.len());
        for (id, start) in &self.starts {
            let Some(current) = canvas.pixel_center(*id) else {
                tracing::debug!("Machine {} left the floor during the drag", id);
                continue;
            };
            let delta = snap_delta(current.delta_from(*start), self.grid_px);
            let position = viewport.pixel_to_percent(start.offset_by(delta));
            canvas.set_position(*id, position);
            updates.push(PositionUpdate::new(*id, position.x, position.y));
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{ExtentOptions, Viewport};
    use floorkit_core::{Floor, Machine};

    fn floor() -> Canvas {
        let mut canvas = Canvas::new(Floor::CyberStudio, 40.0, ExtentOptions::default());
        canvas.set_viewport(Viewport::new(1000.0, 1000.0).unwrap());
        canvas.set_machines(vec![
            Machine::new(1, Floor::CyberStudio, 10.0, 10.0),
            Machine::new(2, Floor::CyberStudio, 50.0, 50.0),
            Machine::new(3, Floor::CyberStudio, 90.0, 90.0),
        ]);
        canvas
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(37.0, 40.0), 40.0);
        assert_eq!(snap_to_grid(-12.0, 40.0), 0.0);
        assert_eq!(snap_to_grid(-20.0, 40.0), 0.0);
        assert_eq!(snap_to_grid(-21.0, 40.0), -40.0);
        assert_eq!(snap_to_grid(20.0, 40.0), 40.0);
        assert_eq!(snap_to_grid(13.0, 0.0), 13.0);
    }

    #[test]
    fn test_move_then_finish() {
        let mut canvas = floor();
        let pointer = Point::new(500.0, 500.0);
        let session = DragSession::begin(&canvas, MachineId(2), &[MachineId(2)], pointer).unwrap();

        let readout = session.apply_move(&mut canvas, Point::new(537.0, 488.0));
        assert_eq!(readout, Some(Percent::new(54.0, 50.0)));

        let updates = session.finish(&mut canvas);
        assert_eq!(updates, vec![PositionUpdate::new(2, 54.0, 50.0)]);
        assert_eq!(canvas.machine(MachineId(1)).unwrap().position(), PositionUpdate::new(1, 10.0, 10.0));
    }

    #[test]
    fn test_finish_without_move_keeps_positions() {
        let mut canvas = floor();
        let ids = canvas.ids();
        let session = DragSession::begin(&canvas, MachineId(1), &ids, Point::new(0.0, 0.0)).unwrap();
        let updates = session.finish(&mut canvas);
        assert_eq!(updates, canvas.positions());
    }

    #[test]
    fn test_begin_requires_anchor_on_canvas() {
        let canvas = floor();
        assert!(DragSession::begin(&canvas, MachineId(9), &[MachineId(9)], Point::default()).is_none());
    }
}
