//! Working set of machines for the active floor.
//!
//! The canvas owns the in-memory copy of every machine on the floor, the
//! viewport the machines are laid out in, and the derived scrollable
//! extent. During a gesture it is the authoritative source for rendering;
//! at rest the record store is.

use floorkit_core::{EditorError, Floor, Machine, MachineId, PositionUpdate};

use crate::viewport::{required_min_height, required_top_margin, ExtentOptions, Percent, Point, Viewport};

#[derive(Debug, Clone)]
pub struct Canvas {
    floor: Floor,
    machines: Vec<Machine>,
    viewport: Option<Viewport>,
    grid_px: f64,
    grid_visible: bool,
    extent: ExtentOptions,
    min_height: f64,
    top_margin: f64,
}

impl Canvas {
    /// Creates an empty canvas for `floor` with no measured viewport yet.
    pub fn new(floor: Floor, grid_px: f64, extent: ExtentOptions) -> Self {
        let mut canvas = Self {
            floor,
            machines: Vec::new(),
            viewport: None,
            grid_px,
            grid_visible: false,
            extent,
            min_height: 0.0,
            top_margin: 0.0,
        };
        canvas.recompute_extent();
        canvas
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Switches to another floor, dropping the working set.
    pub fn set_floor(&mut self, floor: Floor) {
        self.floor = floor;
        self.machines.clear();
        self.recompute_extent();
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn machine(&self, id: MachineId) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MachineId) -> bool {
        self.machine(id).is_some()
    }

    pub fn ids(&self) -> Vec<MachineId> {
        self.machines.iter().map(|m| m.id).collect()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Replaces the working set, e.g. after a fetch.
    pub fn set_machines(&mut self, machines: Vec<Machine>) {
        self.machines = machines;
        self.recompute_extent();
    }

    /// Moves one machine in memory. Returns false if it is not on the canvas.
    pub fn set_position(&mut self, id: MachineId, position: Percent) -> bool {
        let Some(machine) = self.machines.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        machine.x = position.x;
        machine.y = position.y;
        self.recompute_extent();
        true
    }

    /// Snapshot of every machine's current position.
    pub fn positions(&self) -> Vec<PositionUpdate> {
        self.machines.iter().map(Machine::position).collect()
    }

    /// Writes back a set of positions. Entries for machines no longer on the
    /// canvas are ignored.
    pub fn restore_positions(&mut self, positions: &[PositionUpdate]) {
        for entry in positions {
            if let Some(machine) = self.machines.iter_mut().find(|m| m.id == entry.id) {
                machine.x = entry.x;
                machine.y = entry.y;
            }
        }
        self.recompute_extent();
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewport.as_mut()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.recompute_extent();
    }

    /// Measures the map area, creating the viewport on first use.
    pub fn resize_viewport(&mut self, width: f64, height: f64) -> Result<(), EditorError> {
        match self.viewport.as_mut() {
            Some(viewport) => viewport.set_size(width, height)?,
            None => self.viewport = Some(Viewport::new(width, height)?),
        }
        self.recompute_extent();
        Ok(())
    }

    /// Pixel centre of a machine in the current viewport.
    pub fn pixel_center(&self, id: MachineId) -> Option<Point> {
        let viewport = self.viewport.as_ref()?;
        let machine = self.machine(id)?;
        Some(viewport.percent_to_pixel(Percent::new(machine.x, machine.y)))
    }

    pub fn grid_px(&self) -> f64 {
        self.grid_px
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
    }

    /// Minimum map height keeping every machine reachable by scrolling.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Space above the map origin inside the extent.
    pub fn top_margin(&self) -> f64 {
        self.top_margin
    }

    fn recompute_extent(&mut self) {
        let base = self.viewport.as_ref().map_or(0.0, Viewport::height);
        let ys: Vec<f64> = self.machines.iter().map(|m| m.y).collect();
        self.min_height = required_min_height(ys.iter().copied(), base, &self.extent);
        self.top_margin = required_top_margin(ys, base, &self.extent);
    }
}
