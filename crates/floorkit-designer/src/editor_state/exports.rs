use floorkit_core::ExportError;
use std::path::{Path, PathBuf};

use super::FloorMapEditor;
use crate::export::{csv_file_name, png_file_name, positions_csv, write_export};
use crate::renderer::render_png;

impl FloorMapEditor {
    /// CSV of the current working set.
    pub fn export_csv(&self) -> String {
        positions_csv(self.canvas.machines())
    }

    /// PNG of the current canvas, or `None` before the map is measured.
    pub fn export_png(&self) -> Result<Option<Vec<u8>>, ExportError> {
        render_png(
            &self.canvas,
            &self.selection,
            self.status_kind,
            &self.options.render,
        )
    }

    /// Writes the CSV and, when available, the PNG into `dir`.
    pub fn write_exports(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        let floor = self.floor();
        let mut written = vec![write_export(
            dir,
            &csv_file_name(floor),
            self.export_csv().as_bytes(),
        )?];
        if let Some(png) = self.export_png()? {
            written.push(write_export(dir, &png_file_name(floor), &png)?);
        }
        Ok(written)
    }
}
