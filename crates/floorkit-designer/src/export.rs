//! CSV export of the working set and export file naming.

use floorkit_core::{ExportError, Floor, Machine};
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "id,machine,floor,x,y";

/// Quotes a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Renders the machines as CSV, one row per machine in the given order.
pub fn positions_csv(machines: &[Machine]) -> String {
    let mut out = String::from(CSV_HEADER);
    for m in machines {
        let row = [
            m.id.to_string(),
            m.machine_number.clone().unwrap_or_default(),
            m.floor.clone(),
            m.x.to_string(),
            m.y.to_string(),
        ];
        out.push('\n');
        out.push_str(&row.iter().map(|f| quote(f)).collect::<Vec<_>>().join(","));
    }
    out
}

pub fn csv_file_name(floor: Floor) -> String {
    format!("machines_{}.csv", floor.file_stem())
}

pub fn png_file_name(floor: Floor) -> String {
    format!("floor-map-{}.png", floor.file_stem())
}

/// Writes `contents` to `dir/name`, creating `dir` if needed.
pub fn write_export(dir: &Path, name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_quotes_every_field() {
        let machines = vec![
            Machine::new(7, Floor::CyberStudio, 54.0, -2.5).with_number("CS \"7\""),
            Machine::new(8, Floor::CyberStudio, 0.0, 100.0),
        ];
        let csv = positions_csv(&machines);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "id,machine,floor,x,y");
        assert_eq!(lines[1], r#""7","CS ""7""","CYBER STUDIO","54","-2.5""#);
        assert_eq!(lines[2], r#""8","","CYBER STUDIO","0","100""#);
    }

    #[test]
    fn test_empty_floor_is_header_only() {
        assert_eq!(positions_csv(&[]), "id,machine,floor,x,y");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(csv_file_name(Floor::GfLeftWing), "machines_GF_LEFT_WING.csv");
        assert_eq!(png_file_name(Floor::CyberStudio), "floor-map-CYBER_STUDIO.png");
    }
}
