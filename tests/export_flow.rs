use floorkit::{editor_options, open_store, Config, Floor, FloorMapEditor, RecordStore, StatusKind};
use std::sync::Arc;
use tempfile::TempDir;

const SEED: &str = r#"[
    {"id": 1, "MACHINE #": "CS-001", "FLOOR": "CYBER STUDIO", "MACHINE STATUS": "Go Live", "x": 10, "y": 20},
    {"id": 2, "MACHINE #": "CS-002", "FLOOR": "CYBER STUDIO", "POWER STATUS": "off", "x": null, "y": 140},
    {"id": 3, "MACHINE #": "GR-001", "FLOOR": "GREEN ROOM", "x": 50, "y": 50}
]"#;

#[tokio::test]
async fn test_seeded_floor_exports_csv_and_png() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("machines.json");
    std::fs::write(&seed, SEED).unwrap();

    let mut config = Config::default();
    config.store.seed_path = Some(seed);
    config.export.output_dir = dir.path().join("exports");

    let store: Arc<dyn RecordStore> = open_store(&config).unwrap();
    let mut editor = FloorMapEditor::new(
        store,
        Floor::CyberStudio,
        StatusKind::Machine,
        config.session.role.clone(),
        editor_options(&config),
    );
    editor
        .set_viewport_size(config.editor.viewport_width_px, config.editor.viewport_height_px)
        .unwrap();
    assert_eq!(editor.load().await, 2);

    let written = editor.write_exports(&config.export.output_dir).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("machines_CYBER_STUDIO.csv"));
    assert!(written[1].ends_with("floor-map-CYBER_STUDIO.png"));

    let csv = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        csv,
        "id,machine,floor,x,y\n\
         \"1\",\"CS-001\",\"CYBER STUDIO\",\"10\",\"20\"\n\
         \"2\",\"CS-002\",\"CYBER STUDIO\",\"0\",\"140\""
    );
    let png = std::fs::read(&written[1]).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn test_missing_seed_file_is_an_error() {
    let mut config = Config::default();
    config.store.seed_path = Some("/nonexistent/machines.json".into());
    assert!(open_store(&config).is_err());
}
