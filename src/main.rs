use clap::Parser;
use floorkit::{
    editor_options, fetch_all, init_logging, open_store, Config, Floor, FloorMapEditor,
    RecordStore, StatusKind, BUILD_DATE, VERSION,
};
use floorkit_settings::default_config_path;
use std::sync::Arc;

/// Load one floor of the machine map and export it.
#[derive(Debug, Parser)]
#[command(name = "floorkit", version)]
struct Cli {
    /// Floor to open, by name ("CYBER STUDIO") or slug ("cyber-studio")
    #[arg(long)]
    floor: Option<String>,

    /// Status column that drives token colour
    #[arg(long, value_name = "machine|power")]
    status: Option<StatusKind>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::info!("Floorkit {} (built {})", VERSION, BUILD_DATE);

    let config = match default_config_path() {
        Ok(path) => Config::load_or_default(&path)?,
        Err(e) => {
            tracing::warn!("{}, using default configuration", e);
            Config::default()
        }
    };

    let floor = cli
        .floor
        .as_deref()
        .map(Floor::parse_or_default)
        .unwrap_or(config.session.default_floor);
    let status = cli.status.unwrap_or(config.session.default_status);

    let store = open_store(&config)?;
    let total = fetch_all(store.as_ref(), config.store.fetch_batch_size).await?;
    tracing::info!("Record store holds {} machine(s)", total.len());

    let store: Arc<dyn RecordStore> = store;
    let mut editor = FloorMapEditor::new(
        store,
        floor,
        status,
        config.session.role.clone(),
        editor_options(&config),
    );
    editor.set_viewport_size(
        config.editor.viewport_width_px,
        config.editor.viewport_height_px,
    )?;
    let loaded = editor.load().await;
    tracing::info!(
        "{}: {} machine(s), coloured by {} status, map extent {} px",
        floor,
        loaded,
        status,
        editor.canvas().min_height()
    );

    let written = if config.export.write_png {
        editor.write_exports(&config.export.output_dir)?
    } else {
        vec![floorkit_designer::export::write_export(
            &config.export.output_dir,
            &floorkit_designer::csv_file_name(floor),
            editor.export_csv().as_bytes(),
        )?]
    };
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
