mod grid;
mod watch;

use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use trellis_model::{FsResources, ModelStore, ResourceKey};

#[derive(Parser)]
#[command(name = "trellis", about = "Connected-texture meshing demo")]
struct Args {
    /// Root directory holding model documents (models/<key>.toml).
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Model document to render the sample grid with.
    #[arg(long, default_value = "pillar")]
    model: String,

    /// Edge length of the sample grid.
    #[arg(long, default_value_t = 8)]
    size: i32,

    /// Watch the assets directory and re-mesh on model changes.
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let store = ModelStore::new(FsResources::new(&args.assets));
    let key = ResourceKey::new(args.model.clone());
    grid::run_pass(&store, &key, args.size)?;

    if args.watch {
        let (tx, rx) = mpsc::channel();
        let _watcher = watch::spawn(&args.assets, tx)?;
        log::info!("watching {} for model changes", args.assets.display());
        while rx.recv().is_ok() {
            // Coalesce bursts of filesystem events into one reload.
            while rx.try_recv().is_ok() {}
            store.invalidate_all();
            if let Err(err) = grid::run_pass(&store, &key, args.size) {
                log::error!("reload failed: {err}");
            }
        }
    }
    Ok(())
}
