use anyhow::Context;
use catalog::Catalog;
use clap::Parser;
use log::{error, info};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use web::bridge::{routes, ViewerState};

mod archive;
mod catalog;
mod web;

const BUNDLED_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/airfoils");

#[derive(Parser)]
#[command(author, version, about = "Airfoil viewer and SVG/DXF bulk downloader")]
struct Args {
    /// Directory of airfoil files to offer
    #[arg(long, default_value = BUNDLED_CATALOG)]
    catalog: PathBuf,
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8050")]
    bind: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = Catalog::scan(&args.catalog)?;
    info!(
        "{} airfoils in catalog {}",
        catalog.len(),
        args.catalog.display()
    );
    let state = Arc::new(ViewerState::new(catalog));

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating runtime for the viewer")?;
    runtime.block_on(async move {
        let (addr, server) = warp::serve(routes(state))
            .try_bind_with_graceful_shutdown(args.bind, async {
                if let Err(err) = signal::ctrl_c().await {
                    error!("waiting for Ctrl+C failed: {}", err);
                }
            })
            .with_context(|| format!("binding {}", args.bind))?;
        info!("viewer listening on http://{} (Ctrl+C to stop)", addr);
        server.await;
        Ok::<(), anyhow::Error>(())
    })?;

    info!("viewer stopped");
    Ok(())
}
