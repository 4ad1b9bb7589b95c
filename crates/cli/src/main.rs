//! vidtrack CLI - video production lifecycle tracker.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use vidtrack_api::{build_router, AppState};
use vidtrack_core::{Phase, VideoKey};
use vidtrack_progress::{classify_phase, overall_progress, Section};
use vidtrack_storage::{load_classified, VideoStore, YamlStorage};

mod config;

use config::{Config, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "vidtrack")]
#[command(about = "Track videos from idea to post-publish promotion", long_about = None)]
struct Cli {
    /// Directory holding the index and video records
    #[arg(long, env = "VIDTRACK_DATA_DIR", default_value = ".", global = true)]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "VIDTRACK_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, env = "VIDTRACK_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Count videos per phase
    Phases,
    /// Show phase and progress of one video
    Show {
        /// Video category
        category: String,
        /// Video name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::new(&cli.data_dir);
    if let Commands::Serve { host, port } = &cli.command {
        config = config.with_server(host.clone(), *port);
    }

    let storage = YamlStorage::new(&config.data_dir)
        .await
        .with_context(|| format!("opening store at {}", config.data_dir.display()))?;

    match cli.command {
        Commands::Serve { .. } => serve(&config, storage).await?,
        Commands::Phases => print_phases(&storage).await?,
        Commands::Show { category, name } => show(&storage, VideoKey::new(category, name)).await?,
    }

    Ok(())
}

async fn serve(config: &Config, storage: YamlStorage) -> Result<()> {
    info!(
        "Starting vidtrack v{} with data in {}",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );

    let state = AppState::new(Arc::new(storage));
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("vidtrack listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn print_phases(storage: &YamlStorage) -> Result<()> {
    let mut counts = [0usize; Phase::ALL.len()];
    for entry in storage.list_index().await? {
        let (_, phase) = load_classified(storage, &entry.key()).await;
        counts[phase.id() as usize] += 1;
    }

    println!("Phases");
    for phase in Phase::ALL {
        println!("  {:>2} {:<18} {}", phase.id(), phase.title(), counts[phase.id() as usize]);
    }
    Ok(())
}

async fn show(storage: &YamlStorage, key: VideoKey) -> Result<()> {
    let Some(video) = storage.load_video(&key).await? else {
        bail!("video not found: {key}");
    };

    println!("Video: {}", key);
    println!("  Phase: {}", classify_phase(&video));
    for section in Section::ALL {
        let p = section.progress(&video);
        println!(
            "  {:<16} {:>2}/{:<2} ({:.0}%)",
            section.title(),
            p.completed,
            p.total,
            p.percentage()
        );
    }
    let overall = overall_progress(&video);
    println!(
        "  {:<16} {:>2}/{:<2} ({:.0}%)",
        "Overall",
        overall.completed,
        overall.total,
        overall.percentage()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_missing_video_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = YamlStorage::new(dir.path()).await.unwrap();

        let err = show(&storage, VideoKey::new("devops", "argo-cd")).await.unwrap_err();
        assert_eq!(err.to_string(), "video not found: devops/argo-cd");
    }

    #[tokio::test]
    async fn test_phases_tolerate_broken_records() {
        let dir = tempfile::tempdir().unwrap();
        let storage = YamlStorage::new(dir.path()).await.unwrap();
        storage
            .create_video(&vidtrack_core::Video::new(&VideoKey::new("devops", "broken")))
            .await
            .unwrap();
        let record = dir.path().join("manuscript").join("devops").join("broken.yaml");
        std::fs::write(record, "code: [not a bool").unwrap();

        print_phases(&storage).await.unwrap();
    }
}
