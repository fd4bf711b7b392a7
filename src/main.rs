mod api;
mod cli;
mod error;
mod model;
mod service;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use cli::Args;
use service::{GeoDatabase, MaxmindDb};

const DB_DOWNLOAD_URL: &str = "https://github.com/P3TERX/GeoLite.mmdb";

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let db_path = args.file.as_deref().with_context(|| {
        format!(
            "no database file given; pass -f /path/to/GeoLite2-City.mmdb (get it from {})",
            DB_DOWNLOAD_URL
        )
    })?;

    let db = MaxmindDb::open(db_path).with_context(|| {
        format!(
            "GeoLite2-City.mmdb not found or unreadable at {}. Please get it from {}",
            db_path, DB_DOWNLOAD_URL
        )
    })?;
    let db: Arc<dyn GeoDatabase> = Arc::new(db);
    info!("Geolocation database loaded from {}", db_path);

    info!("Listening on {}:{}", args.listen, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(db.clone()))
            .configure(api::init_routes)
    })
    .bind((args.listen.as_str(), args.port))?
    .run()
    .await?;

    Ok(())
}
