use actix_web::{middleware, web, App, HttpServer};
use logoforge::{
    logger,
    server::{self, AppState},
    ArtClient, Config, Generator, StyleCatalog,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env()?;
    logger::init_with_config(config.log.clone())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found, using process environment");
    }

    logger::log_config_info(&config);

    let client = ArtClient::new(config.art.clone())?;
    let generator: Arc<dyn Generator> = Arc::new(client.image().clone());
    let catalog = StyleCatalog::builtin();
    log::info!("🖌️  {} preset styles available", catalog.len());
    let state = AppState::new(catalog, generator);

    let address = config.bind_address();
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(server::configure)
    })
    .bind(&address)?
    .run()
    .await?;

    Ok(())
}
