use actix_multipart::form::MultipartFormConfig;
use actix_web::{App, HttpServer, middleware, web};

use uptube::models::config::ServerConfig;
use uptube::publisher::youtube::YoutubePublisher;
use uptube::routes::upload::process_video;

const MULTIPART_TOTAL_LIMIT: usize = 2 * 1024 * 1024 * 1024;
const MULTIPART_MEMORY_LIMIT: usize = 10 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let publisher = web::Data::new(YoutubePublisher::new(reqwest::Client::new()));

    log::info!("Starting Uptube server at {}", server_config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(publisher.clone())
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(MULTIPART_TOTAL_LIMIT)
                    .memory_limit(MULTIPART_MEMORY_LIMIT),
            )
            .service(process_video)
    })
    .bind(&server_config.bind_address)?
    .run()
    .await
}

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("uptube").required(false))
        .add_source(config::Environment::with_prefix("UPTUBE"))
        .build()?
        .try_deserialize()
}
