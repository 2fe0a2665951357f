use storefront_lib::api::config::Config;
use storefront_lib::api::server;
use storefront_lib::utils::logger::init_logger;

#[tokio::main]
async fn main() {
    init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::start(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
