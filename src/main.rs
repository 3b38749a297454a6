use crate::app::App;
use crate::config::Config;
use crate::router::handle;
use astra::Server;

mod animation;
mod app;
mod config;
mod domain;
mod errors;
mod logging;
mod map;
mod responses;
mod router;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration from .env and the environment
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Logging
    logging::init_logging(&config.log_level);

    // 3️⃣ Shared state: sessions and the tile provider
    let app = App::new(config);
    let addr = app.config.bind_addr;
    let workers = app.config.max_workers;

    tracing::info!(
        %addr,
        workers,
        tiles = app.tiles.attribution(),
        "starting server at http://{addr}"
    );

    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
