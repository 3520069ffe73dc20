#![allow(non_snake_case)]

mod client;

use pochven_payout::{model, payout};

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use pochven_payout::server::{self, config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => exit_with("Configuration error", e),
        };

        let esi_client = startup::build_esi_client(&config)
            .unwrap_or_else(|e| exit_with("Failed to build ESI client", e));
        let esi = startup::build_esi_api(&config)
            .unwrap_or_else(|e| exit_with("Failed to build ESI HTTP client", e));
        let session = startup::build_session_layer();

        tracing::info!(esi_url = %config.esi_url, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { esi_client, esi })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

#[cfg(feature = "server")]
fn exit_with(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    std::process::exit(1);
}
