//!

use holaplex_hub_customers::{build_schema, db::Connection, router, AppState, Args};
use hub_core::{
    anyhow::Context as AnyhowContext,
    tokio,
    tracing::{error, info},
};
use poem::{listener::TcpListener, Server};

pub fn main() {
    let opts = hub_core::StartConfig {
        service_name: "hub-customers",
    };

    hub_core::run(opts, |common, args| {
        let Args {
            port,
            graphql_debug,
            db,
        } = args;

        common.rt.block_on(async move {
            let connection = Connection::new(db)
                .await
                .context("failed to get database connection")?;
            let schema = build_schema(graphql_debug);
            let state = AppState::new(schema, connection);

            info!(port, graphql_debug, "serving graphql on /graphql");

            Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
                .run_with_graceful_shutdown(
                    router(state),
                    async {
                        if let Err(e) = tokio::signal::ctrl_c().await {
                            error!("failed to listen for shutdown signal: {e}");
                            std::future::pending::<()>().await;
                        }
                    },
                    None,
                )
                .await
                .context("failed to build graphql server")
        })
    });
}
