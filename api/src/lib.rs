#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod db;
#[allow(clippy::pedantic)]
pub mod entities;
pub mod handlers;
pub mod objects;
pub mod queries;

use async_graphql::{
    extensions::{ApolloTracing, Logger},
    EmptyMutation, EmptySubscription, Schema,
};
use db::Connection;
use handlers::{graphql_handler, playground};
use hub_core::clap;
use poem::{get, middleware::AddData, Endpoint, EndpointExt, Route};
use queries::Query;

pub type AppSchema = Schema<Query, EmptyMutation, EmptySubscription>;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 3008)]
    pub port: u16,

    /// Attach Apollo tracing data to every GraphQL response
    #[arg(long, env)]
    pub graphql_debug: bool,

    #[command(flatten)]
    pub db: db::DbArgs,
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub connection: Connection,
}

impl AppState {
    #[must_use]
    pub fn new(schema: AppSchema, connection: Connection) -> Self {
        Self { schema, connection }
    }
}

/// Per-request data made available to resolvers.
pub struct AppContext {
    pub db: Connection,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

/// Builds the GraphQL Schema. The database is attached per request through [`AppContext`].
#[must_use]
pub fn build_schema(debug: bool) -> AppSchema {
    let builder =
        Schema::build(Query::default(), EmptyMutation, EmptySubscription).extension(Logger);

    if debug {
        builder.extension(ApolloTracing).finish()
    } else {
        builder.finish()
    }
}

/// `/graphql` serves the playground on GET and executes query documents on POST.
#[must_use]
pub fn router(state: AppState) -> impl Endpoint {
    Route::new().at(
        "/graphql",
        get(playground)
            .post(graphql_handler)
            .with(AddData::new(state)),
    )
}
