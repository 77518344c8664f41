use std::{sync::Arc, time::Duration};

use hub_core::{
    anyhow::{anyhow, Context, Result},
    clap,
};
pub use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use url::Url;

/// Arguments for establishing a database connection
#[derive(Debug, clap::Args)]
pub struct DbArgs {
    #[arg(long, env, default_value_t = 500)]
    pub max_connections: u32,
    #[arg(long, env, default_value_t = 60)]
    pub connection_timeout: u64,
    #[arg(long, env, default_value_t = 10)]
    pub acquire_timeout: u64,
    #[arg(long, env, default_value_t = 60)]
    pub idle_timeout: u64,

    /// Full connection URL. Takes precedence over the individual `db-*` options.
    #[arg(long, env)]
    pub database_url: Option<String>,
    #[arg(long, env, default_value = "localhost")]
    pub db_host: String,
    #[arg(long, env, default_value_t = 5432)]
    pub db_port: u16,
    #[arg(long, env)]
    pub db_name: Option<String>,
    #[arg(long, env)]
    pub db_user: Option<String>,
    #[arg(long, env, hide_env_values = true)]
    pub db_password: Option<String>,
}

impl DbArgs {
    /// Resolves the Postgres URL to connect to.
    ///
    /// # Errors
    /// This function fails if neither a URL nor a database name is configured,
    /// or if the host and credentials cannot form a valid URL.
    pub fn url(&self) -> Result<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let name = self
            .db_name
            .as_deref()
            .context("either --database-url or --db-name must be set")?;

        let mut url = Url::parse(&format!("postgres://{}:{}", self.db_host, self.db_port))
            .context("invalid database host")?;
        url.set_path(&format!("/{name}"));

        if let Some(user) = &self.db_user {
            url.set_username(user)
                .map_err(|()| anyhow!("database url cannot carry a username"))?;
        }

        if let Some(password) = &self.db_password {
            url.set_password(Some(password))
                .map_err(|()| anyhow!("database url cannot carry a password"))?;
        }

        Ok(url.into())
    }
}

/// Handle to the connection pool. Cloning shares the pool; every statement
/// checks a connection out and returns it when the statement completes.
#[derive(Debug, Clone)]
pub struct Connection(Arc<DatabaseConnection>);

impl Connection {
    /// Opens the pool described by `args`.
    ///
    /// # Errors
    /// This function fails if the configuration is incomplete or the database
    /// is unreachable.
    pub async fn new(args: DbArgs) -> Result<Self> {
        let url = args.url()?;
        let DbArgs {
            max_connections,
            connection_timeout,
            acquire_timeout,
            idle_timeout,
            ..
        } = args;

        let options = ConnectOptions::new(url)
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(connection_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .clone();

        let connection = Database::connect(options)
            .await
            .context("failed to get database connection")?;

        Ok(Self(Arc::new(connection)))
    }

    #[must_use]
    pub fn get(&self) -> &DatabaseConnection {
        &self.0
    }
}

impl From<Arc<DatabaseConnection>> for Connection {
    fn from(connection: Arc<DatabaseConnection>) -> Self {
        Self(connection)
    }
}
