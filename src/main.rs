use anyhow::Result;
use clap::{Parser, Subcommand};
use cookbook::Config;
use sqlx::migrate::MigrateDatabase;

/// cookbook - Share recipes, comments and shopping lists
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Recipe sharing web application", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Insert the sample catalog when the database has no recipe
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cookbook::observability::init_observability(
        "cookbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Seed => seed_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting cookbook server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = cookbook::db::connect(&config.database.url, config.database.max_connections).await?;

    if config.seed.enabled {
        let created = cookbook_recipe::seed::seed(
            &state,
            &mut rand::rng(),
            &(&config.seed).into(),
        )
        .await?;
        tracing::info!(created, "Seed completed");
    }

    let app = cookbook::router(cookbook::AppState::new(config, state.clone()));

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database pools");
    state.read_db.close().await;
    state.write_db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %err, "failed to listen for shutdown signal");
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = cookbook::db::create_write_pool(&config.database.url).await?;
    cookbook::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn seed_command(config: Config) -> Result<()> {
    let state = cookbook::db::connect(&config.database.url, config.database.max_connections).await?;

    let created =
        cookbook_recipe::seed::seed(&state, &mut rand::rng(), &(&config.seed).into()).await?;
    tracing::info!(created, "Seed completed");

    state.read_db.close().await;
    state.write_db.close().await;

    Ok(())
}
