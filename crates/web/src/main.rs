use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod events;
mod features;
mod middleware;
mod state;

use config::Config;
use events::EventBus;
use features::live::feed::StandingsFeed;
use middleware::auth::Pins;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::activities::handlers::list_activities,
        features::entries::handlers::submit_entry,
        features::entries::handlers::list_entries,
        features::entries::handlers::delete_entry,
        features::standings::handlers::get_team_standings,
        features::standings::handlers::get_class_standings,
        features::records::handlers::list_records,
        features::admin::handlers::reset_event,
    ),
    components(
        schemas(
            storage::dto::entry::SubmitEntryRequest,
            storage::dto::entry::OutcomePayload,
            storage::dto::entry::DuelResult,
            storage::dto::entry::TripleResult,
            storage::dto::entry::EntryResponse,
            storage::dto::standings::StandingRow,
            storage::dto::record::RecordStatusResponse,
            storage::models::Entry,
            storage::models::ActivityRecord,
            storage::models::Activity,
            storage::models::Category,
            features::auth::handlers::LoginRequest,
            features::auth::handlers::LoginResponse,
            features::admin::handlers::ResetSummary,
            features::live::feed::LiveStandings,
            events::ChangeEvent,
            middleware::auth::Role,
        )
    ),
    tags(
        (name = "auth", description = "Station PIN login"),
        (name = "activities", description = "Static activity catalog"),
        (name = "entries", description = "Score submission and journal"),
        (name = "standings", description = "Team and class leaderboards"),
        (name = "records", description = "Activity records and holders"),
        (name = "admin", description = "Irreversible administration actions"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "station_pin",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Station PIN")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting olympiad scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let bus = Arc::new(EventBus::default());
    let feed = StandingsFeed::spawn(db.clone(), &bus)
        .await
        .context("Failed to start the live standings feed")?;
    let pins = Pins::new(config.admin_pin.clone(), config.operator_pin.clone());

    let state = AppState {
        db,
        bus,
        feed,
        pins: pins.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/auth", features::auth::routes::routes())
        .nest("/activities", features::activities::routes::routes())
        .nest("/entries", features::entries::routes::routes(pins.clone()))
        .nest("/standings", features::standings::routes::routes())
        .nest("/records", features::records::routes::routes())
        .nest("/admin", features::admin::routes::routes(pins))
        .nest("/live", features::live::routes::routes());

    let app = Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
