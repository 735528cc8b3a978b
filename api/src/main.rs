use actix_web::{web, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use lark_api::app::{create_app, AppState};
use lark_core::domain::value_objects::AdminAllowlist;
use lark_core::services::{
    CodeSweeper, ContactService, SweeperConfig, TokenIssuer, TokenIssuerConfig, VerificationPolicy,
    VerificationService,
};
use lark_infra::{DatabasePool, Messenger, MySqlContactRepository, MySqlVerificationCodeRepository};
use lark_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    tracing::info!(
        environment = %config.environment,
        "Starting Larkspur API server"
    );

    let database = DatabasePool::new(&config.database).await?;
    database.run_migrations().await?;

    let code_repository = Arc::new(MySqlVerificationCodeRepository::new(
        database.get_pool().clone(),
    ));
    let contact_repository = Arc::new(MySqlContactRepository::new(database.get_pool().clone()));

    let messenger = Arc::new(Messenger::for_channel(&config.messenger)?);
    tracing::info!(
        provider = messenger.provider_name(),
        "Outbound messenger ready"
    );

    let tokens = Arc::new(TokenIssuer::new(TokenIssuerConfig {
        jwt_secret: config.auth.jwt_secret.clone(),
        session_ttl_hours: config.auth.session_ttl_hours,
    }));
    let allowlist = AdminAllowlist::new(config.auth.admin_identities.clone());
    let policy = VerificationPolicy {
        code_length: config.verification.code_length,
        code_ttl_minutes: config.verification.code_ttl_minutes,
    };

    let verification = Arc::new(VerificationService::new(
        code_repository.clone(),
        messenger,
        tokens.clone(),
        allowlist,
        policy,
    ));
    let contacts = Arc::new(ContactService::new(contact_repository));

    if config.verification.sweep_interval_secs > 0 {
        let sweeper = Arc::new(CodeSweeper::new(
            code_repository,
            SweeperConfig {
                interval_seconds: config.verification.sweep_interval_secs,
                enabled: true,
            },
        ));
        sweeper.start_background_task();
    }

    let state = web::Data::new(AppState {
        verification,
        contacts,
        tokens,
    });
    let database_data = web::Data::new(database);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    HttpServer::new(move || create_app(state.clone()).app_data(database_data.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
