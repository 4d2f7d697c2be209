use crate::auth::sessions::create_session;
use crate::auth::SessionAuth;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

mod api;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod wizard;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("appraisal_capture=debug,info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&format!("Invalid configuration: {e}")),
    };

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db) {
        fail(&format!("Database initialization failed: {e}"));
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => serve(db, config),
        [cmd, user_id] if cmd == "issue-session" => issue_session(&db, &config, user_id),
        _ => fail("usage: appraisal_capture [issue-session <user-id>]"),
    }
}

fn serve(db: Database, config: AppConfig) {
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = AppState {
        identity: Box::new(SessionAuth::new(db.clone())),
        db,
        config,
    };

    tracing::info!(%addr, workers, db = %state.db.path(), "starting server");

    let result = Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| handle(req, &state));

    match result {
        Ok(()) => tracing::info!("server shut down cleanly"),
        Err(e) => fail(&format!("Server ended with error: {e}")),
    }
}

/// Prints a token for `user_id`, for local use without the external auth provider.
fn issue_session(db: &Database, config: &AppConfig, user_id: &str) {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        fail("user id must not be empty");
    }

    let issued = db.with_conn(|conn| {
        create_session(conn, user_id, Utc::now().timestamp(), config.session_ttl_secs)
    });
    match issued {
        Ok(token) => {
            tracing::info!(user = %user_id, ttl_secs = config.session_ttl_secs, "session issued");
            println!("{token}");
        }
        Err(e) => fail(&format!("Failed to issue session: {e}")),
    }
}

fn fail(message: &str) -> ! {
    tracing::error!("{message}");
    std::process::exit(1);
}
