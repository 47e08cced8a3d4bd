//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use guichet_auth::password::PasswordHasher;
use guichet_auth::scope::ScopeEngine;
use guichet_auth::session::SessionResolver;
use guichet_auth::token::TokenService;
use guichet_core::config::AppConfig;
use guichet_database::DatabasePool;
use guichet_database::repositories::group::GroupRepository;
use guichet_database::repositories::ticket::TicketRepository;
use guichet_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, also the liveness probe target.
    pub db: DatabasePool,
    /// Session token signer/verifier.
    pub token_service: Arc<TokenService>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Cookie-to-user session resolution.
    pub session_resolver: Arc<SessionResolver>,
    /// Group-hierarchy authorization engine.
    pub scope_engine: Arc<ScopeEngine>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Ticket repository.
    pub ticket_repo: Arc<TicketRepository>,
}

impl AppState {
    /// Wires the full dependency graph from configuration and a pool.
    pub fn build(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let group_repo = Arc::new(GroupRepository::new(pool.clone()));
        let ticket_repo = Arc::new(TicketRepository::new(pool));

        let token_service = Arc::new(TokenService::new(&config.auth));
        let session_resolver = Arc::new(SessionResolver::new(
            Arc::clone(&token_service),
            Arc::clone(&user_repo) as Arc<dyn guichet_auth::store::UserDirectory>,
        ));
        let scope_engine = Arc::new(ScopeEngine::new(
            group_repo as Arc<dyn guichet_auth::store::MembershipDirectory>,
        ));

        Self {
            config: Arc::new(config),
            db,
            token_service,
            password_hasher: Arc::new(PasswordHasher::new()),
            session_resolver,
            scope_engine,
            user_repo,
            ticket_repo,
        }
    }
}
