use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::require_session;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    // Everything under /api except login/logout sits behind the session check
    let protected = Router::new()
        .merge(auth_protected_routes())
        .merge(users_routes())
        .merge(clients_routes())
        .merge(wallets_routes())
        .merge(transactions_routes())
        .merge(schedulings_routes())
        .merge(tasks_routes())
        .merge(payment_methods_routes())
        .merge(locations_routes())
        .merge(investor_profile_routes())
        .merge(budgets_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Session acquisition and release
        .merge(auth_public_routes())
        // Authenticated relays
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
}

fn auth_protected_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/me", get(auth::me))
}

fn users_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/roles", get(users::roles))
        .route(
            "/api/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
}

fn clients_routes() -> Router<AppState> {
    use handlers::clients;

    Router::new()
        .route("/api/clients", get(clients::list).post(clients::create))
        .route(
            "/api/clients/:id",
            get(clients::get).put(clients::update).delete(clients::delete),
        )
        .route("/api/clients/user/:user_id", get(clients::by_user))
}

fn wallets_routes() -> Router<AppState> {
    use handlers::wallets;

    Router::new()
        .route("/api/wallets", post(wallets::create))
        .route(
            "/api/wallets/:id",
            get(wallets::get).put(wallets::update).delete(wallets::delete),
        )
        .route("/api/wallets/user/:user_id", get(wallets::by_user))
}

fn transactions_routes() -> Router<AppState> {
    use handlers::transactions;

    Router::new()
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/:id",
            get(transactions::get)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        .route(
            "/api/transactions/wallet/:wallet_id",
            get(transactions::by_wallet),
        )
        .merge(transaction_categories_routes())
}

fn transaction_categories_routes() -> Router<AppState> {
    use handlers::transaction_categories as categories;

    Router::new()
        .route(
            "/api/transaction-categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/transaction-categories/:id",
            put(categories::update).delete(categories::delete),
        )
}

fn schedulings_routes() -> Router<AppState> {
    use handlers::schedulings;

    Router::new()
        .route("/api/schedulings", post(schedulings::create))
        .route(
            "/api/schedulings/:id",
            get(schedulings::get)
                .put(schedulings::update)
                .delete(schedulings::delete),
        )
        .route("/api/schedulings/user/:user_id", get(schedulings::by_user))
        .merge(meeting_reasons_routes())
}

fn meeting_reasons_routes() -> Router<AppState> {
    use handlers::meeting_reasons as reasons;

    Router::new()
        .route(
            "/api/meeting-reasons",
            get(reasons::list).post(reasons::create),
        )
        .route(
            "/api/meeting-reasons/:id",
            put(reasons::update).delete(reasons::delete),
        )
}

fn tasks_routes() -> Router<AppState> {
    use handlers::tasks;

    Router::new()
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/:id",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        .route("/api/tasks/user/:user_id", get(tasks::by_user))
}

fn payment_methods_routes() -> Router<AppState> {
    use handlers::payment_methods as methods;

    Router::new()
        .route(
            "/api/payment-methods",
            get(methods::list).post(methods::create),
        )
        .route(
            "/api/payment-methods/:id",
            put(methods::update).delete(methods::delete),
        )
}

fn locations_routes() -> Router<AppState> {
    use handlers::locations;

    Router::new()
        .route("/api/locations/countries", get(locations::countries))
        .route(
            "/api/locations/countries/:id/states",
            get(locations::states),
        )
        .route("/api/locations/states/:id/cities", get(locations::cities))
}

fn investor_profile_routes() -> Router<AppState> {
    use handlers::investor_profile as profile;

    Router::new()
        .route("/api/investor-profile/questions", get(profile::questions))
        .route(
            "/api/investor-profile/client/:client_id",
            get(profile::by_client),
        )
        .route(
            "/api/investor-profile/answers",
            post(profile::submit_answers),
        )
}

fn budgets_routes() -> Router<AppState> {
    use handlers::budgets;

    Router::new()
        .route("/api/budgets", get(budgets::list).post(budgets::create))
        .route(
            "/api/budgets/:id",
            put(budgets::update).delete(budgets::delete),
        )
        .route("/api/budgets/client/:client_id", get(budgets::by_client))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Advisor Gateway",
        "version": version,
        "description": "Session-authenticated relay between the advisor dashboard and the platform backend",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "auth": "/api/auth/login, /api/auth/logout (public), /api/auth/change-password, /api/auth/me (session)",
            "resources": "/api/{users,clients,wallets,transactions,transaction-categories,schedulings,meeting-reasons,tasks,payment-methods,locations,investor-profile,budgets} (session)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
