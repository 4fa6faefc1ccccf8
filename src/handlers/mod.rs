pub mod blog_posts;
pub mod entries;
pub mod leaves;
pub mod portfolio;
pub mod side_projects;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, error, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::StoreError;
use crate::models::OwnerKind;

/// Every route is mounted under this scope; `Location` headers include it.
pub const API_PREFIX: &str = "/api";

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    cfg.route("/health", web::get().to(health));

    // ── Portfolio routes (mutations require a valid JWT) ──
    cfg.route("/create-portfolio", web::post().to(portfolio::create_portfolio))
        .route("/portfolios", web::get().to(portfolio::get_portfolios))
        .route("/portfolio/{id}", web::get().to(portfolio::get_portfolio))
        .route("/update-portfolio/{id}", web::put().to(portfolio::update_portfolio))
        .route("/portfolio/delete/{id}", web::delete().to(portfolio::delete_portfolio));

    // ── Side projects on their own ──
    cfg.route("/create-sideproject", web::post().to(side_projects::create_side_project))
        .route("/sideprojects", web::get().to(side_projects::get_side_projects))
        .route("/sideproject/{id}", web::get().to(side_projects::get_side_project))
        .route("/update-sideproject/{id}", web::put().to(side_projects::update_side_project))
        .route("/sideproject/delete/{id}", web::delete().to(side_projects::delete_side_project));

    // ── Blog posts ──
    cfg.route("/create-blogpost", web::post().to(blog_posts::create_blog_post))
        .route("/blogposts", web::get().to(blog_posts::get_blog_posts))
        .route("/blogpost/{id}", web::get().to(blog_posts::get_blog_post))
        .route("/update-blogpost/{id}", web::put().to(blog_posts::update_blog_post))
        .route("/blogpost/delete/{id}", web::delete().to(blog_posts::delete_blog_post));

    // ── Portfolio entries: /portfolio/{portfolio_id}/... ──
    entries::init_routes(cfg);

    // ── Leaves of any owner: /{owner}/{owner_id}/... ──
    leaves::init_routes(cfg);
}

/// GET /api/health — liveness plus a database round trip.
pub async fn health(db: web::Data<DatabaseConnection>) -> impl Responder {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "error": "Database unavailable",
            }))
        }
    }
}

/// Malformed or incomplete JSON bodies get the same `{"error": ...}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({ "error": format!("Invalid request body: {err}") });
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Unparseable query strings, e.g. an unknown `?type=`, are a 400 too.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({ "error": format!("Invalid query string: {err}") });
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Map a store error onto its status code. Database details stay in the log.
pub(crate) fn error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::Validation(message) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }
        StoreError::SlotOccupied(message) => {
            HttpResponse::Conflict().json(serde_json::json!({ "error": message }))
        }
        StoreError::NotFound(message) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": message }))
        }
        StoreError::Database(e) => {
            tracing::error!(error = %e, "data access failed");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error",
            }))
        }
    }
}

pub(crate) fn not_found(what: &str, id: i32) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("{what} {id} not found"),
    }))
}

/// 201 with a `Location` header pointing at the GET route of the new row.
pub(crate) fn created<T: Serialize>(location: String, body: &T) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(body)
}

pub(crate) fn deleted(what: &str, id: i32, rows_affected: u64) -> HttpResponse {
    if rows_affected > 0 {
        HttpResponse::Ok().json(serde_json::json!({
            "message": format!("{what} {id} deleted"),
            "rowsAffected": rows_affected,
        }))
    } else {
        not_found(what, id)
    }
}

/// Resolve the `{owner}` path segment; unknown kinds are a 404.
pub(crate) fn parse_owner(segment: &str) -> Result<OwnerKind, HttpResponse> {
    OwnerKind::from_path_segment(segment).ok_or_else(|| {
        HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown owner kind '{segment}'"),
        }))
    })
}
