use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use super::{API_PREFIX, created, deleted, error_response, not_found};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::portfolio as portfolio_db;
use crate::models::portfolio::{CreatePortfolio, UpdatePortfolio};

/// GET /api/portfolios — list all portfolios, scalar fields only.
pub async fn get_portfolios(db: web::Data<DatabaseConnection>) -> impl Responder {
    match portfolio_db::get_all_portfolios(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

/// GET /api/portfolio/{id} — a portfolio with everything it owns.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::get_portfolio_graph(db.get_ref(), id).await {
        Ok(Some(graph)) => HttpResponse::Ok().json(graph),
        Ok(None) => not_found("Portfolio", id),
        Err(e) => error_response(e),
    }
}

/// POST /api/create-portfolio (requires authentication).
pub async fn create_portfolio(
    auth_user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePortfolio>,
) -> impl Responder {
    match portfolio_db::insert_portfolio(db.get_ref(), body.into_inner()).await {
        Ok(item) => {
            tracing::debug!(user_id = %auth_user.user_id, portfolio_id = item.id, "portfolio creator");
            created(format!("{API_PREFIX}/portfolio/{}", item.id), &item)
        }
        Err(e) => error_response(e),
    }
}

/// PUT /api/update-portfolio/{id} (requires authentication).
pub async fn update_portfolio(
    auth_user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdatePortfolio>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::update_portfolio(db.get_ref(), id, body.into_inner()).await {
        Ok(Some(updated)) => {
            tracing::debug!(user_id = %auth_user.user_id, portfolio_id = id, "portfolio updated");
            HttpResponse::Ok().json(updated)
        }
        Ok(None) => not_found("Portfolio", id),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/portfolio/delete/{id} — delete a portfolio and everything it
/// owns (requires authentication).
pub async fn delete_portfolio(
    auth_user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    tracing::debug!(user_id = %auth_user.user_id, portfolio_id = id, "portfolio delete requested");
    match portfolio_db::delete_portfolio(db.get_ref(), id).await {
        Ok(rows) => deleted("Portfolio", id, rows),
        Err(e) => error_response(e),
    }
}
