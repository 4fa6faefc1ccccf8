use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use super::{API_PREFIX, created, deleted, error_response, not_found};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::side_projects as side_project_db;
use crate::models::side_project::{CreateSideProject, UpdateSideProject};

/// GET /api/sideprojects — every side project with its attachments.
pub async fn get_side_projects(db: web::Data<DatabaseConnection>) -> impl Responder {
    match side_project_db::get_all(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

/// GET /api/sideproject/{id}
pub async fn get_side_project(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match side_project_db::get(db.get_ref(), id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => not_found("Side project", id),
        Err(e) => error_response(e),
    }
}

/// POST /api/create-sideproject — `portfolioId` in the body links the new
/// project to a portfolio (requires authentication).
pub async fn create_side_project(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateSideProject>,
) -> impl Responder {
    match side_project_db::create(db.get_ref(), body.into_inner()).await {
        Ok(item) => created(format!("{API_PREFIX}/sideproject/{}", item.id), &item),
        Err(e) => error_response(e),
    }
}

/// PUT /api/update-sideproject/{id} (requires authentication).
pub async fn update_side_project(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateSideProject>,
) -> impl Responder {
    let id = path.into_inner();
    match side_project_db::update(db.get_ref(), id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => not_found("Side project", id),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/sideproject/delete/{id} (requires authentication).
pub async fn delete_side_project(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match side_project_db::delete(db.get_ref(), id).await {
        Ok(rows) => deleted("Side project", id, rows),
        Err(e) => error_response(e),
    }
}
