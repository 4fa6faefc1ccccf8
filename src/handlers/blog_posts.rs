use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use super::{API_PREFIX, created, deleted, error_response, not_found};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::blog_posts as blog_db;
use crate::models::blog_post::{CreateBlogPost, UpdateBlogPost};

pub async fn get_blog_posts(db: web::Data<DatabaseConnection>) -> impl Responder {
    match blog_db::get_all_blog_posts(db.get_ref()).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => error_response(e),
    }
}

pub async fn get_blog_post(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match blog_db::get_blog_post(db.get_ref(), id).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => not_found("Blog post", id),
        Err(e) => error_response(e),
    }
}

pub async fn create_blog_post(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateBlogPost>,
) -> impl Responder {
    match blog_db::insert_blog_post(db.get_ref(), body.into_inner()).await {
        Ok(post) => created(format!("{API_PREFIX}/blogpost/{}", post.id), &post),
        Err(e) => error_response(e),
    }
}

pub async fn update_blog_post(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdateBlogPost>,
) -> impl Responder {
    let id = path.into_inner();
    match blog_db::update_blog_post(db.get_ref(), id, body.into_inner()).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => not_found("Blog post", id),
        Err(e) => error_response(e),
    }
}

pub async fn delete_blog_post(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match blog_db::delete_blog_post(db.get_ref(), id).await {
        Ok(rows) => deleted("Blog post", id, rows),
        Err(e) => error_response(e),
    }
}
