//! Leaf routes shared by every owner kind: `/{owner}/{owner_id}/...` where
//! `{owner}` is one of the owner path segments (`portfolio`, `education`,
//! `work-experience`, ..., `skill`, `blogpost`).

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use super::{API_PREFIX, created, deleted, error_response, not_found, parse_owner};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::{achievements, images, skills, websites};
use crate::models::achievement::{CreateAchievement, UpdateAchievement};
use crate::models::image::{CreateImage, UpdateImage};
use crate::models::skill::{CreateSkill, UpdateSkill};
use crate::models::website::{CreateWebsite, UpdateWebsite, WebsiteQuery};
use crate::models::{ImageSlot, OwnerKind};

type OwnerPath = web::Path<(String, i32)>;
type LeafPath = web::Path<(String, i32, i32)>;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Images ──
    cfg.route("/{owner}/{owner_id}/create-image", web::post().to(create_image))
        .route("/{owner}/{owner_id}/images", web::get().to(get_images))
        .route("/{owner}/{owner_id}/image/{id}", web::get().to(get_image))
        .route("/{owner}/{owner_id}/update-image/{id}", web::put().to(update_image))
        .route("/{owner}/{owner_id}/image/delete/{id}", web::delete().to(delete_image))
        .route("/{owner}/{owner_id}/main-image", web::get().to(get_main_image))
        .route("/{owner}/{owner_id}/logo", web::get().to(get_logo))
        .route("/{owner}/{owner_id}/icon", web::get().to(get_icon));

    // ── Websites ──
    cfg.route("/{owner}/{owner_id}/create-website", web::post().to(create_website))
        .route("/{owner}/{owner_id}/websites", web::get().to(get_websites))
        .route("/{owner}/{owner_id}/website/{id}", web::get().to(get_website))
        .route("/{owner}/{owner_id}/update-website/{id}", web::put().to(update_website))
        .route("/{owner}/{owner_id}/website/delete/{id}", web::delete().to(delete_website));

    // ── Skills ──
    cfg.route("/{owner}/{owner_id}/create-skill", web::post().to(create_skill))
        .route("/{owner}/{owner_id}/skills", web::get().to(get_skills))
        .route("/{owner}/{owner_id}/skill/{id}", web::get().to(get_skill))
        .route("/{owner}/{owner_id}/update-skill/{id}", web::put().to(update_skill))
        .route("/{owner}/{owner_id}/skill/delete/{id}", web::delete().to(delete_skill));

    // ── Achievements ──
    cfg.route("/{owner}/{owner_id}/create-achievement", web::post().to(create_achievement))
        .route("/{owner}/{owner_id}/achievements", web::get().to(get_achievements))
        .route("/{owner}/{owner_id}/achievement/{id}", web::get().to(get_achievement))
        .route(
            "/{owner}/{owner_id}/update-achievement/{id}",
            web::put().to(update_achievement),
        )
        .route(
            "/{owner}/{owner_id}/achievement/delete/{id}",
            web::delete().to(delete_achievement),
        );
}

fn owner_of(path: OwnerPath) -> Result<(OwnerKind, i32), HttpResponse> {
    let (segment, owner_id) = path.into_inner();
    Ok((parse_owner(&segment)?, owner_id))
}

fn leaf_of(path: LeafPath) -> Result<(OwnerKind, i32, i32), HttpResponse> {
    let (segment, owner_id, id) = path.into_inner();
    Ok((parse_owner(&segment)?, owner_id, id))
}

fn leaf_location(owner: OwnerKind, owner_id: i32, leaf: &str, id: i32) -> String {
    format!("{API_PREFIX}/{}/{owner_id}/{leaf}/{id}", owner.path_segment())
}

// ── Images ──

/// POST /api/{owner}/{owner_id}/create-image (requires authentication).
///
/// Single-valued slots answer with the slot route as `Location`, e.g.
/// `/api/portfolio/5/main-image`.
pub async fn create_image(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: OwnerPath,
    body: web::Json<CreateImage>,
) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::create_for_owner(db.get_ref(), owner, owner_id, body.into_inner()).await {
        Ok(attached) => {
            let location = match attached.slot.path_segment() {
                Some(slot) => format!("{API_PREFIX}/{}/{owner_id}/{slot}", owner.path_segment()),
                None => leaf_location(owner, owner_id, "image", attached.image.id),
            };
            created(location, &attached)
        }
        Err(e) => error_response(e),
    }
}

pub async fn get_images(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::get_all_for_owner(db.get_ref(), owner, owner_id).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

pub async fn get_image(db: web::Data<DatabaseConnection>, path: LeafPath) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::get_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => not_found("Image", id),
        Err(e) => error_response(e),
    }
}

pub async fn update_image(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
    body: web::Json<UpdateImage>,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::update_for_owner(db.get_ref(), owner, owner_id, id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => not_found("Image", id),
        Err(e) => error_response(e),
    }
}

pub async fn delete_image(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::delete_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(rows) => deleted("Image", id, rows),
        Err(e) => error_response(e),
    }
}

async fn slot_image(db: &DatabaseConnection, path: OwnerPath, slot: ImageSlot) -> HttpResponse {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match images::get_slot(db, owner, owner_id, slot).await {
        Ok(Some(image)) => HttpResponse::Ok().json(image),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{} {owner_id} has no {}", owner.label(), slot.label()),
        })),
        Err(e) => error_response(e),
    }
}

/// GET /api/{owner}/{owner_id}/main-image
pub async fn get_main_image(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    slot_image(db.get_ref(), path, ImageSlot::MainImage).await
}

/// GET /api/{owner}/{owner_id}/logo
pub async fn get_logo(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    slot_image(db.get_ref(), path, ImageSlot::Logo).await
}

/// GET /api/{owner}/{owner_id}/icon
pub async fn get_icon(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    slot_image(db.get_ref(), path, ImageSlot::Icon).await
}

// ── Websites ──

pub async fn create_website(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: OwnerPath,
    body: web::Json<CreateWebsite>,
) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match websites::create_for_owner(db.get_ref(), owner, owner_id, body.into_inner()).await {
        Ok(site) => created(leaf_location(owner, owner_id, "website", site.id), &site),
        Err(e) => error_response(e),
    }
}

/// GET /api/{owner}/{owner_id}/websites — `?type=github` narrows the answer to
/// the one website of that type.
pub async fn get_websites(
    db: web::Data<DatabaseConnection>,
    path: OwnerPath,
    query: web::Query<WebsiteQuery>,
) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    if let Some(website_type) = query.into_inner().website_type {
        return match websites::get_by_type(db.get_ref(), owner, owner_id, website_type).await {
            Ok(Some(site)) => HttpResponse::Ok().json(site),
            Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
                "error": format!(
                    "{} {owner_id} has no {} website",
                    owner.label(),
                    website_type.label()
                ),
            })),
            Err(e) => error_response(e),
        };
    }

    match websites::get_all_for_owner(db.get_ref(), owner, owner_id).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

pub async fn get_website(db: web::Data<DatabaseConnection>, path: LeafPath) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match websites::get_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(Some(site)) => HttpResponse::Ok().json(site),
        Ok(None) => not_found("Website", id),
        Err(e) => error_response(e),
    }
}

pub async fn update_website(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
    body: web::Json<UpdateWebsite>,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match websites::update_for_owner(db.get_ref(), owner, owner_id, id, body.into_inner()).await {
        Ok(Some(site)) => HttpResponse::Ok().json(site),
        Ok(None) => not_found("Website", id),
        Err(e) => error_response(e),
    }
}

pub async fn delete_website(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match websites::delete_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(rows) => deleted("Website", id, rows),
        Err(e) => error_response(e),
    }
}

// ── Skills ──

pub async fn create_skill(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: OwnerPath,
    body: web::Json<CreateSkill>,
) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match skills::create_for_owner(db.get_ref(), owner, owner_id, body.into_inner()).await {
        Ok(view) => created(leaf_location(owner, owner_id, "skill", view.skill.id), &view),
        Err(e) => error_response(e),
    }
}

pub async fn get_skills(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match skills::get_all_for_owner(db.get_ref(), owner, owner_id).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

pub async fn get_skill(db: web::Data<DatabaseConnection>, path: LeafPath) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match skills::get_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(Some(view)) => HttpResponse::Ok().json(view),
        Ok(None) => not_found("Skill", id),
        Err(e) => error_response(e),
    }
}

pub async fn update_skill(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
    body: web::Json<UpdateSkill>,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match skills::update_for_owner(db.get_ref(), owner, owner_id, id, body.into_inner()).await {
        Ok(Some(view)) => HttpResponse::Ok().json(view),
        Ok(None) => not_found("Skill", id),
        Err(e) => error_response(e),
    }
}

pub async fn delete_skill(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match skills::delete_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(rows) => deleted("Skill", id, rows),
        Err(e) => error_response(e),
    }
}

// ── Achievements ──

pub async fn create_achievement(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: OwnerPath,
    body: web::Json<CreateAchievement>,
) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match achievements::create_for_owner(db.get_ref(), owner, owner_id, body.into_inner()).await
    {
        Ok(row) => created(leaf_location(owner, owner_id, "achievement", row.id), &row),
        Err(e) => error_response(e),
    }
}

pub async fn get_achievements(db: web::Data<DatabaseConnection>, path: OwnerPath) -> impl Responder {
    let (owner, owner_id) = match owner_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match achievements::get_all_for_owner(db.get_ref(), owner, owner_id).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

pub async fn get_achievement(db: web::Data<DatabaseConnection>, path: LeafPath) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match achievements::get_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(Some(row)) => HttpResponse::Ok().json(row),
        Ok(None) => not_found("Achievement", id),
        Err(e) => error_response(e),
    }
}

pub async fn update_achievement(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
    body: web::Json<UpdateAchievement>,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match achievements::update_for_owner(db.get_ref(), owner, owner_id, id, body.into_inner())
        .await
    {
        Ok(Some(row)) => HttpResponse::Ok().json(row),
        Ok(None) => not_found("Achievement", id),
        Err(e) => error_response(e),
    }
}

pub async fn delete_achievement(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: LeafPath,
) -> impl Responder {
    let (owner, owner_id, id) = match leaf_of(path) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match achievements::delete_for_owner(db.get_ref(), owner, owner_id, id).await {
        Ok(rows) => deleted("Achievement", id, rows),
        Err(e) => error_response(e),
    }
}
