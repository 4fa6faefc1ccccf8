//! Handlers for the entry families that hang off a portfolio
//! (`/portfolio/{portfolio_id}/...`). Every family exposes the same five
//! routes, so the handlers are written once, generic over [`EntryFamily`].

use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{API_PREFIX, created, deleted, error_response, not_found};
use crate::auth::middleware::AuthenticatedUser;
use crate::error::StoreResult;
use crate::models::views::EntryView;

/// Binds one entry family's store to its route segments.
pub(crate) trait EntryFamily: 'static {
    /// Singular segment, e.g. `work-experience`.
    const SEGMENT: &'static str;
    /// List segment, e.g. `work-experiences`.
    const LIST_SEGMENT: &'static str;
    const LABEL: &'static str;

    type Model: Serialize;
    type Create: DeserializeOwned + 'static;
    type Update: DeserializeOwned + 'static;

    fn id_of(model: &Self::Model) -> i32;

    async fn create(
        db: &DatabaseConnection,
        portfolio_id: i32,
        input: Self::Create,
    ) -> StoreResult<Self::Model>;

    async fn get(
        db: &DatabaseConnection,
        portfolio_id: i32,
        id: i32,
    ) -> StoreResult<Option<EntryView<Self::Model>>>;

    async fn get_all(
        db: &DatabaseConnection,
        portfolio_id: i32,
    ) -> StoreResult<Vec<EntryView<Self::Model>>>;

    async fn update(
        db: &DatabaseConnection,
        portfolio_id: i32,
        id: i32,
        input: Self::Update,
    ) -> StoreResult<Option<Self::Model>>;

    async fn delete(db: &DatabaseConnection, portfolio_id: i32, id: i32) -> StoreResult<u64>;
}

macro_rules! entry_family {
    ($family:ident, $store:ident, $model:ident, $create:ident, $update:ident,
     $segment:literal, $list:literal, $label:literal) => {
        pub(crate) struct $family;

        impl EntryFamily for $family {
            const SEGMENT: &'static str = $segment;
            const LIST_SEGMENT: &'static str = $list;
            const LABEL: &'static str = $label;

            type Model = crate::models::$model::Model;
            type Create = crate::models::$model::$create;
            type Update = crate::models::$model::$update;

            fn id_of(model: &Self::Model) -> i32 {
                model.id
            }

            async fn create(
                db: &DatabaseConnection,
                portfolio_id: i32,
                input: Self::Create,
            ) -> StoreResult<Self::Model> {
                crate::db::$store::create_for_portfolio(db, portfolio_id, input).await
            }

            async fn get(
                db: &DatabaseConnection,
                portfolio_id: i32,
                id: i32,
            ) -> StoreResult<Option<EntryView<Self::Model>>> {
                crate::db::$store::get_for_portfolio(db, portfolio_id, id).await
            }

            async fn get_all(
                db: &DatabaseConnection,
                portfolio_id: i32,
            ) -> StoreResult<Vec<EntryView<Self::Model>>> {
                crate::db::$store::get_all_for_portfolio(db, portfolio_id).await
            }

            async fn update(
                db: &DatabaseConnection,
                portfolio_id: i32,
                id: i32,
                input: Self::Update,
            ) -> StoreResult<Option<Self::Model>> {
                crate::db::$store::update_for_portfolio(db, portfolio_id, id, input).await
            }

            async fn delete(
                db: &DatabaseConnection,
                portfolio_id: i32,
                id: i32,
            ) -> StoreResult<u64> {
                crate::db::$store::delete_for_portfolio(db, portfolio_id, id).await
            }
        }
    };
}

entry_family!(Education, education, education, CreateEducation, UpdateEducation,
    "education", "educations", "Education");
entry_family!(WorkExperience, work_experience, work_experience, CreateWorkExperience,
    UpdateWorkExperience, "work-experience", "work-experiences", "Work experience");
entry_family!(Credential, credentials, credential, CreateCredential, UpdateCredential,
    "credential", "credentials", "Credential");
entry_family!(VolunteerWork, volunteer_work, volunteer_work, CreateVolunteerWork,
    UpdateVolunteerWork, "volunteer-work", "volunteer-works", "Volunteer work");
entry_family!(OpenSourceContribution, open_source, open_source_contribution,
    CreateOpenSourceContribution, UpdateOpenSourceContribution,
    "open-source-contribution", "open-source-contributions", "Open-source contribution");
entry_family!(SideProject, side_projects, side_project, CreateSideProject, UpdateSideProject,
    "sideproject", "sideprojects", "Side project");
entry_family!(Hobby, hobbies, hobby, CreateHobby, UpdateHobby, "hobby", "hobbies", "Hobby");

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    configure::<Education>(cfg);
    configure::<WorkExperience>(cfg);
    configure::<Credential>(cfg);
    configure::<VolunteerWork>(cfg);
    configure::<OpenSourceContribution>(cfg);
    configure::<SideProject>(cfg);
    configure::<Hobby>(cfg);
}

fn configure<F: EntryFamily>(cfg: &mut web::ServiceConfig) {
    let (segment, list) = (F::SEGMENT, F::LIST_SEGMENT);
    cfg.route(
        &format!("/portfolio/{{portfolio_id}}/create-{segment}"),
        web::post().to(create_entry::<F>),
    )
    .route(
        &format!("/portfolio/{{portfolio_id}}/{list}"),
        web::get().to(get_entries::<F>),
    )
    .route(
        &format!("/portfolio/{{portfolio_id}}/{segment}/{{id}}"),
        web::get().to(get_entry::<F>),
    )
    .route(
        &format!("/portfolio/{{portfolio_id}}/update-{segment}/{{id}}"),
        web::put().to(update_entry::<F>),
    )
    .route(
        &format!("/portfolio/{{portfolio_id}}/{segment}/delete/{{id}}"),
        web::delete().to(delete_entry::<F>),
    );
}

/// POST /api/portfolio/{portfolio_id}/create-{segment} (requires authentication).
async fn create_entry<F: EntryFamily>(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<F::Create>,
) -> HttpResponse {
    let portfolio_id = path.into_inner();
    match F::create(db.get_ref(), portfolio_id, body.into_inner()).await {
        Ok(row) => {
            let location = format!(
                "{API_PREFIX}/portfolio/{portfolio_id}/{}/{}",
                F::SEGMENT,
                F::id_of(&row)
            );
            created(location, &row)
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/portfolio/{portfolio_id}/{list}
async fn get_entries<F: EntryFamily>(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> HttpResponse {
    match F::get_all(db.get_ref(), path.into_inner()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => error_response(e),
    }
}

/// GET /api/portfolio/{portfolio_id}/{segment}/{id}
async fn get_entry<F: EntryFamily>(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(i32, i32)>,
) -> HttpResponse {
    let (portfolio_id, id) = path.into_inner();
    match F::get(db.get_ref(), portfolio_id, id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => not_found(F::LABEL, id),
        Err(e) => error_response(e),
    }
}

/// PUT /api/portfolio/{portfolio_id}/update-{segment}/{id} (requires authentication).
async fn update_entry<F: EntryFamily>(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<(i32, i32)>,
    body: web::Json<F::Update>,
) -> HttpResponse {
    let (portfolio_id, id) = path.into_inner();
    match F::update(db.get_ref(), portfolio_id, id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => not_found(F::LABEL, id),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/portfolio/{portfolio_id}/{segment}/delete/{id} (requires authentication).
async fn delete_entry<F: EntryFamily>(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<(i32, i32)>,
) -> HttpResponse {
    let (portfolio_id, id) = path.into_inner();
    tracing::debug!(
        user_id = %user.user_id,
        entry = F::LABEL,
        id,
        portfolio_id,
        "entry delete requested"
    );
    match F::delete(db.get_ref(), portfolio_id, id).await {
        Ok(rows) => deleted(F::LABEL, id, rows),
        Err(e) => error_response(e),
    }
}
