//! HTTP tests: the full `/api` scope served by `actix_web::test` over an
//! in-memory SQLite database, with HS256 tokens minted locally.
//!
//! Run with: `cargo test --test api_test`
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use uuid::Uuid;

use folio_backend::auth::TokenVerifier;
use folio_backend::auth::jwt::Claims;
use folio_backend::handlers;

const TEST_SECRET: &str = "api-test-secret-at-least-256-bits-long-xxxxxxxxxxxx";

async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("Failed to open SQLite");
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

fn bearer() -> String {
    bearer_for(&Uuid::new_v4().to_string())
}

fn bearer_for(sub: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: Some(now),
        iss: None,
        email: Some("editor@example.com".to_string()),
        role: Some("editor".to_string()),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT");
    format!("Bearer {token}")
}

macro_rules! app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.clone()))
                .app_data(web::Data::new(TokenVerifier::SharedSecret(
                    TEST_SECRET.to_string(),
                )))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, bearer()))
        .set_json(body)
}

fn put(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::put()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, bearer()))
        .set_json(body)
}

fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}

fn portfolio_body() -> Value {
    json!({
        "name": "Grace Hopper",
        "title": "Rear Admiral",
        "professionalSummary": "Compilers",
        "email": "grace@example.com"
    })
}

#[actix_web::test]
async fn test_health_reports_ok() {
    let db = setup_db().await;
    let app = app!(db);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_mutations_require_a_token() {
    let db = setup_db().await;
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/create-portfolio")
        .set_json(portfolio_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/create-portfolio")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .set_json(portfolio_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A valid signature is not enough when the subject is not a user id.
    let req = test::TestRequest::post()
        .uri("/api/create-portfolio")
        .insert_header((header::AUTHORIZATION, bearer_for("service-account")))
        .set_json(portfolio_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Reads stay open.
    let req = test::TestRequest::get().uri("/api/portfolios").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_portfolio_and_read_graph() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(&app, post("/api/create-portfolio", portfolio_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let loc = location(&resp);
    let created: Value = test::read_body_json(resp).await;
    let pid = created["id"].as_i64().unwrap();
    assert_eq!(loc, format!("/api/portfolio/{pid}"));
    assert_eq!(created["professionalSummary"], "Compilers");

    let resp = test::call_service(
        &app,
        post(
            &format!("/api/portfolio/{pid}/create-website"),
            json!({ "name": "gh", "url": "https://github.com/grace", "type": "github" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        post(
            &format!("/api/portfolio/{pid}/create-education"),
            json!({
                "institution": "Yale",
                "degree": "PhD",
                "fieldOfStudy": "Mathematics",
                "startDate": "1930-09-01",
                "endDate": "1934-06-01"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let loc = location(&resp);
    let education: Value = test::read_body_json(resp).await;
    assert_eq!(loc, format!("/api/portfolio/{pid}/education/{}", education["id"]));

    let req = test::TestRequest::get().uri(&loc).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["institution"], "Yale");
    assert!(body["mainImage"].is_null());
    assert_eq!(body["skills"], json!([]));

    let req = test::TestRequest::get()
        .uri(&format!("/api/portfolio/{pid}"))
        .to_request();
    let graph: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(graph["name"], "Grace Hopper");
    assert_eq!(graph["github"]["url"], "https://github.com/grace");
    assert!(graph["linkedin"].is_null());
    assert_eq!(graph["educations"].as_array().unwrap().len(), 1);
    assert_eq!(graph["educations"][0]["degree"], "PhD");

    let req = test::TestRequest::get()
        .uri(&format!("/api/portfolio/{pid}/websites?type=github"))
        .to_request();
    let site: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(site["name"], "gh");
}

#[actix_web::test]
async fn test_main_image_location_and_conflict() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(&app, post("/api/create-portfolio", portfolio_body()).to_request()).await;
    let created: Value = test::read_body_json(resp).await;
    let pid = created["id"].as_i64().unwrap();

    let image = json!({ "name": "portrait", "url": "https://img.example.com/p.png", "type": "main image" });
    let resp = test::call_service(
        &app,
        post(&format!("/api/portfolio/{pid}/create-image"), image.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(location(&resp), format!("/api/portfolio/{pid}/main-image"));

    let resp = test::call_service(
        &app,
        post(&format!("/api/portfolio/{pid}/create-image"), image).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/portfolio/{pid}/main-image"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "portrait");

    // Portfolios have no logo slot.
    let resp = test::call_service(
        &app,
        post(
            &format!("/api/portfolio/{pid}/create-image"),
            json!({ "name": "logo", "url": "https://img.example.com/l.png", "type": "logo" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_side_project_without_summary_is_bad_request() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(
        &app,
        post("/api/create-sideproject", json!({ "name": "Compiler" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let resp = test::call_service(
        &app,
        post(
            "/api/create-sideproject",
            json!({ "name": "Compiler", "professionalSummary": "  " }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_side_project_cascades() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(
        &app,
        post(
            "/api/create-sideproject",
            json!({ "name": "A-0", "professionalSummary": "First compiler" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let project: Value = test::read_body_json(resp).await;
    let id = project["id"].as_i64().unwrap();

    for name in ["COBOL", "FLOW-MATIC"] {
        let resp = test::call_service(
            &app,
            post(&format!("/api/sideproject/{id}/create-skill"), json!({ "name": name }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    let resp = test::call_service(
        &app,
        post(
            &format!("/api/sideproject/{id}/create-image"),
            json!({ "name": "tape", "url": "https://img.example.com/t.png", "type": "main image" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sideproject/{id}"))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["skills"].as_array().unwrap().len(), 2);
    assert_eq!(view["mainImage"]["name"], "tape");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/sideproject/delete/{id}"))
        .insert_header((header::AUTHORIZATION, bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rowsAffected"], 4);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sideproject/{id}/skills"))
        .to_request();
    let skills: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(skills, json!([]));
}

#[actix_web::test]
async fn test_missing_rows_are_not_found() {
    let db = setup_db().await;
    let app = app!(db);

    let req = test::TestRequest::get().uri("/api/sideproject/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/portfolio/delete/999")
        .insert_header((header::AUTHORIZATION, bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/dragon/1/images").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Creating under a portfolio that does not exist.
    let resp = test::call_service(
        &app,
        post(
            "/api/portfolio/999/create-hobby",
            json!({ "name": "Knitting" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_positive_id_is_bad_request() {
    let db = setup_db().await;
    let app = app!(db);

    let req = test::TestRequest::get().uri("/api/portfolio/0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_updates_merge_into_stored_rows() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(&app, post("/api/create-portfolio", portfolio_body()).to_request()).await;
    let created: Value = test::read_body_json(resp).await;
    let pid = created["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        put(&format!("/api/update-portfolio/{pid}"), json!({ "title": "Admiral" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Admiral");
    assert_eq!(body["name"], "Grace Hopper");

    let resp = test::call_service(
        &app,
        post(
            &format!("/api/portfolio/{pid}/create-education"),
            json!({
                "institution": "Vassar",
                "degree": "BA",
                "startDate": "1924-09-01"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let education: Value = test::read_body_json(resp).await;
    let eid = education["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        put(
            &format!("/api/portfolio/{pid}/update-education/{eid}"),
            json!({ "endDate": "1928-06-01", "fieldOfStudy": "Mathematics and physics" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["endDate"], "1928-06-01");
    assert_eq!(body["startDate"], "1924-09-01");
    assert_eq!(body["fieldOfStudy"], "Mathematics and physics");

    // Only the end date is sent, but it lands before the stored start date.
    let resp = test::call_service(
        &app,
        put(
            &format!("/api/portfolio/{pid}/update-education/{eid}"),
            json!({ "endDate": "1920-06-01" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/portfolio/{pid}/education/{eid}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["endDate"], "1928-06-01");
}

#[actix_web::test]
async fn test_website_updates_respect_type_and_owner() {
    let db = setup_db().await;
    let app = app!(db);

    let mut pids = Vec::new();
    for _ in 0..2 {
        let resp =
            test::call_service(&app, post("/api/create-portfolio", portfolio_body()).to_request())
                .await;
        let created: Value = test::read_body_json(resp).await;
        pids.push(created["id"].as_i64().unwrap());
    }
    let pid = pids[0];

    let mut site_ids = Vec::new();
    for (name, kind) in [("gh", "github"), ("li", "linkedin")] {
        let resp = test::call_service(
            &app,
            post(
                &format!("/api/portfolio/{pid}/create-website"),
                json!({ "name": name, "url": format!("https://{name}.example.com"), "type": kind }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let site: Value = test::read_body_json(resp).await;
        site_ids.push(site["id"].as_i64().unwrap());
    }
    let linkedin = site_ids[1];

    let resp = test::call_service(
        &app,
        put(
            &format!("/api/portfolio/{pid}/update-website/{linkedin}"),
            json!({ "type": "github" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = test::call_service(
        &app,
        put(
            &format!("/api/portfolio/{pid}/update-website/{linkedin}"),
            json!({ "url": "https://www.linkedin.com/in/grace" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["url"], "https://www.linkedin.com/in/grace");

    // The website belongs to the first portfolio, not the second.
    let resp = test::call_service(
        &app,
        put(
            &format!("/api/portfolio/{}/update-website/{linkedin}", pids[1]),
            json!({ "name": "stolen" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/portfolio/{pid}/websites?type=myspace"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));
}
