//! Store-level tests against an in-memory SQLite database with every
//! migration applied.
//!
//! Run with: `cargo test --test store_test`
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use folio_backend::db::{
    achievements, blog_posts, credentials, education, hobbies, images, open_source, portfolio,
    side_projects, skills, volunteer_work, websites, work_experience,
};
use folio_backend::error::StoreError;
use folio_backend::models::achievement::{CreateAchievement, UpdateAchievement};
use folio_backend::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use folio_backend::models::credential::CreateCredential;
use folio_backend::models::education::{CreateEducation, UpdateEducation};
use folio_backend::models::hobby::CreateHobby;
use folio_backend::models::image::{CreateImage, UpdateImage};
use folio_backend::models::open_source_contribution::CreateOpenSourceContribution;
use folio_backend::models::portfolio::{CreatePortfolio, UpdatePortfolio};
use folio_backend::models::side_project::CreateSideProject;
use folio_backend::models::skill::{CreateSkill, UpdateSkill};
use folio_backend::models::volunteer_work::CreateVolunteerWork;
use folio_backend::models::website::{CreateWebsite, UpdateWebsite};
use folio_backend::models::work_experience::CreateWorkExperience;
use folio_backend::models::{
    ImageSlot, OwnerKind, WebsiteType, achievement, achievement_link, credential, image,
    image_link, open_source_contribution, portfolio_link, skill, skill_link, website,
    website_link,
};

async fn setup() -> DatabaseConnection {
    // One connection: every `sqlite::memory:` connection is its own database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("Failed to open SQLite");
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn new_portfolio(db: &DatabaseConnection) -> i32 {
    portfolio::insert_portfolio(
        db,
        CreatePortfolio {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            professional_summary: Some("Engines and notes".to_string()),
            email: Some("ada@example.com".to_string()),
            location: None,
        },
    )
    .await
    .expect("portfolio insert")
    .id
}

fn image_input(name: &str, slot: ImageSlot) -> CreateImage {
    CreateImage {
        name: name.to_string(),
        url: format!("https://img.example.com/{name}.png"),
        slot,
    }
}

fn website_input(name: &str, website_type: WebsiteType) -> CreateWebsite {
    CreateWebsite {
        name: name.to_string(),
        url: format!("https://{name}.example.com"),
        website_type,
    }
}

fn skill_input(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        proficiency: Some("expert".to_string()),
    }
}

fn education_input() -> CreateEducation {
    CreateEducation {
        institution: "University of London".to_string(),
        degree: "BSc".to_string(),
        field_of_study: Some("Mathematics".to_string()),
        description: None,
        start_date: date(2015, 9, 1),
        end_date: Some(date(2018, 6, 30)),
    }
}

fn side_project_input(portfolio_id: Option<i32>) -> CreateSideProject {
    CreateSideProject {
        name: "Difference engine".to_string(),
        professional_summary: "A mechanical calculator".to_string(),
        description: None,
        start_date: Some(date(2020, 1, 1)),
        end_date: None,
        portfolio_id,
    }
}

/// Education with one of every attachment. Returns the education id.
async fn decorated_education(db: &DatabaseConnection, portfolio_id: i32) -> i32 {
    let id = education::create_for_portfolio(db, portfolio_id, education_input())
        .await
        .unwrap()
        .id;
    let kind = OwnerKind::Education;

    images::create_for_owner(db, kind, id, image_input("campus", ImageSlot::MainImage))
        .await
        .unwrap();
    images::create_for_owner(db, kind, id, image_input("crest", ImageSlot::Logo))
        .await
        .unwrap();
    images::create_for_owner(db, kind, id, image_input("lab", ImageSlot::AdditionalImage))
        .await
        .unwrap();
    websites::create_for_owner(db, kind, id, website_input("uni", WebsiteType::MainWebsite))
        .await
        .unwrap();
    let skill = skills::create_for_owner(db, kind, id, skill_input("Calculus"))
        .await
        .unwrap();
    images::create_for_owner(
        db,
        OwnerKind::Skill,
        skill.skill.id,
        image_input("integral", ImageSlot::Icon),
    )
    .await
    .unwrap();
    achievements::create_for_owner(
        db,
        kind,
        id,
        CreateAchievement {
            title: "First class honours".to_string(),
            description: None,
            date_achieved: Some(date(2018, 7, 1)),
        },
    )
    .await
    .unwrap();

    id
}

async fn count_leaf_rows(db: &DatabaseConnection) -> u64 {
    image::Entity::find().count(db).await.unwrap()
        + image_link::Entity::find().count(db).await.unwrap()
        + website::Entity::find().count(db).await.unwrap()
        + website_link::Entity::find().count(db).await.unwrap()
        + skill::Entity::find().count(db).await.unwrap()
        + skill_link::Entity::find().count(db).await.unwrap()
        + achievement::Entity::find().count(db).await.unwrap()
        + achievement_link::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn test_blank_required_field_writes_nothing() {
    let db = setup().await;

    let result = portfolio::insert_portfolio(
        &db,
        CreatePortfolio {
            name: "   ".to_string(),
            title: "Engineer".to_string(),
            professional_summary: None,
            email: None,
            location: None,
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    let pid = new_portfolio(&db).await;
    let mut input = education_input();
    input.institution = String::new();
    let result = education::create_for_portfolio(&db, pid, input).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    assert_eq!(portfolio::get_all_portfolios(&db).await.unwrap().len(), 1);
    assert!(education::get_all_for_portfolio(&db, pid).await.unwrap().is_empty());
    assert_eq!(portfolio_link::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected() {
    let db = setup().await;

    let result = education::get_for_portfolio(&db, 0, 1).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    let result = images::get_all_for_owner(&db, OwnerKind::Portfolio, -4).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn test_end_before_start_is_rejected() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;

    let mut input = education_input();
    input.end_date = Some(date(2014, 1, 1));
    let result = education::create_for_portfolio(&db, pid, input).await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    // An update moving only the end date is checked against the stored start.
    let id = education::create_for_portfolio(&db, pid, education_input())
        .await
        .unwrap()
        .id;
    let result = education::update_for_portfolio(
        &db,
        pid,
        id,
        UpdateEducation {
            institution: None,
            degree: None,
            field_of_study: None,
            description: None,
            start_date: None,
            end_date: Some(date(2010, 1, 1)),
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn test_create_under_missing_portfolio_is_not_found() {
    let db = setup().await;

    let result = education::create_for_portfolio(&db, 42, education_input()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    let result = images::create_for_owner(
        &db,
        OwnerKind::Hobby,
        7,
        image_input("missing", ImageSlot::MainImage),
    )
    .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert_eq!(image::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_occupied_image_slot_is_refused() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;

    let first = images::create_for_owner(
        &db,
        OwnerKind::Portfolio,
        pid,
        image_input("headshot", ImageSlot::MainImage),
    )
    .await
    .unwrap();

    let second = images::create_for_owner(
        &db,
        OwnerKind::Portfolio,
        pid,
        image_input("other", ImageSlot::MainImage),
    )
    .await;
    assert!(matches!(second, Err(StoreError::SlotOccupied(_))));

    let occupant = images::get_slot(&db, OwnerKind::Portfolio, pid, ImageSlot::MainImage)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(occupant.id, first.image.id);
    assert_eq!(occupant.name, "headshot");
    assert_eq!(image::Entity::find().count(&db).await.unwrap(), 1);

    // The multi-valued slot takes as many as needed.
    for name in ["a", "b"] {
        images::create_for_owner(
            &db,
            OwnerKind::Portfolio,
            pid,
            image_input(name, ImageSlot::AdditionalImage),
        )
        .await
        .unwrap();
    }
    let all = images::get_all_for_owner(&db, OwnerKind::Portfolio, pid)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_slot_not_allowed_for_owner_kind() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let hobby = hobbies::create_for_portfolio(
        &db,
        pid,
        CreateHobby {
            name: "Chess".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let result =
        images::create_for_owner(&db, OwnerKind::Hobby, hobby.id, image_input("x", ImageSlot::Logo))
            .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    let result = websites::create_for_owner(
        &db,
        OwnerKind::Hobby,
        hobby.id,
        website_input("club", WebsiteType::MainWebsite),
    )
    .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));

    let credential = credentials::create_for_portfolio(
        &db,
        pid,
        CreateCredential {
            name: "AWS Solutions Architect".to_string(),
            issuing_organization: "Amazon".to_string(),
            credential_id: None,
            issue_date: date(2021, 3, 1),
            expiration_date: Some(date(2024, 3, 1)),
        },
    )
    .await
    .unwrap();
    let result = achievements::create_for_owner(
        &db,
        OwnerKind::Credential,
        credential.id,
        CreateAchievement {
            title: "Top score".to_string(),
            description: None,
            date_achieved: None,
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::Validation(_))));
}

#[tokio::test]
async fn test_website_type_is_unique_per_owner() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let kind = OwnerKind::Portfolio;

    let github = websites::create_for_owner(&db, kind, pid, website_input("gh", WebsiteType::Github))
        .await
        .unwrap();
    let result =
        websites::create_for_owner(&db, kind, pid, website_input("gh2", WebsiteType::Github)).await;
    assert!(matches!(result, Err(StoreError::SlotOccupied(_))));

    let linkedin =
        websites::create_for_owner(&db, kind, pid, website_input("li", WebsiteType::Linkedin))
            .await
            .unwrap();

    // Retyping LinkedIn as GitHub collides with the existing one.
    let result = websites::update_for_owner(
        &db,
        kind,
        pid,
        linkedin.id,
        UpdateWebsite {
            name: None,
            url: None,
            website_type: Some(WebsiteType::Github),
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::SlotOccupied(_))));

    let found = websites::get_by_type(&db, kind, pid, WebsiteType::Github)
        .await
        .unwrap();
    assert_eq!(found.map(|site| site.id), Some(github.id));
    let found = websites::get_by_type(&db, kind, pid, WebsiteType::Linkedin)
        .await
        .unwrap();
    assert_eq!(found.map(|site| site.id), Some(linkedin.id));
}

#[tokio::test]
async fn test_create_then_read_assembles_attachments() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let id = decorated_education(&db, pid).await;

    let view = education::get_for_portfolio(&db, pid, id)
        .await
        .unwrap()
        .expect("education should be found");

    assert_eq!(view.entry.institution, "University of London");
    assert_eq!(view.entry.start_date, date(2015, 9, 1));
    assert_eq!(view.attachments.main_image.as_ref().unwrap().name, "campus");
    assert_eq!(view.attachments.logo.as_ref().unwrap().name, "crest");
    assert_eq!(view.attachments.additional_images.len(), 1);
    assert_eq!(view.attachments.websites.len(), 1);
    assert_eq!(view.attachments.achievements.len(), 1);
    assert_eq!(view.attachments.skills.len(), 1);
    let skill = &view.attachments.skills[0];
    assert_eq!(skill.skill.name, "Calculus");
    assert_eq!(skill.icon.as_ref().unwrap().name, "integral");

    // The skill's icon is not one of the education's images.
    let images = images::get_all_for_owner(&db, OwnerKind::Education, id)
        .await
        .unwrap();
    assert_eq!(images.len(), 3);
}

#[tokio::test]
async fn test_wrong_parent_reads_and_writes_nothing() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let other = new_portfolio(&db).await;
    let id = education::create_for_portfolio(&db, pid, education_input())
        .await
        .unwrap()
        .id;

    assert!(education::get_for_portfolio(&db, other, id).await.unwrap().is_none());

    let updated = education::update_for_portfolio(
        &db,
        other,
        id,
        UpdateEducation {
            institution: Some("Elsewhere".to_string()),
            degree: None,
            field_of_study: None,
            description: None,
            start_date: None,
            end_date: None,
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());

    assert_eq!(education::delete_for_portfolio(&db, other, id).await.unwrap(), 0);

    let view = education::get_for_portfolio(&db, pid, id).await.unwrap().unwrap();
    assert_eq!(view.entry.institution, "University of London");

    // Leaves are scoped the same way.
    let logo = images::create_for_owner(
        &db,
        OwnerKind::Education,
        id,
        image_input("crest", ImageSlot::Logo),
    )
    .await
    .unwrap();
    let stray = images::get_for_owner(&db, OwnerKind::Portfolio, pid, logo.image.id)
        .await
        .unwrap();
    assert!(stray.is_none());
}

#[tokio::test]
async fn test_delete_entry_removes_everything_it_owns() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let id = decorated_education(&db, pid).await;

    // Three education images plus the skill icon, one website, one skill,
    // one achievement and the education row.
    let removed = education::delete_for_portfolio(&db, pid, id).await.unwrap();
    assert_eq!(removed, 8);

    assert!(education::get_for_portfolio(&db, pid, id).await.unwrap().is_none());
    assert_eq!(count_leaf_rows(&db).await, 0);
    assert_eq!(portfolio_link::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_skill_removes_its_icon() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;

    let view = skills::create_for_owner(&db, OwnerKind::Portfolio, pid, skill_input("Rust"))
        .await
        .unwrap();
    images::create_for_owner(
        &db,
        OwnerKind::Skill,
        view.skill.id,
        image_input("crab", ImageSlot::Icon),
    )
    .await
    .unwrap();

    let removed = skills::delete_for_owner(&db, OwnerKind::Portfolio, pid, view.skill.id)
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(count_leaf_rows(&db).await, 0);
}

#[tokio::test]
async fn test_side_project_links_to_named_portfolio() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;

    let linked = side_projects::create(&db, side_project_input(Some(pid)))
        .await
        .unwrap();
    let loose = side_projects::create(&db, side_project_input(None)).await.unwrap();

    let listed = side_projects::get_all_for_portfolio(&db, pid).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].entry.id, linked.id);
    assert_eq!(side_projects::get_all(&db).await.unwrap().len(), 2);

    let result = side_projects::create(&db, side_project_input(Some(999))).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    assert_eq!(side_projects::delete(&db, loose.id).await.unwrap(), 1);
    assert!(side_projects::get(&db, loose.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_side_project_with_skills_and_main_image() {
    let db = setup().await;
    let project = side_projects::create(&db, side_project_input(None)).await.unwrap();
    let kind = OwnerKind::SideProject;

    skills::create_for_owner(&db, kind, project.id, skill_input("Brass"))
        .await
        .unwrap();
    skills::create_for_owner(&db, kind, project.id, skill_input("Gears"))
        .await
        .unwrap();
    images::create_for_owner(&db, kind, project.id, image_input("engine", ImageSlot::MainImage))
        .await
        .unwrap();

    let removed = side_projects::delete(&db, project.id).await.unwrap();
    assert_eq!(removed, 4);
    assert_eq!(count_leaf_rows(&db).await, 0);
    assert_eq!(side_projects::delete(&db, project.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_portfolio_graph_and_cascade() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;
    let kind = OwnerKind::Portfolio;

    images::create_for_owner(&db, kind, pid, image_input("me", ImageSlot::MainImage))
        .await
        .unwrap();
    images::create_for_owner(&db, kind, pid, image_input("talk", ImageSlot::AdditionalImage))
        .await
        .unwrap();
    websites::create_for_owner(&db, kind, pid, website_input("gh", WebsiteType::Github))
        .await
        .unwrap();
    websites::create_for_owner(&db, kind, pid, website_input("li", WebsiteType::Linkedin))
        .await
        .unwrap();
    skills::create_for_owner(&db, kind, pid, skill_input("Poetry"))
        .await
        .unwrap();
    hobbies::create_for_portfolio(
        &db,
        pid,
        CreateHobby {
            name: "Horse riding".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    work_experience::create_for_portfolio(
        &db,
        pid,
        CreateWorkExperience {
            company: "Analytical Society".to_string(),
            position: "Translator".to_string(),
            location: Some("London".to_string()),
            description: None,
            start_date: date(2019, 2, 1),
            end_date: None,
        },
    )
    .await
    .unwrap();
    side_projects::create_for_portfolio(&db, pid, side_project_input(None))
        .await
        .unwrap();
    decorated_education(&db, pid).await;

    let credential_id = credentials::create_for_portfolio(
        &db,
        pid,
        CreateCredential {
            name: "Royal Society fellowship".to_string(),
            issuing_organization: "Royal Society".to_string(),
            credential_id: Some("RS-1843".to_string()),
            issue_date: date(2020, 5, 1),
            expiration_date: None,
        },
    )
    .await
    .unwrap()
    .id;
    images::create_for_owner(
        &db,
        OwnerKind::Credential,
        credential_id,
        image_input("seal", ImageSlot::Logo),
    )
    .await
    .unwrap();

    let volunteer_id = volunteer_work::create_for_portfolio(
        &db,
        pid,
        CreateVolunteerWork {
            organization: "Mechanics' Institute".to_string(),
            role: "Tutor".to_string(),
            description: None,
            start_date: date(2021, 1, 10),
            end_date: Some(date(2021, 12, 10)),
        },
    )
    .await
    .unwrap()
    .id;
    achievements::create_for_owner(
        &db,
        OwnerKind::VolunteerWork,
        volunteer_id,
        CreateAchievement {
            title: "Tutor of the year".to_string(),
            description: None,
            date_achieved: Some(date(2021, 12, 1)),
        },
    )
    .await
    .unwrap();

    let contribution_id = open_source::create_for_portfolio(
        &db,
        pid,
        CreateOpenSourceContribution {
            project_name: "Bernoulli".to_string(),
            role: Some("Maintainer".to_string()),
            description: None,
            start_date: date(2022, 4, 1),
            end_date: None,
        },
    )
    .await
    .unwrap()
    .id;
    websites::create_for_owner(
        &db,
        OwnerKind::OpenSourceContribution,
        contribution_id,
        website_input("pr", WebsiteType::PullRequestLink),
    )
    .await
    .unwrap();

    let graph = portfolio::get_portfolio_graph(&db, pid).await.unwrap().unwrap();
    assert_eq!(graph.portfolio.name, "Ada Lovelace");
    assert_eq!(graph.main_image.as_ref().unwrap().name, "me");
    assert_eq!(graph.github.as_ref().unwrap().name, "gh");
    assert_eq!(graph.linkedin.as_ref().unwrap().name, "li");
    assert_eq!(graph.websites.len(), 2);
    assert_eq!(graph.skills.len(), 1);
    assert_eq!(graph.hobbies.len(), 1);
    assert_eq!(graph.work_experiences.len(), 1);
    assert_eq!(graph.side_projects.len(), 1);
    assert_eq!(graph.educations.len(), 1);
    assert_eq!(graph.educations[0].attachments.skills.len(), 1);
    assert_eq!(graph.credentials.len(), 1);
    assert_eq!(
        graph.credentials[0].attachments.logo.as_ref().map(|logo| logo.name.as_str()),
        Some("seal")
    );
    assert_eq!(graph.volunteer_works.len(), 1);
    assert_eq!(graph.volunteer_works[0].attachments.achievements.len(), 1);
    assert_eq!(graph.open_source_contributions.len(), 1);
    assert_eq!(
        graph.open_source_contributions[0].attachments.websites[0].website_type,
        WebsiteType::PullRequestLink
    );
    assert_eq!(graph.additional_images.len(), 1);

    let removed = portfolio::delete_portfolio(&db, pid).await.unwrap();
    assert!(removed > 0);

    assert!(portfolio::get_portfolio_by_id(&db, pid).await.unwrap().is_none());
    assert!(portfolio::get_portfolio_graph(&db, pid).await.unwrap().is_none());
    assert_eq!(count_leaf_rows(&db).await, 0);
    assert_eq!(portfolio_link::Entity::find().count(&db).await.unwrap(), 0);
    assert!(side_projects::get_all(&db).await.unwrap().is_empty());
    assert_eq!(credential::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(
        folio_backend::models::volunteer_work::Entity::find()
            .count(&db)
            .await
            .unwrap(),
        0
    );
    assert_eq!(open_source_contribution::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(portfolio::delete_portfolio(&db, pid).await.unwrap(), 0);
}

#[tokio::test]
async fn test_blog_post_delete_removes_images() {
    let db = setup().await;

    let post = blog_posts::insert_blog_post(
        &db,
        CreateBlogPost {
            title: "Notes on the engine".to_string(),
            summary: None,
            content: "Note G".to_string(),
            published_date: Some(date(2023, 10, 10)),
        },
    )
    .await
    .unwrap();
    images::create_for_owner(
        &db,
        OwnerKind::BlogPost,
        post.id,
        image_input("cover", ImageSlot::MainImage),
    )
    .await
    .unwrap();

    let view = blog_posts::get_blog_post(&db, post.id).await.unwrap().unwrap();
    assert_eq!(view.attachments.main_image.as_ref().unwrap().name, "cover");

    assert_eq!(blog_posts::delete_blog_post(&db, post.id).await.unwrap(), 2);
    assert_eq!(count_leaf_rows(&db).await, 0);
    assert_eq!(blog_posts::delete_blog_post(&db, post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_updates_return_new_values() {
    let db = setup().await;
    let pid = new_portfolio(&db).await;

    let updated = portfolio::update_portfolio(
        &db,
        pid,
        UpdatePortfolio {
            name: None,
            title: Some("Countess".to_string()),
            professional_summary: None,
            email: None,
            location: Some("London".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Countess");
    assert_eq!(updated.location.as_deref(), Some("London"));
    assert_eq!(updated.name, "Ada Lovelace");

    let education_id = decorated_education(&db, pid).await;
    let updated = education::update_for_portfolio(
        &db,
        pid,
        education_id,
        UpdateEducation {
            institution: None,
            degree: Some("MSc".to_string()),
            field_of_study: None,
            description: Some("Notes on the engine".to_string()),
            start_date: None,
            end_date: Some(date(2019, 6, 30)),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.degree, "MSc");
    assert_eq!(updated.end_date, Some(date(2019, 6, 30)));
    assert_eq!(updated.start_date, date(2015, 9, 1));

    let view = education::get_for_portfolio(&db, pid, education_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.entry.degree, "MSc");
    assert_eq!(view.entry.description.as_deref(), Some("Notes on the engine"));
    // Attachments survive an update of the entry row.
    assert!(view.attachments.main_image.is_some());

    let kind = OwnerKind::Education;
    let site = view.attachments.websites[0].id;
    let updated = websites::update_for_owner(
        &db,
        kind,
        education_id,
        site,
        UpdateWebsite {
            name: None,
            url: Some("https://uni.example.org".to_string()),
            website_type: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.url, "https://uni.example.org");
    assert_eq!(updated.website_type, WebsiteType::MainWebsite);

    let image_id = view.attachments.main_image.as_ref().unwrap().id;
    let updated = images::update_for_owner(
        &db,
        kind,
        education_id,
        image_id,
        UpdateImage {
            name: Some("quad".to_string()),
            url: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.image.name, "quad");
    assert_eq!(updated.slot, ImageSlot::MainImage);

    let skill_id = view.attachments.skills[0].skill.id;
    let updated = skills::update_for_owner(
        &db,
        kind,
        education_id,
        skill_id,
        UpdateSkill {
            name: None,
            proficiency: Some("fluent".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.skill.proficiency.as_deref(), Some("fluent"));
    assert!(updated.icon.is_some());

    let achievement_id = view.attachments.achievements[0].id;
    let updated = achievements::update_for_owner(
        &db,
        kind,
        education_id,
        achievement_id,
        UpdateAchievement {
            title: Some("Wrangler".to_string()),
            description: None,
            date_achieved: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Wrangler");
    assert_eq!(updated.date_achieved, Some(date(2018, 7, 1)));

    // A leaf is only reachable through its own owner.
    let result = websites::update_for_owner(
        &db,
        OwnerKind::Portfolio,
        pid,
        site,
        UpdateWebsite {
            name: Some("elsewhere".to_string()),
            url: None,
            website_type: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());

    let post = blog_posts::insert_blog_post(
        &db,
        CreateBlogPost {
            title: "Sketch of the engine".to_string(),
            summary: None,
            content: "Translation".to_string(),
            published_date: None,
        },
    )
    .await
    .unwrap();
    let updated = blog_posts::update_blog_post(
        &db,
        post.id,
        UpdateBlogPost {
            title: Some("Sketch of the Analytical Engine".to_string()),
            summary: Some("With notes".to_string()),
            content: None,
            published_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Sketch of the Analytical Engine");
    assert_eq!(updated.content, "Translation");
}
