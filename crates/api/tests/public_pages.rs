//! HTTP-level integration tests for the public site pages.

mod common;

use axum::http::StatusCode;
use axum::Router;
use chrono::NaiveDate;
use common::{body_json, get};
use portfolio_db::models::blog_post::CreateBlogPost;
use portfolio_db::models::category::CreateCategory;
use portfolio_db::models::project::CreateProject;
use portfolio_db::models::project_image::CreateProjectImage;
use portfolio_db::models::service::CreateService;
use portfolio_db::models::team_member::CreateTeamMember;
use portfolio_db::repositories::{
    BlogPostRepo, CategoryRepo, ProjectImageRepo, ProjectRepo, ServiceRepo, TeamMemberRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

async fn seed_category(pool: &PgPool, name: &str) -> i64 {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
            slug: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_project(pool: &PgPool, title: &str, category_id: Option<i64>, featured: bool) -> String {
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: title.to_string(),
            slug: None,
            category_id,
            description: "A calm, bright space".to_string(),
            detailed_description: None,
            featured_image: "projects/cover.jpg".to_string(),
            project_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            location: Some("Pune".to_string()),
            client_name: None,
            budget: None,
            duration: None,
            is_featured: Some(featured),
        },
    )
    .await
    .unwrap()
    .slug
}

async fn seed_post(pool: &PgPool, title: &str, published: bool) {
    BlogPostRepo::create(
        pool,
        &CreateBlogPost {
            title: title.to_string(),
            slug: None,
            author_id: None,
            content: "Body".to_string(),
            featured_image: "blog/cover.jpg".to_string(),
            excerpt: None,
            tags: Some("kitchen, lighting".to_string()),
            is_published: Some(published),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_on_empty_site_creates_settings(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["featured_projects"], serde_json::json!([]));
    assert_eq!(json["recent_posts"], serde_json::json!([]));
    assert_eq!(json["site_settings"]["site_name"], "Ctrin Interior");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_shows_featured_only_with_limits(pool: PgPool) {
    for i in 0..8 {
        seed_project(&pool, &format!("Featured {i}"), None, true).await;
    }
    seed_project(&pool, "Not featured", None, false).await;
    for i in 0..4 {
        seed_post(&pool, &format!("Post {i}"), true).await;
    }
    seed_post(&pool, "Draft", false).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/").await).await;

    let featured = json["featured_projects"].as_array().unwrap();
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|p| p["is_featured"] == true));
    assert_eq!(featured[0]["featured_image_url"], "/media/projects/cover.jpg");

    let recent = json["recent_posts"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert!(recent.iter().all(|p| p["is_published"] == true));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_listing_paginates_by_twelve(pool: PgPool) {
    for i in 0..13 {
        seed_project(&pool, &format!("Project {i}"), None, false).await;
    }

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/projects/").await).await;
    assert_eq!(first["projects"]["items"].as_array().unwrap().len(), 12);
    assert_eq!(first["projects"]["num_pages"], 2);
    assert_eq!(first["projects"]["has_next"], true);

    let app = common::build_test_app(pool.clone());
    let second = body_json(get(app, "/projects/?page=2").await).await;
    assert_eq!(second["projects"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["projects"]["has_previous"], true);

    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/projects/?page=3").await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    assert_eq!(get(app, "/projects/?page=abc").await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_listing_filters_by_category(pool: PgPool) {
    let residential = seed_category(&pool, "Residential").await;
    let commercial = seed_category(&pool, "Commercial").await;
    seed_project(&pool, "Family Home", Some(residential), false).await;
    seed_project(&pool, "Open Office", Some(commercial), false).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/projects?category=residential").await).await;

    let items = json["projects"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Family Home");
    assert_eq!(json["selected_category"], "residential");
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_detail_includes_gallery_and_related(pool: PgPool) {
    let residential = seed_category(&pool, "Residential").await;
    let slug = seed_project(&pool, "Lake House", Some(residential), false).await;
    seed_project(&pool, "City Flat", Some(residential), false).await;
    seed_project(&pool, "Elsewhere", None, false).await;

    let project = ProjectRepo::find_by_slug(&pool, &slug).await.unwrap().unwrap();
    for (path, order) in [("projects/b.jpg", 2), ("projects/a.jpg", 1)] {
        ProjectImageRepo::create(
            &pool,
            project.id,
            &CreateProjectImage {
                image: path.to_string(),
                caption: None,
                sort_order: Some(order),
            },
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{slug}/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["project"]["slug"], "lake-house");
    assert_eq!(json["category"]["name"], "Residential");

    let images = json["images"].as_array().unwrap();
    assert_eq!(images[0]["image_url"], "/media/projects/a.jpg");
    assert_eq!(images[1]["image_url"], "/media/projects/b.jpg");

    let related = json["related_projects"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["title"], "City Flat");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_project_is_404_with_site_settings(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/projects/does-not-exist/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["status"], 404);
    assert_eq!(json["site_settings"]["site_name"], "Ctrin Interior");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_path_renders_error_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/no/such/page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["site_settings"].is_object());
}

async fn exploding_page() -> &'static str {
    panic!("secret connection string leaked");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_handler_panic_renders_error_page(pool: PgPool) {
    let routes = Router::new().route("/exploding/", axum::routing::get(exploding_page));
    let app = common::build_test_app_with_routes(pool, routes);
    let response = get(app, "/exploding/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["status"], 500);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(json["site_settings"].is_object());
    assert!(!json.to_string().contains("secret"));
}

// ---------------------------------------------------------------------------
// Services and team
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_services_page_lists_in_order_with_features(pool: PgPool) {
    for (name, order) in [("Styling", 2), ("Space Planning", 1)] {
        ServiceRepo::create(
            &pool,
            &CreateService {
                name: name.to_string(),
                slug: None,
                description: "We do it well".to_string(),
                icon: Some("fas fa-couch".to_string()),
                image: None,
                features: Some("Consultation, 3D renders".to_string()),
                sort_order: Some(order),
            },
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/services").await).await;

    let services = json["services"].as_array().unwrap();
    assert_eq!(services[0]["name"], "Space Planning");
    assert_eq!(
        services[0]["feature_list"],
        serde_json::json!(["Consultation", "3D renders"])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_page_labels_positions(pool: PgPool) {
    TeamMemberRepo::create(
        &pool,
        &CreateTeamMember {
            name: "Ravi".to_string(),
            position: "founder".to_string(),
            bio: None,
            image: "team/ravi.jpg".to_string(),
            email: None,
            phone: None,
            experience_years: Some(15),
            specialization: None,
            social_links: Some(serde_json::json!({"linkedin": "https://linkedin.com/in/ravi"})),
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/team/").await).await;

    let member = &json["team_members"][0];
    assert_eq!(member["position_label"], "Founder");
    assert_eq!(member["social_links"]["linkedin"], "https://linkedin.com/in/ravi");
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_hides_drafts(pool: PgPool) {
    seed_post(&pool, "Published Piece", true).await;
    seed_post(&pool, "Secret Draft", false).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/blog/").await).await;
    let items = json["posts"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Published Piece");
    assert_eq!(items[0]["tag_list"], serde_json::json!(["kitchen", "lighting"]));

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, "/blog/secret-draft/").await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool);
    let response = get(app, "/blog/published-piece").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["post"]["title"], "Published Piece");
    assert_eq!(json["recent_posts"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_blog_first_page_is_ok(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/blog/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["posts"]["num_pages"], 1);

    let app = common::build_test_app(pool);
    assert_eq!(get(app, "/blog/?page=2").await.status(), StatusCode::NOT_FOUND);
}
