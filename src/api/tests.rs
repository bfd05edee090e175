use std::sync::Arc;

use actix_web::{
    App,
    cookie::Cookie,
    http::{StatusCode, header},
    test,
};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::api::{self, auth::AdminSettings, state::AppState, validation};
use crate::db::{ContentStore, FileStore};
use crate::storage::LocalUploadStore;

const BOUNDARY: &str = "----site-cms-test-boundary";

struct Harness {
    _data: TempDir,
    uploads: TempDir,
    store: Arc<dyn ContentStore>,
    state: AppState,
}

async fn harness() -> Harness {
    let data = TempDir::new().unwrap();
    let uploads = TempDir::new().unwrap();
    let store: Arc<dyn ContentStore> = Arc::new(FileStore::open(data.path()).await.unwrap());
    let state = AppState::new(
        store.clone(),
        Arc::new(LocalUploadStore::new(uploads.path(), "/uploads")),
        AdminSettings {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            cookie_secure: false,
        },
    );
    Harness {
        _data: data,
        uploads,
        store,
        state,
    }
}

macro_rules! app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(
            App::new()
                .app_data(validation::json_config(1024 * 1024))
                .app_data(validation::query_config())
                .configure(move |cfg| state.register(cfg))
                .configure(api::routes),
        )
        .await
    }};
}

fn admin_cookie() -> Cookie<'static> {
    Cookie::new("admin-session", "authenticated")
}

fn multipart_body(folder: &str, filename: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"type\"\r\n\r\n{folder}\r\n",
            b = BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n",
            b = BOUNDARY
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_content_type() -> (header::HeaderName, String) {
    (
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    )
}

fn post_payload(title: &str) -> Value {
    json!({
        "title": title,
        "summary": "Short summary",
        "content": "<p>Body</p>",
        "category": "News",
        "author": "Comms Team"
    })
}

fn job_payload() -> Value {
    json!({
        "title": "Backend Engineer",
        "department": "Engineering",
        "location": "Remote",
        "type": "Full-time",
        "description": "Build services",
        "requirements": ["Rust", "  ", "PostgreSQL"]
    })
}

fn job_application_payload(job_id: &str) -> Value {
    json!({
        "jobId": job_id,
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "phone": "+1 555 0100",
        "coverLetter": "I would like to join.",
        "cvUrl": "/uploads/cvs/cvs_1_jane.pdf"
    })
}

#[actix_web::test]
async fn login_sets_session_cookie() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "admin-session")
        .unwrap();
    assert_eq!(cookie.value(), "authenticated");
    assert_eq!(cookie.http_only(), Some(true));

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn admin_routes_require_session() {
    let h = harness().await;
    let app = app!(h.state);

    for uri in ["/api/admin/posts", "/api/admin/messages", "/api/job-applications"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/admin/posts")
        .set_json(post_payload("Sneaky"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(h.store.list_posts(None).await.unwrap().is_empty());
}

#[actix_web::test]
async fn posts_get_slugs_and_list_newest_first() {
    let h = harness().await;
    let app = app!(h.state);

    for title in ["New Product Launch!!", "Second Story"] {
        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .cookie(admin_cookie())
            .set_json(post_payload(title))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/posts/new-product-launch")
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["title"], "New Product Launch!!");

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["slug"], "second-story");

    let req = test::TestRequest::get().uri("/api/posts?limit=1").to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/admin/posts")
        .cookie(admin_cookie())
        .set_json(post_payload("Second Story"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn deleting_a_job_keeps_its_applications() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/jobs")
        .cookie(admin_cookie())
        .set_json(job_payload())
        .to_request();
    let job: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(job["requirements"], json!(["Rust", "PostgreSQL"]));
    let job_id = job["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/job-applications")
        .set_json(job_application_payload(&job_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/jobs/{}", job_id))
        .cookie(admin_cookie())
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["preserved_applications"], 1);

    let applications = h.store.list_job_applications().await.unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].job_id, None);
    assert_eq!(applications[0].job_title, "Backend Engineer (Job Deleted)");

    let req = test::TestRequest::get()
        .uri(&format!("/api/jobs/{}", job_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn application_for_unknown_job_is_not_found() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/job-applications")
        .set_json(job_application_payload("00000000-0000-4000-8000-000000000000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(h.store.list_job_applications().await.unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_status_is_rejected() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/jobs")
        .cookie(admin_cookie())
        .set_json(job_payload())
        .to_request();
    let job: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/job-applications")
        .set_json(job_application_payload(job["id"].as_str().unwrap()))
        .to_request();
    let submitted: Value = test::call_and_read_body_json(&app, req).await;
    let application_id = submitted["applicationId"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/job-applications/{}", application_id))
        .cookie(admin_cookie())
        .set_json(json!({ "status": "bogus" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Valid for general applications only
    let req = test::TestRequest::patch()
        .uri(&format!("/api/job-applications/{}", application_id))
        .cookie(admin_cookie())
        .set_json(json!({ "status": "contacted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::patch()
        .uri(&format!("/api/job-applications/{}", application_id))
        .cookie(admin_cookie())
        .set_json(json!({ "status": "shortlisted" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "shortlisted");

    let req = test::TestRequest::get()
        .uri(&format!("/api/job-applications/{}", application_id))
        .cookie(admin_cookie())
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["job_title"], "Backend Engineer");
}

#[actix_web::test]
async fn contact_requires_every_field() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "name": "Sam", "subject": "Hello", "message": "Hi there" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["fields"].get("email").is_some());
    assert!(h.store.list_messages().await.unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Sam",
            "email": "sam@example.com",
            "subject": "Hello",
            "message": "Hi there"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let messages = h.store.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert!(!messages[0].read);
}

#[actix_web::test]
async fn oversized_upload_is_rejected_without_storing() {
    let h = harness().await;
    let app = app!(h.state);

    let content = vec![0u8; 10 * 1024 * 1024 + 1];
    let req = test::TestRequest::post()
        .uri("/api/upload-blob")
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("gallery", "big.png", "image/png", &content))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = std::fs::read_dir(h.uploads.path()).unwrap().count();
    assert_eq!(stored, 0);
}

#[actix_web::test]
async fn cv_uploads_must_be_documents() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/upload-blob")
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("cvs", "resume.png", "image/png", b"not a cv"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/upload-blob")
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("cvs", "resume.pdf", "application/pdf", b"%PDF-1.4"))
        .to_request();
    let uploaded: Value = test::call_and_read_body_json(&app, req).await;
    let url = uploaded["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/cvs/cvs_"));
    assert!(url.ends_with("_resume.pdf"));
    assert_eq!(uploaded["size"], 8);
}

#[actix_web::test]
async fn health_reports_backend() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], h.store.backend_tag());
}

#[actix_web::test]
async fn general_applications_round_trip_through_review() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/general-applications")
        .set_json(json!({
            "firstName": "Ali",
            "lastName": "Khan",
            "email": "ali@example.com",
            "phone": "+1 555 0101",
            "currentRole": "  ",
            "cvUrl": "/uploads/cvs/cvs_2_ali.pdf"
        }))
        .to_request();
    let submitted: Value = test::call_and_read_body_json(&app, req).await;
    let id = submitted["applicationId"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/general-applications/{}", id))
        .cookie(admin_cookie())
        .set_json(json!({ "status": "hired" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/general-applications/{}", id))
        .cookie(admin_cookie())
        .set_json(json!({ "status": "contacted" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "contacted");
    assert!(updated["current_role"].is_null());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/general-applications/{}", id))
        .cookie(admin_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(h.store.list_general_applications().await.unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/general-applications/{}", id))
        .cookie(admin_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn notices_and_gallery_are_managed_from_the_dashboard() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/notices")
        .cookie(admin_cookie())
        .set_json(json!({ "title": "Holiday hours", "type": "pdf", "url": "/uploads/notices/h.pdf" }))
        .to_request();
    let notice: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(notice["type"], "pdf");

    let req = test::TestRequest::get().uri("/api/notices").to_request();
    let notices: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(notices.len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/admin/gallery")
        .cookie(admin_cookie())
        .set_json(json!({ "url": "/uploads/gallery/team.jpg", "duration": 12 }))
        .to_request();
    let item: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(item["file_type"], "image");
    assert!(item["duration"].is_null());

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/gallery/{}", item["id"].as_str().unwrap()))
        .cookie(admin_cookie())
        .set_json(json!({ "alt": "Team photo", "caption": "Offsite" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["alt_text"], "Team photo");
    assert_eq!(updated["caption"], "Offsite");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/notices/{}", notice["id"].as_str().unwrap()))
        .cookie(admin_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(h.store.list_notices().await.unwrap().is_empty());
}

#[actix_web::test]
async fn messages_can_be_marked_read() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Sam",
            "email": "sam@example.com",
            "subject": "Quote",
            "message": "Please call me"
        }))
        .to_request();
    test::call_service(&app, req).await;
    let id = h.store.list_messages().await.unwrap()[0].id;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/admin/messages/{}", id))
        .cookie(admin_cookie())
        .set_json(json!({ "read": true }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["read"], true);
}

#[actix_web::test]
async fn dashboard_upload_requires_session() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/upload")
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("gallery", "team.jpg", "image/jpeg", b"jpeg"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/admin/upload")
        .cookie(admin_cookie())
        .insert_header(multipart_content_type())
        .set_payload(multipart_body("gallery", "team photo.jpg", "image/jpeg", b"jpeg"))
        .to_request();
    let uploaded: Value = test::call_and_read_body_json(&app, req).await;
    let filename = uploaded["filename"].as_str().unwrap();
    assert!(filename.ends_with("_team_photo.jpg"));
    assert!(h.uploads.path().join("gallery").join(filename).exists());
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[actix_web::test]
async fn updating_a_post_follows_the_new_title() {
    let h = harness().await;
    let app = app!(h.state);

    let mut ids = Vec::new();
    for title in ["Spring Update", "Autumn Update"] {
        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .cookie(admin_cookie())
            .set_json(post_payload(title))
            .to_request();
        let post: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(post["id"].as_str().unwrap().to_string());
    }

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/posts/{}", ids[0]))
        .cookie(admin_cookie())
        .set_json(post_payload("Summer Update: Launch!"))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["slug"], "summer-update-launch");
    assert!(timestamp(&updated["updated_at"]) > timestamp(&updated["created_at"]));

    let req = test::TestRequest::get()
        .uri(&format!("/api/admin/posts/{}", ids[0]))
        .cookie(admin_cookie())
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["title"], "Summer Update: Launch!");

    let req = test::TestRequest::get()
        .uri("/api/posts/spring-update")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Renaming onto another post's slug
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/posts/{}", ids[0]))
        .cookie(admin_cookie())
        .set_json(post_payload("Autumn update"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn post_limit_must_be_positive() {
    let h = harness().await;
    let app = app!(h.state);

    for uri in ["/api/posts?limit=0", "/api/posts?limit=-1", "/api/posts?limit=abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{}", uri);
        assert!(body["fields"].is_object(), "{}", uri);
    }
}

#[actix_web::test]
async fn updating_a_job_replaces_its_fields() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/jobs")
        .cookie(admin_cookie())
        .set_json(job_payload())
        .to_request();
    let job: Value = test::call_and_read_body_json(&app, req).await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let mut changed = job_payload();
    changed["title"] = json!("Staff Engineer");
    changed["salary"] = json!("Competitive");
    changed["requirements"] = json!(["Mentoring"]);
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/jobs/{}", job["id"].as_str().unwrap()))
        .cookie(admin_cookie())
        .set_json(changed)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["id"], job["id"]);
    assert_eq!(updated["title"], "Staff Engineer");
    assert_eq!(updated["salary"], "Competitive");
    assert_eq!(updated["requirements"], json!(["Mentoring"]));
    assert!(timestamp(&updated["updated_at"]) > timestamp(&job["updated_at"]));

    let req = test::TestRequest::put()
        .uri("/api/admin/jobs/00000000-0000-4000-8000-000000000000")
        .cookie(admin_cookie())
        .set_json(job_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn logout_expires_the_session_cookie() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post()
        .uri("/api/admin/logout")
        .cookie(admin_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "admin-session")
        .unwrap();
    assert_eq!(cookie.value(), "");
    assert!(cookie.max_age().unwrap().is_zero());
}

#[actix_web::test]
async fn seed_route_fills_an_empty_site_once() {
    let h = harness().await;
    let app = app!(h.state);

    let req = test::TestRequest::post().uri("/api/admin/seed").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/admin/seed")
        .cookie(admin_cookie())
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["seeded"], true);
    assert!(!h.store.list_posts(None).await.unwrap().is_empty());
    assert!(!h.store.list_jobs().await.unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/admin/seed")
        .cookie(admin_cookie())
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["seeded"], false);
    assert_eq!(second["message"], "Data already seeded");
}

#[actix_web::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let h = harness().await;
    let app = app!(h.state);
    let missing = "00000000-0000-4000-8000-000000000000";

    let req = test::TestRequest::get().uri("/api/jobs/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/jobs/{}", missing))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for uri in [
        format!("/api/admin/posts/{}", missing),
        format!("/api/admin/gallery/{}", missing),
        format!("/api/admin/messages/{}", missing),
        format!("/api/job-applications/{}", missing),
    ] {
        let req = test::TestRequest::delete()
            .uri(&uri)
            .cookie(admin_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}
