//! End-to-end tests for the campus site
//!
//! Every test spawns its own server backed by in-memory stores, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test site_tests

use std::sync::Arc;

use campus_core::value_objects::SeasonId;
use integration_tests::{
    assert_page, assert_redirect, fixtures::*, location, session_cookie, TestServer, Unreachable,
};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["memory"], true);
}

#[tokio::test]
async fn test_readiness_reports_unreachable_service() {
    let server = TestServer::start_with_health_checks(vec![Arc::new(Unreachable)])
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["checks"]["unreachable"], false);
    assert_eq!(body["checks"]["memory"], true);
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/no-such-page").await.unwrap();
    let body = assert_page(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(body.contains("Page not found"));
}

// ============================================================================
// Season selection
// ============================================================================

#[tokio::test]
async fn test_season_defaults_to_three_and_is_remembered() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/").await.unwrap();
    assert!(response.headers().contains_key(reqwest::header::SET_COOKIE));
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("Season 3"));

    let stored: Vec<_> = server
        .store
        .sessions
        .session_data()
        .into_iter()
        .map(|data| data.selected_season)
        .collect();
    assert_eq!(stored, vec![Some(SeasonId::new(3))]);
}

#[tokio::test]
async fn test_season_query_persists_across_requests() {
    let server = TestServer::start().await.unwrap();

    let body = assert_page(server.get("/?season=5").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Season 5"));

    let body = assert_page(server.get("/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Season 5"));
}

#[tokio::test]
async fn test_repeated_season_query_uses_first_value() {
    let server = TestServer::start().await.unwrap();

    let body = assert_page(server.get("/?season=4&season=5").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Season 4"));
    assert!(!body.contains("Invalid Season ID."));
}

#[tokio::test]
async fn test_season_beyond_32_bits_is_accepted() {
    let server = TestServer::start().await.unwrap();

    let body = assert_page(server.get("/?season=3000000000").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Season 3000000000"));
    assert!(!body.contains("Invalid Season ID."));
}

#[tokio::test]
async fn test_invalid_season_query_shows_default_and_is_not_remembered() {
    let server = TestServer::start().await.unwrap();
    server.get("/?season=5").await.unwrap();

    let body = assert_page(server.get("/?season=abc").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Invalid Season ID."));
    assert!(body.contains("Season 3"));

    let body = assert_page(server.get("/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Season 5"));
}

// ============================================================================
// Access guards
// ============================================================================

#[tokio::test]
async fn test_login_pages_redirect_anonymous_visitors() {
    let server = TestServer::start().await.unwrap();

    for path in ["/class", "/notes", "/exams"] {
        let response = server.get(path).await.unwrap();
        assert_redirect(&response, "/login");
    }

    let body = server.follow(server.get("/class").await.unwrap()).await.unwrap();
    assert!(body.contains("Please log in first to access this page."));
}

#[tokio::test]
async fn test_members_page_is_public() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/members").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_student_cannot_use_admin_actions() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("rafi", "secret", true).unwrap();
    assert_redirect(&server.login("rafi", "secret").await.unwrap(), "/");

    let response = server.get("/admin").await.unwrap();
    assert_redirect(&response, "/login");

    let response = server
        .post_form(
            "/admin/add_season",
            &[("season_id", "9"), ("title", "Hijacked")],
        )
        .await
        .unwrap();
    assert_redirect(&response, "/login");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Admin access required."));

    let form = Form::new()
        .text("name", "Intruder")
        .text("role", "None")
        .text("contact", "x@example.com")
        .part(
            "photo",
            Part::bytes(PNG_BYTES.to_vec())
                .file_name("evil.png")
                .mime_str("image/png")
                .unwrap(),
        );
    let response = server.post_multipart("/admin/add_member", form).await.unwrap();
    assert_redirect(&response, "/login");

    assert!(server.store.seasons.read().is_empty());
    assert!(server.store.members.read().is_empty());
    assert!(!server.static_dir.path().join("uploads").exists());
}

// ============================================================================
// Login / logout / registration
// ============================================================================

#[tokio::test]
async fn test_admin_credentials_win_over_user_record() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("hasan", "something-else", true).unwrap();

    let response = server.login_admin().await.unwrap();
    assert_redirect(&response, "/admin");

    let body = assert_page(server.get("/admin").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Admin logged in successfully."));
    assert!(body.contains("Admin Panel"));
}

#[tokio::test]
async fn test_login_issues_a_new_session_id() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/").await.unwrap();
    let anonymous = session_cookie(&response, "campus_session").expect("anonymous session cookie");

    let response = server.login_admin().await.unwrap();
    let signed_in = session_cookie(&response, "campus_session").expect("login session cookie");
    assert_ne!(anonymous, signed_in);

    let sessions = server.store.sessions.session_data();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].user.as_deref(), Some("hasan"));
    assert_eq!(sessions[0].selected_season, Some(SeasonId::new(3)));
}

#[tokio::test]
async fn test_login_failures_rerender_form() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("mita", "secret", false).unwrap();

    let body = assert_page(server.login("mita", "secret").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Your account is not approved by admin yet."));

    let body = assert_page(server.login("mita", "wrong").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Invalid username or password."));

    let body = assert_page(server.login("ghost", "secret").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Invalid username or password."));
}

#[tokio::test]
async fn test_logout_clears_login() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("rafi", "secret", true).unwrap();
    server.login("rafi", "secret").await.unwrap();

    assert_eq!(server.get("/class").await.unwrap().status(), StatusCode::OK);

    let response = server.get("/logout").await.unwrap();
    assert_redirect(&response, "/");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Logged out successfully."));

    assert_redirect(&server.get("/class").await.unwrap(), "/login");
}

#[tokio::test]
async fn test_registration_creates_unapproved_user() {
    let server = TestServer::start().await.unwrap();
    let registration = Registration::unique();

    let response = server.post_form("/register", &registration).await.unwrap();
    assert_redirect(&response, "/login");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Registration successful! Please wait for admin approval."));

    {
        let users = server.store.users.read();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, registration.username);
        assert!(!users[0].student);
        assert!(!users[0].approved);
        assert!(users[0].courses_access.is_empty());
        assert_ne!(users[0].password_hash, registration.password);
    }

    let body = assert_page(
        server
            .login(&registration.username, &registration.password)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(body.contains("Your account is not approved by admin yet."));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let registration = Registration::unique();
    server.post_form("/register", &registration).await.unwrap();

    let response = server.post_form("/register", &registration).await.unwrap();
    assert_redirect(&response, "/register");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Username already exists. Please choose another."));

    assert_eq!(server.store.users.read().len(), 1);
}

// ============================================================================
// Admin create actions
// ============================================================================

#[tokio::test]
async fn test_admin_adds_class_with_embedded_link() {
    let server = TestServer::start().await.unwrap();
    server.login_admin().await.unwrap();

    let response = server
        .post_form(
            "/admin/add_class",
            &[
                ("season_id", "3"),
                ("class_name", "Intro to Loops"),
                ("link", "https://youtu.be/ABC123?si=XYZ"),
            ],
        )
        .await
        .unwrap();
    assert_redirect(&response, "/admin");

    assert_eq!(
        server.store.classes.read()[0].link.as_deref(),
        Some("https://www.youtube.com/embed/ABC123?si=XYZ")
    );

    let body = assert_page(server.get("/class?season=3").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Intro to Loops"));
    assert!(body.contains("ABC123"));
}

#[tokio::test]
async fn test_admin_create_validation_messages() {
    let server = TestServer::start().await.unwrap();
    server.login_admin().await.unwrap();

    let response = server
        .post_form("/admin/add_season", &[("season_id", "four"), ("title", "Spring")])
        .await
        .unwrap();
    assert_redirect(&response, "/admin");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Invalid Season ID."));

    let response = server
        .post_form("/admin/add_note", &[("season_id", "3"), ("title", "Week 1")])
        .await
        .unwrap();
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Note Title and Drive Link are required."));

    let response = server
        .post_form(
            "/admin/add_post",
            &[("season_id", "3"), ("title", "Enroll"), ("enroll_link", "https://forms.example/x")],
        )
        .await
        .unwrap();
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Post Title, Enroll Link, and Image URL are required."));

    assert!(server.store.seasons.read().is_empty());
    assert!(server.store.notes.read().is_empty());
    assert!(server.store.posts.read().is_empty());
}

#[tokio::test]
async fn test_admin_adds_member_with_photo() {
    let server = TestServer::start().await.unwrap();
    server.login_admin().await.unwrap();

    let form = Form::new()
        .text("name", "Anika Rahman")
        .text("role", "Mentor")
        .text("contact", "anika@example.com")
        .part(
            "photo",
            Part::bytes(PNG_BYTES.to_vec())
                .file_name("portrait.png")
                .mime_str("image/png")
                .unwrap(),
        );
    let response = server.post_multipart("/admin/add_member", form).await.unwrap();
    assert_redirect(&response, "/admin");

    let photo_url = server.store.members.read()[0].photo_url.clone();
    assert_eq!(photo_url, "/static/uploads/members/member_anika_rahman.png");

    let written = server
        .static_dir
        .path()
        .join("uploads/members/member_anika_rahman.png");
    assert_eq!(std::fs::read(written).unwrap(), PNG_BYTES);

    let served = server.get(&photo_url).await.unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().as_ref(), PNG_BYTES);

    let body = assert_page(server.get("/members").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Anika Rahman"));
}

#[tokio::test]
async fn test_member_without_photo_is_rejected() {
    let server = TestServer::start().await.unwrap();
    server.login_admin().await.unwrap();

    let form = Form::new()
        .text("name", "Sami")
        .text("role", "Mentor")
        .text("contact", "sami@example.com");
    let response = server.post_multipart("/admin/add_member", form).await.unwrap();
    let body = server.follow(response).await.unwrap();

    assert!(body.contains("All fields are required for adding a member."));
    assert!(server.store.members.read().is_empty());
}

#[tokio::test]
async fn test_any_logged_in_user_can_add_exam() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("rafi", "secret", true).unwrap();
    server.login("rafi", "secret").await.unwrap();

    let response = server
        .post_form(
            "/admin/add_exam",
            &[("season_id", "x"), ("title", "Midterm"), ("link", "https://forms.example/m")],
        )
        .await
        .unwrap();
    assert_redirect(&response, "/admin");
    assert!(server.store.exams.read().is_empty());

    let response = server
        .post_form(
            "/admin/add_exam",
            &[("season_id", "3"), ("title", "Midterm"), ("link", "https://forms.example/m")],
        )
        .await
        .unwrap();
    assert_redirect(&response, "/admin");
    assert_eq!(server.store.exams.read().len(), 1);

    let body = assert_page(server.get("/exams").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Midterm"));
}

#[tokio::test]
async fn test_exam_center_decodes_and_reports() {
    let server = TestServer::start().await.unwrap();
    server.login_admin().await.unwrap();

    let response = server
        .post_form("/admin/exam-center", &quiz_form("Quiz 1", "3", 2))
        .await
        .unwrap();
    assert_redirect(&response, "/admin/exam-center");
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Exam added successfully!"));

    let response = server
        .post_form("/admin/exam-center", &quiz_form("Quiz 1", "0", 1))
        .await
        .unwrap();
    let body = server.follow(response).await.unwrap();
    assert!(body.contains("Invalid max attempts."));

    // Quizzes are not stored anywhere
    assert!(server.store.exams.read().is_empty());
    assert!(location(&server.get("/admin/exam-center").await.unwrap()).is_none());
}
