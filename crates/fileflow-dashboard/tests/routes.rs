//! End-to-end tests driving the dashboard router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use fileflow_core::{FileFlowConfig, MockData};
use fileflow_dashboard::auth::{SESSION_COOKIE_NAME, create_session_token};
use fileflow_dashboard::{AppState, create_router};

fn app_with(config: FileFlowConfig) -> Router {
    create_router(AppState::new(config).unwrap())
}

fn app() -> Router {
    app_with(FileFlowConfig::default())
}

fn session_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}={}", create_session_token("admin"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, session_cookie())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    cookie: Option<String>,
) -> axum::response::Response {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

fn row_count(html: &str) -> usize {
    html.matches("data-row-id=").count()
}

#[tokio::test]
async fn unauthenticated_page_redirects_to_login() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/user-management/users?page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?redirect=%2Fuser-management%2Fusers%3Fpage%3D2");
}

#[tokio::test]
async fn login_sets_session_cookie_and_follows_redirect() {
    let body = "username=admin&password=secret&redirect=%2Ffile-manager";
    let response = post_form(app(), "/login", body, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/file-manager");
    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("fileflow_session="));
}

#[tokio::test]
async fn login_ignores_off_site_redirect() {
    let body = "username=admin&password=x&redirect=%2F%5Cevil.example";
    let response = post_form(app(), "/login", body, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let response = post_form(app(), "/login", "username=&password=secret", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?error=invalid"));
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn login_page_redirects_home_when_signed_in() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/login")
                .header(header::COOKIE, session_cookie())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn healthz_is_public() {
    let response = app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["service"], "fileflow-dashboard");
}

#[tokio::test]
async fn disabled_auth_serves_pages_directly() {
    let mut config = FileFlowConfig::default();
    config.dashboard.auth.enabled = false;

    let response = app_with(config)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn home_page_shows_quick_stats() {
    let stats = MockData::generate(FileFlowConfig::default().mock.seed).stats();
    let (status, html) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome to FileFlow Dashboard!"));
    assert!(html.contains(&format!(">{}</p>", stats.active_users)));
    assert!(html.contains(&format!(">{}</p>", stats.pending_approvals)));
}

#[tokio::test]
async fn inactive_filter_shows_inactive_users() {
    let data = MockData::generate(FileFlowConfig::default().mock.seed);
    let inactive: Vec<_> = data.users.iter().filter(|u| !u.is_active).collect();

    let (status, html) = get(app(), "/user-management/users?status=inactive").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_count(&html), inactive.len().min(10));
    assert!(html.contains(&format!("0 of {} row(s) selected.", inactive.len())));
    for user in inactive.iter().take(10) {
        assert!(html.contains(&format!(r#"data-row-id="{}""#, user.id)));
    }
}

#[tokio::test]
async fn second_page_shows_rows_eleven_to_twenty() {
    let data = MockData::generate(FileFlowConfig::default().mock.seed);

    let (_, html) = get(app(), "/user-management/users?page=2").await;

    assert_eq!(row_count(&html), 10);
    for user in &data.users[10..20] {
        assert!(html.contains(&format!(r#"data-row-id="{}""#, user.id)));
    }
    assert!(!html.contains(r#"data-row-id="user-10""#));
    assert!(!html.contains(r#"data-row-id="user-21""#));
}

#[tokio::test]
async fn next_page_stays_within_status_filter() {
    let mut config = FileFlowConfig::default();
    config.mock.seed = 9;
    let data = MockData::generate(config.mock.seed);
    let inactive: Vec<_> = data.users.iter().filter(|u| !u.is_active).collect();
    assert!(inactive.len() > 10, "seed 9 should give more than one page of inactive users");

    let (_, first) = get(app_with(config.clone()), "/user-management/users?status=inactive").await;
    assert!(first.contains(r#"href="/user-management/users?status=inactive&amp;page=2""#));

    let (_, second) = get(app_with(config), "/user-management/users?status=inactive&page=2").await;
    assert_eq!(row_count(&second), inactive.len() - 10);
    for user in &inactive[10..] {
        assert!(second.contains(&format!(r#"data-row-id="{}""#, user.id)));
    }
    for user in &inactive[..10] {
        assert!(!second.contains(&format!(r#"data-row-id="{}""#, user.id)));
    }
    assert!(second.contains(&format!("0 of {} row(s) selected.", inactive.len())));
}

#[tokio::test]
async fn out_of_range_page_is_clamped() {
    let (_, html) = get(app(), "/user-management/roles?page=9").await;

    assert_eq!(row_count(&html), 5);
    // back on the only page, so no link carries a page number
    assert!(!html.contains("page="));
}

#[tokio::test]
async fn clear_link_drops_status_but_keeps_search() {
    let (_, filtered) = get(app(), "/user-management/users?status=inactive&q=first1").await;
    assert!(filtered.contains(r#"href="/user-management/users?q=first1""#));

    // UserFirst1 and UserFirst10..UserFirst19
    let (_, cleared) = get(app(), "/user-management/users?q=first1").await;
    assert!(cleared.contains("0 of 11 row(s) selected."));
    assert_eq!(row_count(&cleared), 10);
}

#[tokio::test]
async fn selection_survives_hiding_a_column() {
    let (_, html) = get(app(), "/user-management/users?selected=user-2&hidden=email").await;

    assert!(html.contains("1 of 25 row(s) selected."));
    assert!(html.contains(r#"data-row-id="user-2" data-state="selected""#));
    assert!(!html.contains(r#"data-column="email""#));
}

#[tokio::test]
async fn master_templates_load_with_skeleton() {
    let (status, html) = get(app(), "/template-management/master-templates").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"hx-get="/template-management/master-templates/table""#));
    assert!(html.contains(r#"hx-trigger="load delay:1500ms""#));
    assert_eq!(html.matches("data-skeleton").count(), 10);
    assert_eq!(row_count(&html), 0);

    let (status, fragment) = get(app(), "/template-management/master-templates/table").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!fragment.contains("<!DOCTYPE html>"));
    assert_eq!(row_count(&fragment), 10);
    assert_eq!(fragment.matches("data-skeleton").count(), 0);
}

#[tokio::test]
async fn file_manager_filters_by_type_and_date() {
    let (_, by_type) = get(app(), "/file-manager?type=Folder").await;
    assert_eq!(row_count(&by_type), 2);

    let (_, by_date) = get(app(), "/file-manager?date=2023-10-26").await;
    assert_eq!(row_count(&by_date), 1);
    assert!(by_date.contains(r#"data-row-id="1""#));
    assert!(by_date.contains(r#"value="2023-10-26""#));
}

#[tokio::test]
async fn invalid_template_form_is_rejected() {
    let response = post_form(
        app(),
        "/template-management/master-templates",
        "name=&description=&version=&status=Draft",
        Some(session_cookie()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Template name is required."));
    assert!(html.contains("Version is required (e.g., 1.0)."));
    assert!(html.contains("addOpen: true"));
}

#[tokio::test]
async fn valid_document_form_redirects_to_list() {
    let response = post_form(
        app(),
        "/template-management/documents",
        "name=Acme+NDA&templateUsed=Non-Disclosure+Agreement&status=Draft",
        Some(session_cookie()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/template-management/documents");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, html) = get(app(), "/no-such-page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}
