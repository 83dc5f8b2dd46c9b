//! Authentication middleware for the dashboard.
//!
//! Form-based sign-in with a session cookie. With no users configured any
//! non-empty username is accepted; set `dashboard.auth.enabled: false` to
//! skip the gate entirely.

use axum::{
    Form,
    extract::{Query, Request, State},
    http::{Method, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use base64::Engine;
use serde::Deserialize;

use fileflow_table::render::html_escape;

use crate::state::AppState;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "fileflow_session";

/// Session token prefix for validation
const SESSION_PREFIX: &str = "fileflow_auth_";

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/login", "/healthz"];

/// Redirects to `/login` unless the request carries a valid session.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config().dashboard.auth.enabled {
        return next.run(request).await;
    }

    let path = request.uri().path();
    let signed_in = session_user(&request).is_some();

    if path == "/login" && signed_in && *request.method() == Method::GET {
        return Redirect::to("/").into_response();
    }
    if signed_in || PUBLIC_PATHS.contains(&path) {
        return next.run(request).await;
    }

    let redirect_to = request.uri().path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    tracing::debug!(path = %path, "No session, redirecting to login");
    Redirect::to(&format!("/login?redirect={}", urlencoding::encode(redirect_to))).into_response()
}

/// Username carried by the request's session cookie, if valid.
fn session_user(request: &Request) -> Option<String> {
    let cookies = request.headers().get(header::COOKIE)?.to_str().ok()?;
    let session = extract_session_cookie(cookies)?;
    validate_session(session)
}

/// Extract session cookie value from cookie header
fn extract_session_cookie(cookies: &str) -> Option<&str> {
    let prefix = format!("{SESSION_COOKIE_NAME}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
}

/// Decode a session token into its username.
fn validate_session(session: &str) -> Option<String> {
    let decoded = base64::engine::general_purpose::STANDARD.decode(session).ok()?;
    let token = String::from_utf8(decoded).ok()?;
    token
        .strip_prefix(SESSION_PREFIX)
        .filter(|user| !user.is_empty())
        .map(str::to_string)
}

/// Only same-site paths. Browsers read both `//host` and `/\host` as another host.
fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\")
}

/// Create a session token for a user
pub fn create_session_token(username: &str) -> String {
    let token = format!("{SESSION_PREFIX}{username}");
    base64::engine::general_purpose::STANDARD.encode(token)
}

/// Login page query parameters
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Handler for the login page (GET)
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(login_page_template(query.redirect.as_deref(), query.error.is_some()))
}

/// Handler for login form submission (POST)
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let auth = &state.config().dashboard.auth;

    if !auth.check_credentials(&form.username, &form.password) {
        tracing::warn!(username = %form.username, "Rejected sign-in attempt");
        let redirect = form
            .redirect
            .map(|r| format!("&redirect={}", urlencoding::encode(&r)))
            .unwrap_or_default();
        return Redirect::to(&format!("/login?error=invalid{redirect}")).into_response();
    }

    let username = form.username.trim();
    tracing::info!(username = %username, "User signed in");

    let redirect_url = form
        .redirect
        .filter(|r| is_local_path(r))
        .unwrap_or_else(|| "/".to_string());

    let cookie = format!(
        "{SESSION_COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400",
        create_session_token(username)
    );

    ([(header::SET_COOKIE, cookie)], Redirect::to(&redirect_url)).into_response()
}

/// Handler for logout
pub async fn logout() -> Response {
    let cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}

/// Generate the login page HTML
fn login_page_template(redirect: Option<&str>, failed: bool) -> String {
    let error_html = if failed {
        r##"<div class="mb-6 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg" role="alert">
            <div class="flex items-center gap-3">
                <i class="fas fa-exclamation-circle text-red-500"></i>
                <span class="text-red-700 dark:text-red-400">Invalid username or password. Please try again.</span>
            </div>
        </div>"##
    } else {
        ""
    };

    let redirect_input = redirect
        .map(|r| format!(r#"<input type="hidden" name="redirect" value="{}">"#, html_escape(r)))
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{
    darkMode: localStorage.getItem('darkMode') === 'true'
}}" :class="{{ 'dark': darkMode }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sign in - FileFlow</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            darkMode: 'class',
            theme: {{
                extend: {{
                    colors: {{
                        primary: {{
                            50: '#eff6ff',
                            100: '#dbeafe',
                            200: '#bfdbfe',
                            300: '#93c5fd',
                            400: '#60a5fa',
                            500: '#3b82f6',
                            600: '#2563eb',
                            700: '#1d4ed8',
                            800: '#1e40af',
                            900: '#1e3a8a',
                        }}
                    }}
                }}
            }}
        }}
    </script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen flex items-center justify-center p-4">
    <div class="absolute top-4 right-4">
        <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                class="p-3 hover:bg-gray-200 dark:hover:bg-gray-700 rounded-full text-gray-600 dark:text-gray-300 transition-colors" aria-label="Toggle theme">
            <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
        </button>
    </div>

    <div class="w-full max-w-sm">
        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-xl p-8">
            <div class="text-center mb-6">
                <div class="inline-flex items-center justify-center w-12 h-12 rounded-full bg-primary-100 dark:bg-primary-900/40 mb-4">
                    <i class="fas fa-water text-primary-600 dark:text-primary-400 text-xl"></i>
                </div>
                <h2 class="text-2xl font-semibold text-gray-900 dark:text-white">FileFlow</h2>
                <p class="text-gray-500 dark:text-gray-400 mt-1">Sign in to your account</p>
            </div>

            {error_html}

            <form method="POST" action="/login" class="space-y-5">
                {redirect_input}

                <div>
                    <label for="username" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        Username
                    </label>
                    <input type="text" id="username" name="username" required autofocus
                        class="block w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg
                               bg-white dark:bg-gray-700 text-gray-900 dark:text-white
                               focus:ring-2 focus:ring-primary-500 focus:border-primary-500"
                        placeholder="admin">
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        Password
                    </label>
                    <div class="relative" x-data="{{ show: false }}">
                        <input :type="show ? 'text' : 'password'" id="password" name="password" required
                            class="block w-full pl-4 pr-12 py-3 border border-gray-300 dark:border-gray-600 rounded-lg
                                   bg-white dark:bg-gray-700 text-gray-900 dark:text-white
                                   focus:ring-2 focus:ring-primary-500 focus:border-primary-500"
                            placeholder="password">
                        <button type="button" @click="show = !show" aria-label="Show password"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600 dark:hover:text-gray-300">
                            <i class="fas" :class="show ? 'fa-eye-slash' : 'fa-eye'"></i>
                        </button>
                    </div>
                </div>

                <button type="submit"
                    class="w-full py-3 px-4 bg-primary-600 hover:bg-primary-700 text-white font-medium rounded-lg transition-colors
                           focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 dark:focus:ring-offset-gray-800">
                    Sign in
                </button>
            </form>
        </div>
    </div>
</body>
</html>"##
    )
}
