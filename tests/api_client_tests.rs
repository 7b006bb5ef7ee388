// tests/api_client_tests.rs - MediaApiClient against a local stub API
//
// Each test starts an actix-web server on an ephemeral port that imitates
// the upstream media API, then talks to it through MediaApiClient and the
// server functions.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;

use elvco_web::web_app::api::{upstream, ApiError, MediaApiClient};
use elvco_web::web_app::model::{Credentials, NewComment, RatingSubmission, Role};
use elvco_web::web_app::search::MediaLookup;

const TOKEN: &str = "secret";
const USER_TOKEN: &str = "t0k";

#[derive(Deserialize)]
struct SearchQuery {
    search: Option<String>,
}

fn authorized(req: &HttpRequest) -> bool {
    match req.headers().get("Authorization") {
        Some(value) => value.to_str().map(|v| v == format!("Bearer {}", TOKEN)).unwrap_or(false),
        None => true,
    }
}

async fn list_medias(req: HttpRequest, query: web::Query<SearchQuery>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    match &query.search {
        Some(term) => HttpResponse::Ok().json(json!([
            {"id": 1, "title": format!("{} rise", term), "category": "images", "averageRating": 4.5, "url": "https://cdn/1.jpg"},
            {"id": 2, "title": format!("{} set", term), "category": "movies", "averageRating": 3.0}
        ])),
        None => HttpResponse::Ok().json(json!([
            {"id": 1, "title": "Sunrise", "category": "images", "averageRating": 4.5},
            {"id": 2, "title": "Sunset", "category": "movies", "averageRating": 3.0},
            {"id": 3, "title": "Moon", "category": "videos", "averageRating": 2.0}
        ])),
    }
}

async fn get_media(path: web::Path<i64>) -> HttpResponse {
    match path.into_inner() {
        42 => HttpResponse::Ok().json(json!({
            "id": 42,
            "title": "Ocean",
            "category": "videos",
            "rating": 4.0,
            "uploader": "marina",
            "tags": ["sea"],
            "comments": [{"username": "sam", "text": "Lovely", "timestamp": "2024-05-02T10:00:00Z"}]
        })),
        _ => HttpResponse::NotFound().json(json!({"message": "Media not found"})),
    }
}

fn signed_in(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {}", USER_TOKEN))
}

async fn post_comment(req: HttpRequest, body: web::Json<NewComment>) -> HttpResponse {
    if !signed_in(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    if body.upload_id == 42 {
        HttpResponse::Created().finish()
    } else {
        HttpResponse::BadRequest().json(json!({"message": "Unknown upload"}))
    }
}

async fn post_rating(req: HttpRequest, path: web::Path<i64>, body: web::Json<RatingSubmission>) -> HttpResponse {
    if !signed_in(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    if path.into_inner() == 42 && (1..=5).contains(&body.rating) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::UnprocessableEntity().body("bad rating")
    }
}

async fn login(body: web::Json<Credentials>) -> HttpResponse {
    match (body.username.as_str(), body.password.as_str()) {
        ("root", "hunter2") => HttpResponse::Ok().json(json!({"username": "root", "role": "admin", "token": "t0k"})),
        ("ana", "pw") => HttpResponse::Ok().json(json!({"username": "ana", "role": "user"})),
        _ => HttpResponse::Unauthorized().json(json!({"message": "Invalid credentials"})),
    }
}

async fn signup(body: web::Json<Credentials>) -> HttpResponse {
    if body.username == "taken" {
        HttpResponse::Conflict().json(json!({"message": "Username already exists"}))
    } else {
        HttpResponse::Created().json(json!({"username": body.username, "role": "user"}))
    }
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

/// Start the stub API and return its base url (".../api")
fn start_stub() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .service(
                web::scope("/api")
                    .route("/medias", web::get().to(list_medias))
                    .route("/medias/{id}", web::get().to(get_media))
                    .route("/medias/{id}/rating", web::post().to(post_rating))
                    .route("/comments", web::post().to(post_comment))
                    .route("/auth/login", web::post().to(login))
                    .route("/auth/signup", web::post().to(signup)),
            )
            .default_service(web::to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}/api", addr)
}

#[actix_web::test]
async fn test_fetch_medias_with_and_without_term() {
    let client = MediaApiClient::new(start_stub()).unwrap();

    let all = client.fetch_medias("").await.unwrap();
    assert_eq!(all.len(), 3);

    // Whitespace counts as blank: no search parameter
    let all = client.fetch_medias("   ").await.unwrap();
    assert_eq!(all.len(), 3);

    let found = client.fetch_medias("sun").await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].title, "sun rise");
    assert_eq!(found[1].average_rating, 3.0);
}

#[actix_web::test]
async fn test_lookup_trait_uses_search_endpoint() {
    let client = MediaApiClient::new(start_stub()).unwrap();

    let results = client.search("moon").await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "moon rise");
}

#[actix_web::test]
async fn test_bearer_token() {
    let base = start_stub();

    let good = MediaApiClient::new(base.clone()).unwrap().with_token(TOKEN);
    assert!(good.fetch_medias("sun").await.is_ok());

    let bad = MediaApiClient::new(base).unwrap().with_token("wrong");
    let err = bad.fetch_medias("sun").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized), "got {:?}", err);
}

#[actix_web::test]
async fn test_fetch_media_and_not_found() {
    let client = MediaApiClient::new(start_stub()).unwrap();

    let media = client.fetch_media(42).await.unwrap();
    assert_eq!(media.display_title(), "Ocean");
    assert_eq!(media.comments.len(), 1);

    let err = client.fetch_media(7).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(err.to_string(), "Media not found");
}

#[actix_web::test]
async fn test_comment_and_rating() {
    let anonymous = MediaApiClient::new(start_stub()).unwrap();
    let err = anonymous
        .submit_comment(&NewComment::new(42, "Hi").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let client = anonymous.with_token(USER_TOKEN);

    let comment = NewComment::new(42, "Lovely colours").unwrap();
    client.submit_comment(&comment).await.unwrap();

    let err = client
        .submit_comment(&NewComment::new(1, "Hello").unwrap())
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Unknown upload");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    client.rate_media(42, RatingSubmission::new(5)).await.unwrap();
}

#[actix_web::test]
async fn test_plain_text_error_uses_reason() {
    let base = start_stub().replace("/api", "/broken");
    let client = MediaApiClient::new(base).unwrap();

    let err = client.fetch_medias("sun").await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[actix_web::test]
async fn test_login_and_sign_up() {
    let client = MediaApiClient::new(start_stub()).unwrap();

    let admin = client
        .login(&Credentials { username: "root".into(), password: "hunter2".into() })
        .await
        .unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.token.as_deref(), Some("t0k"));

    let err = client
        .login(&Credentials { username: "root".into(), password: "nope".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let user = client
        .sign_up(&Credentials { username: "newbie".into(), password: "pw".into() })
        .await
        .unwrap();
    assert_eq!(user.username, "newbie");
    assert_eq!(user.role, Role::User);

    let err = client
        .sign_up(&Credentials { username: "taken".into(), password: "pw".into() })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Username already exists"));
}

#[actix_web::test]
async fn test_server_functions_use_registered_client() {
    use elvco_web::web_app::server_fns::{
        error_message, fetch_media, fetch_medias, rate_media, submit_comment,
    };

    upstream::set_test_client(MediaApiClient::new(start_stub()).unwrap());

    let results = fetch_medias("sun".to_string()).await.unwrap();
    assert_eq!(results.len(), 2);

    let err = fetch_media(7).await.unwrap_err();
    assert_eq!(error_message(&err), "Media not found");

    // Writes go upstream with the signed-in user's token
    let comment = NewComment::new(42, "Lovely").unwrap();
    submit_comment(comment.clone(), Some(USER_TOKEN.to_string())).await.unwrap();
    let err = submit_comment(comment, None).await.unwrap_err();
    assert_eq!(error_message(&err), "Not authorized");

    rate_media(42, 4, Some(USER_TOKEN.to_string())).await.unwrap();
    assert!(rate_media(42, 4, None).await.is_err());
}

#[actix_web::test]
async fn test_search_settings_come_from_context() {
    use elvco_web::config::AppConfig;
    use elvco_web::web_app::model::SearchSettings;
    use elvco_web::web_app::server_fns::search_settings;
    use leptos::reactive::owner::{provide_context, Owner};

    assert_eq!(search_settings().await.unwrap(), SearchSettings::default());

    let config = AppConfig::from_lookup(|key| (key == "SEARCH_DEBOUNCE_MS").then(|| "50".to_string())).unwrap();
    let owner = Owner::new();
    owner.set();
    provide_context(config.search_settings());

    let settings = search_settings().await.unwrap();
    assert_eq!(settings.debounce_ms, 50);
}
