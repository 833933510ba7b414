use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use diesel::RunQueryDsl;
use tera::Tera;

use portfolio_admin::models::config::ServerConfig;
use portfolio_admin::repository::DieselRepository;
use portfolio_admin::routes::alert_level_to_str;
use portfolio_admin::routes::auth::signin;
use portfolio_admin::routes::main::show_dashboard;

mod common;

#[std::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "error");
    assert_eq!(alert_level_to_str(&Level::Warning), "info");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        database_url: ":memory:".to_string(),
        templates_dir: "templates/**/*.html".to_string(),
        assets_dir: "./assets".to_string(),
        secret: "0123456789012345678901234567890123456789012345678901234567890123".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "hunter2".to_string(),
    }
}

#[actix_web::test]
async fn dashboard_shows_an_error_state_when_the_load_fails() {
    let test_db = common::TestDb::new("test_dashboard_error_state.db");

    // Break the store so every dashboard read fails.
    diesel::sql_query("DROP TABLE portfolio_items")
        .execute(&mut test_db.pool().get().unwrap())
        .unwrap();

    let config = server_config();
    let secret_key = Key::from(config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();

    let app = test::init_service(
        App::new()
            .wrap(FlashMessagesFramework::builder(message_store).build())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(
                Tera::new("templates/**/*.html").expect("Failed to parse templates"),
            ))
            .app_data(web::Data::new(DieselRepository::new(test_db.pool())))
            .app_data(web::Data::new(config))
            .service(signin)
            .service(show_dashboard),
    )
    .await;

    let login = test::TestRequest::post()
        .uri("/auth/signin")
        .set_form([("email", "admin@example.com"), ("password", "hunter2")])
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let cookies: Vec<String> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
        .collect();

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::COOKIE, cookies.join("; ")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // The view renders its empty stats with an error line instead of dying.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Failed to load the dashboard"));
}
