use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};
use validator::Validate;

use crate::forms::auth::SignInForm;
use crate::models::config::ServerConfig;
use crate::routes::{alert_level_to_str, redirect, render_template};
use crate::services::auth::{Authenticator, ConfigAuthenticator};

#[get("/auth/signin")]
pub async fn show_signin(flash_messages: IncomingFlashMessages, tera: web::Data<Tera>) -> impl Responder {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);

    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    req: HttpRequest,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate sign-in form: {e}");
        FlashMessage::error("Please enter a valid email and password.").send();
        return redirect("/auth/signin");
    }

    let authenticator = ConfigAuthenticator::new(&server_config);
    let user = match authenticator.sign_in(&form.email, &form.password) {
        Ok(user) => user,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/auth/signin");
        }
    };

    let token = match user.to_jwt(&server_config.secret) {
        Ok(token) => token,
        Err(e) => {
            log::error!("Failed to encode identity token: {e}");
            FlashMessage::error("Sign-in failed.").send();
            return redirect("/auth/signin");
        }
    };

    if let Err(e) = Identity::login(&req.extensions(), token) {
        log::error!("Failed to log identity in: {e}");
        FlashMessage::error("Sign-in failed.").send();
        return redirect("/auth/signin");
    }

    redirect("/")
}

#[post("/auth/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/auth/signin")
}
