use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::DashboardStats;
use crate::dto::portfolio::ItemRow;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &user, "dashboard");

    match main_service::load_dashboard(repo.get_ref()) {
        Ok(data) => {
            context.insert("stats", &data.stats);
            context.insert("recent", &data.recent);
            context.insert("load_failed", &false);
        }
        Err(e) => {
            // The view stays interactive; the stats just show their empty
            // state until the next navigation.
            log::error!("Failed to load dashboard: {e}");
            context.insert("stats", &DashboardStats::default());
            context.insert("recent", &Vec::<ItemRow>::new());
            context.insert("load_failed", &true);
        }
    }

    render_template(&tera, "main/dashboard.html", &context)
}
