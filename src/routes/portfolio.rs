use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::domain::portfolio_item::ItemDraft;
use crate::dto::portfolio::{FormPageData, ItemRow};
use crate::forms::portfolio::{ReorderForm, SavePortfolioForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::portfolio::{self as portfolio_service, ListQuery, PendingImages, SaveOutcome};
use crate::services::ServiceError;

#[derive(Deserialize)]
struct ListQueryParams {
    #[serde(rename = "type")]
    filter: Option<String>,
    q: Option<String>,
}

#[get("/portfolio")]
pub async fn show_list(
    params: web::Query<ListQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ListQuery {
        filter: params.filter,
        q: params.q,
    };

    let mut context = base_context(&flash_messages, &user, "list");

    match portfolio_service::load_list_page(repo.get_ref(), query) {
        Ok(data) => {
            context.insert("items", &data.items);
            context.insert("filter", &data.filter);
            context.insert("search_query", &data.search_query);
            context.insert("load_failed", &false);
        }
        Err(e) => {
            // A failed load keeps the previous remote state untouched; the
            // view just shows its error state.
            log::error!("Failed to load portfolio list: {e}");
            context.insert("items", &Vec::<ItemRow>::new());
            context.insert("filter", "all");
            context.insert("search_query", &None::<String>);
            context.insert("load_failed", &true);
        }
    }

    render_template(&tera, "portfolio/list.html", &context)
}

#[get("/portfolio/new")]
pub async fn new_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &user, "form");
    context.insert("form", &FormPageData::from(&ItemDraft::default()));

    render_template(&tera, "portfolio/form.html", &context)
}

#[get("/portfolio/{idx}/edit")]
pub async fn edit_form(
    idx: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let draft = match portfolio_service::load_edit_form(repo.get_ref(), &idx) {
        Ok(draft) => draft,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Item not found.").send();
            return redirect("/portfolio");
        }
        Err(e) => {
            log::error!("Failed to load item: {e}");
            FlashMessage::error("Failed to load item.").send();
            return redirect("/portfolio");
        }
    };

    let mut context = base_context(&flash_messages, &user, "form");
    context.insert("form", &FormPageData::from(&draft));

    render_template(&tera, "portfolio/form.html", &context)
}

#[post("/portfolio/save")]
pub async fn save(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    MultipartForm(form): MultipartForm<SavePortfolioForm>,
) -> impl Responder {
    let draft = form.to_draft();
    let images = PendingImages::from(&form);

    match portfolio_service::save_item(repo.get_ref(), draft.clone(), images).await {
        Ok(SaveOutcome::Created(_)) => {
            FlashMessage::success("Created successfully.").send();
            redirect("/portfolio")
        }
        Ok(SaveOutcome::Updated(_)) => {
            FlashMessage::success("Updated successfully.").send();
            redirect("/portfolio")
        }
        Err(e) => {
            let message = match &e {
                ServiceError::Validation(msg) => msg.clone(),
                _ => {
                    log::error!("Failed to save item: {e}");
                    "Failed to save.".to_string()
                }
            };
            // The user stays on the form with their input intact.
            let mut context = base_context(&flash_messages, &user, "form");
            context.insert("alerts", &[(message, "error")]);
            context.insert("form", &FormPageData::from(&draft));
            render_template(&tera, "portfolio/form.html", &context)
        }
    }
}

#[post("/portfolio/{idx}/delete")]
pub async fn delete(
    idx: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match portfolio_service::delete_item(repo.get_ref(), &idx) {
        Ok(()) => {
            FlashMessage::success("Deleted successfully.").send();
        }
        Err(e) => {
            log::error!("Failed to delete item {idx}: {e}");
            FlashMessage::error("Failed to delete.").send();
        }
    }

    redirect("/portfolio")
}

#[post("/portfolio/reorder")]
pub async fn reorder(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    // The idx field repeats once per row, which serde_urlencoded cannot
    // express; serde_html_form parses it into a Vec.
    let form: ReorderForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(e) => {
            log::error!("Failed to parse reorder payload: {e}");
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "status": "error", "message": "Invalid payload." }));
        }
    };

    match portfolio_service::reorder(repo.get_ref(), &form.idx) {
        Ok(_) => HttpResponse::Ok()
            .json(serde_json::json!({ "status": "ok", "message": "Order saved." })),
        Err(e) => {
            log::error!("Failed to save order: {e}");
            // The client keeps its optimistic visual order; a manual refresh
            // reloads the persisted one.
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "status": "error", "message": "Failed to save order." }))
        }
    }
}
