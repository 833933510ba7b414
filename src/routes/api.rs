//! JSON endpoints: the public feed consumed by the marketing site and the
//! drag hit-test used by the admin list shim.

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::{Deserialize, Serialize};

use crate::dragdrop::{DragController, Placement, RowBox};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DieselRepository, PortfolioReader};

/// Public feed of every item sorted by display order. The marketing site
/// renders its grid straight from this payload, data URLs included.
#[get("/portfolios")]
pub async fn list_portfolios(repo: web::Data<DieselRepository>) -> impl Responder {
    match repo.list_items() {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            log::error!("Failed to load public portfolio feed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
pub struct DragRequest {
    /// Idx of the row being dragged.
    pub dragged: String,
    /// Pointer position in the list's coordinate space.
    pub pointer_y: f64,
    /// Measured geometry of all visible rows, dragged row included.
    pub rows: Vec<RowBox>,
}

#[derive(Serialize)]
pub struct DragResponse {
    /// Idx the dragged row is inserted before, absent when it moves to the
    /// end.
    pub anchor: Option<String>,
    /// Full idx sequence with the dragged row at its preview position.
    pub order: Vec<String>,
}

/// Resolves where the dragged row lands for the reported pointer position.
/// Pure hit-test; nothing is persisted until the client submits the order.
#[post("/portfolio/drag")]
pub async fn drag_placement(
    _user: AuthenticatedUser,
    payload: web::Json<DragRequest>,
) -> impl Responder {
    let DragRequest {
        dragged,
        pointer_y,
        rows,
    } = payload.into_inner();

    let mut controller = DragController::new();
    controller.start(dragged);

    let placement = controller.placement(&rows, pointer_y);
    let Some(order) = controller.drop_at(&rows, pointer_y) else {
        return HttpResponse::BadRequest().finish();
    };

    let anchor = match placement {
        Some(Placement::Before(idx)) => Some(idx),
        _ => None,
    };

    HttpResponse::Ok().json(DragResponse { anchor, order })
}
