use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::load_log;
use crate::config::Config;

#[derive(Serialize, ToSchema)]
pub struct UserEntry {
    #[schema(example = 10)]
    pub user_id: u64,
    #[schema(example = "User 10")]
    pub name: String,
}

/// Users listing for the front-end dropdown
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Known user ids, ascending", body = [UserEntry]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn users_view(config: web::Data<Config>) -> actix_web::Result<impl Responder> {
    let data = load_log(&config)?;

    let users: Vec<UserEntry> = data
        .keys()
        .map(|&user_id| UserEntry {
            user_id,
            name: format!("User {}", user_id),
        })
        .collect();

    Ok(HttpResponse::Ok().json(users))
}
