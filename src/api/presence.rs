use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::debug;

use crate::api::load_log;
use crate::config::Config;
use crate::stats::report::{
    ReportError, mean_time_by_weekday, start_end_by_weekday, total_time_by_weekday,
};

fn user_not_found(user_id: u64) -> HttpResponse {
    debug!(user_id, "User not found");
    HttpResponse::NotFound().json(json!({
        "message": "User not found"
    }))
}

/// Mean presence time per weekday
#[utoipa::path(
    get,
    path = "/api/v1/mean_time_weekday/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Weekday abbreviation paired with mean presence seconds", body = Object, example = json!([
            ["Mon", 25200.0], ["Tue", 0.0], ["Wed", 0.0], ["Thu", 0.0], ["Fri", 0.0], ["Sat", 0.0], ["Sun", 0.0]
        ])),
        (status = 404, description = "User not found", body = Object, example = json!({
            "message": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Presence"
)]
pub async fn mean_time_weekday_view(
    config: web::Data<Config>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();
    let log = load_log(&config)?;

    match mean_time_by_weekday(&log, user_id) {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(ReportError::UserNotFound(_)) => Ok(user_not_found(user_id)),
    }
}

/// Total presence time per weekday
#[utoipa::path(
    get,
    path = "/api/v1/presence_weekday/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Header row, then weekday abbreviation paired with total presence seconds", body = Object, example = json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 50400], ["Tue", 0], ["Wed", 0], ["Thu", 0], ["Fri", 0], ["Sat", 0], ["Sun", 0]
        ])),
        (status = 404, description = "User not found", body = Object, example = json!({
            "message": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Presence"
)]
pub async fn presence_weekday_view(
    config: web::Data<Config>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();
    let log = load_log(&config)?;

    match total_time_by_weekday(&log, user_id) {
        Ok(rows) => {
            let mut result = vec![json!(["Weekday", "Presence (s)"])];
            result.extend(rows.iter().map(|(day, seconds)| json!([day, seconds])));
            Ok(HttpResponse::Ok().json(result))
        }
        Err(ReportError::UserNotFound(_)) => Ok(user_not_found(user_id)),
    }
}

/// Average start and end clock times per work-week day
#[utoipa::path(
    get,
    path = "/api/v1/presence_start_end/{user_id}",
    params(
        ("user_id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Weekday abbreviation with mean start and end clock times, Monday through Friday", body = Object, example = json!([
            ["Mon", "08:30:00", "15:30:00"], ["Tue", "00:00:00", "00:00:00"],
            ["Wed", "00:00:00", "00:00:00"], ["Thu", "00:00:00", "00:00:00"],
            ["Fri", "00:00:00", "00:00:00"]
        ])),
        (status = 404, description = "User not found", body = Object, example = json!({
            "message": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Presence"
)]
pub async fn presence_start_end_view(
    config: web::Data<Config>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user_id = path.into_inner();
    let log = load_log(&config)?;

    match start_end_by_weekday(&log, user_id) {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(ReportError::UserNotFound(_)) => Ok(user_not_found(user_id)),
    }
}
