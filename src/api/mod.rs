pub mod presence;
pub mod users;

use crate::config::Config;
use crate::data;
use crate::model::attendance::UserLog;

/// Per-request snapshot of the attendance log; loader failures become 500s.
pub(crate) fn load_log(config: &Config) -> actix_web::Result<UserLog> {
    data::get_data(&config.data_csv).map_err(|e| {
        tracing::error!(error = %e, "Failed to load attendance log");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })
}
