use crate::api::users::UserEntry;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Presence Analyzer API",
        version = "1.0.0",
        description = r#"
## Presence Analyzer

Reports employee presence statistics derived from a CSV attendance log.

### Endpoints
- **Users** — listing of known user ids for the front-end dropdown
- **Presence** — per-weekday mean presence time, total presence time, and
  average start/end clock times for one user

All times are seconds since midnight unless rendered as `HH:MM:SS`.
The attendance log is re-read on every request.
"#,
    ),
    paths(
        crate::api::users::users_view,

        crate::api::presence::mean_time_weekday_view,
        crate::api::presence::presence_weekday_view,
        crate::api::presence::presence_start_end_view,
    ),
    components(
        schemas(
            UserEntry
        )
    ),
    tags(
        (name = "Users", description = "User listing APIs"),
        (name = "Presence", description = "Per-weekday presence statistics APIs"),
    )
)]
pub struct ApiDoc;
