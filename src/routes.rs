use crate::{
    api::{presence, users},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter) // rate limiting
            .service(web::resource("/users").route(web::get().to(users::users_view)))
            .service(
                web::resource("/mean_time_weekday/{user_id}")
                    .route(web::get().to(presence::mean_time_weekday_view)),
            )
            .service(
                web::resource("/presence_weekday/{user_id}")
                    .route(web::get().to(presence::presence_weekday_view)),
            )
            .service(
                web::resource("/presence_start_end/{user_id}")
                    .route(web::get().to(presence::presence_start_end_view)),
            ),
    );
}
