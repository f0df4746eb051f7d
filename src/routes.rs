use crate::{
    api::{leave, student},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

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

    let mutation_limiter = Arc::new(build_limiter(config.rate_mutation_per_min));
    let query_limiter = Arc::new(build_limiter(config.rate_query_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::resource("/register_student")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(student::register_student)),
            )
            .service(
                web::resource("/submit_leave")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(leave::submit_leave)),
            )
            .service(
                web::resource("/get_leave_history/{student_id}")
                    .wrap(query_limiter.clone())
                    .route(web::get().to(leave::leave_history)),
            )
            .service(
                web::resource("/get_all_leave_requests")
                    .wrap(query_limiter.clone())
                    .route(web::get().to(leave::all_leave_requests)),
            )
            .service(
                web::resource("/update_leave_status")
                    .wrap(mutation_limiter.clone())
                    .route(web::post().to(leave::update_leave_status)),
            ),
    );
}
