use crate::{
    api::{calendar, menu},
    auth::middleware::auth_middleware,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use anyhow::Context;
use std::sync::Arc;

pub type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-IP limiter for the protected scope. Fails at startup rather than
/// leaving the routes unguarded or unmounted.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<Limiter> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .with_context(|| format!("invalid rate limit: {requests_per_min} requests per minute"))?;
    Ok(Arc::new(Governor::new(&cfg)))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, protected_limiter: Limiter) {
    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            // authentication
            .wrap(protected_limiter) // rate limiting
            // /menu
            .service(web::resource("/menu").route(web::get().to(menu::menu)))
            .service(
                web::scope("/calendar")
                    // /calendar/summary
                    .service(web::resource("/summary").route(web::post().to(calendar::summary)))
                    // /calendar/months
                    .service(web::resource("/months").route(web::post().to(calendar::months)))
                    // /calendar/month?year=&month=
                    .service(web::resource("/month").route(web::post().to(calendar::month))),
            ),
    );
}
