//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for login submissions.
///
/// # Limits
///
/// - **Rate**: one request replenished every 2 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` and never
/// reach the authentication provider.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let login = web::routes::login_routes().layer(rate_limit::login_layer()?);
/// ```
///
/// # Errors
///
/// Returns an error if the limiter settings are rejected by `governor`.
pub fn login_layer()
-> anyhow::Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(5)
        .finish()
        .context("invalid login rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
