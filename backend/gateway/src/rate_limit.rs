//! Gateway Rate Limiting Module
//!
//! Sliding-window per-IP limiter applied to every API route, matching the
//! service's public-counter deployment (shared kiosks behind one origin).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::server::GatewayState;

/// A naive fixed-window rate limiter keyed by client IP.
#[derive(Clone)]
pub struct RateLimiter {
    // ip_address -> (request_count, window_start)
    limits: Arc<RwLock<HashMap<String, (u32, Instant)>>>,
    pub max_requests: u32,
    pub window: Duration,
    /// Honor `x-forwarded-for` when keying clients. Off unless the gateway
    /// actually sits behind a trusted reverse proxy, since any direct client
    /// can write that header.
    pub trust_proxy: bool,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_secs: u64, trust_proxy: bool) -> Self {
        Self {
            limits: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_secs),
            trust_proxy,
        }
    }

    /// Check if a request from the given IP is allowed.
    pub async fn check_limit(&self, ip: &str) -> bool {
        let mut limits = self.limits.write().await;
        let now = Instant::now();

        // Drop clients whose window has lapsed so the map tracks only
        // active clients.
        limits.retain(|_, (_, start)| now.duration_since(*start) <= self.window);

        let state = limits.entry(ip.to_string()).or_insert((0, now));

        if now.duration_since(state.1) > self.window {
            // Reset window
            state.0 = 1;
            state.1 = now;
            debug!("rate limit window reset for {}", ip);
            true
        } else {
            state.0 += 1;
            if state.0 > self.max_requests {
                warn!("rate limit exceeded for {}", ip);
                false
            } else {
                true
            }
        }
    }

    /// Number of clients currently tracked.
    pub async fn tracked_clients(&self) -> usize {
        self.limits.read().await.len()
    }
}

/// Client key for the limiter: the socket peer, or the forwarded header when
/// a trusted proxy fronts the gateway.
fn client_ip(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(forwarded) = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

/// Axum middleware enforcing the limiter on every request.
pub async fn enforce(
    State(state): State<GatewayState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request, state.limiter.trust_proxy);
    if state.limiter.check_limit(&ip).await {
        next.run(request).await
    } else {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "too many requests, try again later" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[tokio::test]
    async fn blocks_after_limit_within_window() {
        let limiter = RateLimiter::new(3, 60, false);
        for _ in 0..3 {
            assert!(limiter.check_limit("10.0.0.1").await);
        }
        assert!(!limiter.check_limit("10.0.0.1").await);
        // A different client is unaffected.
        assert!(limiter.check_limit("10.0.0.2").await);
    }

    #[tokio::test]
    async fn resets_after_window_elapses() {
        let limiter = RateLimiter::new(1, 0, false);
        assert!(limiter.check_limit("10.0.0.1").await);
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(limiter.check_limit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn lapsed_clients_are_evicted() {
        let limiter = RateLimiter::new(5, 0, false);
        limiter.check_limit("10.0.0.1").await;
        limiter.check_limit("10.0.0.2").await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        limiter.check_limit("10.0.0.3").await;
        assert_eq!(limiter.tracked_clients().await, 1);
    }

    fn request_with_forwarded(ip: &str) -> Request {
        Request::builder()
            .uri("/api/health")
            .header("x-forwarded-for", ip)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn forwarded_header_is_ignored_without_trust_proxy() {
        let req = request_with_forwarded("1.2.3.4");
        assert_eq!(client_ip(&req, false), "local");
    }

    #[test]
    fn forwarded_header_is_used_behind_a_proxy() {
        let req = request_with_forwarded("1.2.3.4, 10.0.0.1");
        assert_eq!(client_ip(&req, true), "1.2.3.4");
    }
}
