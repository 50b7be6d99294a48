use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::services::AppState;

const RATE_LIMIT_PER_IP: u32 = 100; // requests per window
const RATE_WINDOW_SECONDS: u64 = 900; // 15 minutes

/// In-process fixed-window counter keyed by client IP. State lives for the
/// process lifetime; a restart resets all windows.
#[derive(Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, (u64, u32)>>,
}

impl RateLimiter {
    /// Counts one hit against `key` and reports whether it is still within
    /// the budget for the current window.
    pub fn check(&self, key: &str, limit: u32, window_seconds: u64) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let window_start = now - now % window_seconds;

        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        let entry = windows.entry(key.to_string()).or_insert((window_start, 0));
        if entry.0 != window_start {
            *entry = (window_start, 0);
        }
        entry.1 += 1;
        entry.1 <= limit
    }
}

fn extract_client_ip_from(headers: &HeaderMap, extensions: &axum::http::Extensions) -> String {
    // Preferred order: X-Forwarded-For, X-Real-IP, ConnectInfo
    if let Some(v) = headers.get("x-forwarded-for") {
        if let Ok(s) = v.to_str() {
            // x-forwarded-for can be a comma separated list; take first
            return s.split(',').next().unwrap_or(s).trim().to_string();
        }
    }

    if let Some(v) = headers.get("x-real-ip") {
        if let Ok(s) = v.to_str() {
            return s.trim().to_string();
        }
    }

    if let Some(ci) = extensions.get::<ConnectInfo<SocketAddr>>() {
        return ci.0.ip().to_string();
    }

    "unknown".to_string()
}

pub async fn rate_limit_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = extract_client_ip_from(request.headers(), request.extensions());

    let allowed = state.rate_limiter.check(
        &format!("ratelimit:ip:{}", client_ip),
        RATE_LIMIT_PER_IP,
        RATE_WINDOW_SECONDS,
    );

    if !allowed {
        tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "success": false,
                "message": "Muitas requisições. Tente novamente em alguns minutos.",
            })),
        )
            .into_response();
    }

    next.run(request).await
}
