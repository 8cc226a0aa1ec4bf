//! REST API helpers for communicating with the Frenzy backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/empty/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Vec`/`Result` outputs instead of panics so a
//! failed fetch degrades the UI to an anonymous or empty view without
//! crashing hydration. Swallowed failures are logged through the `log`
//! facade.

#![allow(clippy::unused_async)]

use super::types::{
    CartItem, NewService, Order, PaymentMethod, ReviewPayload, SavedAddress, Service,
    StatisticsSummary, User, WishlistItem,
};

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("GET {url} failed: {err}");
            return None;
        }
    };
    if !resp.ok() {
        return None;
    }
    match resp.json::<T>().await {
        Ok(body) => Some(body),
        Err(err) => {
            log::warn!("GET {url} returned an unreadable body: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<gloo_net::http::Response, String> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the currently authenticated user from `/api/current_user`.
///
/// A `401`, a transport failure, or an unreadable body all resolve to
/// `None` — the caller proceeds as an anonymous visitor.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<super::types::SessionEnvelope>("/api/current_user")
            .await
            .and_then(|envelope| envelope.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the server session via `GET /api/logout`.
///
/// Any response counts as success; the local session is cleared either way.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::get("/api/logout").send().await;
    }
}

/// Sign in via `POST /api/login`.
///
/// # Errors
///
/// Returns a user-displayable message on bad credentials or transport
/// failure.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = post_json("/api/login", &body).await?;
        if !resp.ok() {
            return Err("Invalid credentials".to_owned());
        }
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            user: User,
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/register`.
///
/// # Errors
///
/// Returns the backend's error message (e.g. duplicate email) or a
/// transport error.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = post_json("/api/register", &body).await?;
        if resp.ok() {
            return Ok(());
        }
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: String,
        }
        match resp.json::<ErrorResponse>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("registration failed: {}", resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the service catalog. Empty on failure.
pub async fn fetch_services() -> Vec<Service> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/services").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the current cart contents. Empty on failure.
pub async fn fetch_cart() -> Vec<CartItem> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/cart").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the wishlist. Empty on failure.
pub async fn fetch_wishlist() -> Vec<WishlistItem> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/wishlist").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the customer's service requests. Empty on failure.
pub async fn fetch_orders() -> Vec<Order> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/orders").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch stored payment methods. Empty on failure.
pub async fn fetch_payment_methods() -> Vec<PaymentMethod> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/payment_methods").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the saved delivery address, if any.
pub async fn fetch_address() -> Option<SavedAddress> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/address").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the order statistics summary.
pub async fn fetch_statistics() -> Option<StatisticsSummary> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/statistics").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save a delivery address via `POST /api/address`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn save_address(address: &SavedAddress) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/address", address).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(format!("saving address failed: {}", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err("not available on server".to_owned())
    }
}

/// Submit an order review via `POST /api/reviews`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn submit_review(review: &ReviewPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/reviews", review).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(format!("review submission failed: {}", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = review;
        Err("not available on server".to_owned())
    }
}

/// Create a catalog service via `POST /api/services` (admin).
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn create_service(service: &NewService) -> Result<Service, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/api/services", service).await?;
        if !resp.ok() {
            return Err(format!("creating service failed: {}", resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service;
        Err("not available on server".to_owned())
    }
}

/// Update a catalog service via `PUT /api/services/{id}` (admin).
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn update_service(id: i32, service: &NewService) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/services/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(service)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            Err(format!("updating service failed: {}", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, service);
        Err("not available on server".to_owned())
    }
}

/// Update profile details via `POST /api/profile`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn update_profile(username: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "username": username });
        let resp = post_json("/api/profile", &body).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(format!("profile update failed: {}", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `POST /api/change_password`.
///
/// # Errors
///
/// Returns a displayable message on failure.
pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "current": current, "new": new });
        let resp = post_json("/api/change_password", &body).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err("password change rejected".to_owned())
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err("not available on server".to_owned())
    }
}
