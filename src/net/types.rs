//! Wire types shared with the Frenzy backend API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Stock avatar served when an account has no uploaded picture.
const DEFAULT_PROFILE_PICTURE: &str = "/profile_pictures/profile.png";

/// Account role as stored by the backend.
///
/// Unrecognized role strings deserialize as `Customer` so a newer backend
/// cannot strand the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    #[default]
    Customer,
    Professional,
    Admin,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "professional" => Role::Professional,
            "admin" => Role::Admin,
            _ => Role::Customer,
        }
    }
}

/// The authenticated account record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub image_file: String,
    #[serde(default)]
    pub is_blocked: bool,
}

impl User {
    /// URL of the account's profile picture, falling back to the stock one.
    pub fn image_url(&self) -> String {
        if self.image_file.is_empty() {
            DEFAULT_PROFILE_PICTURE.to_owned()
        } else {
            format!("/profile_pictures/{}", self.image_file)
        }
    }
}

/// Body of `GET /api/current_user`. A `null` user means no session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub user: Option<User>,
}

/// A service offered in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: f64,
    /// Estimated duration in minutes.
    #[serde(default)]
    pub time_required: Option<i32>,
    #[serde(default)]
    pub category: String,
}

/// Payload for creating a catalog service (admin).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub time_required: Option<i32>,
    pub category: String,
}

/// A line in the shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i32,
    pub service_id: i32,
    pub name: String,
    pub base_price: f64,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

/// A wishlisted service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i32,
    pub service_id: i32,
    pub name: String,
    pub base_price: f64,
}

/// A service request the customer has placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub service_name: String,
    pub status: String,
    #[serde(default)]
    pub scheduled_date: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// A stored payment method, truncated to display-safe fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i32,
    pub method_type: String,
    #[serde(default)]
    pub card_last_four: Option<String>,
    #[serde(default)]
    pub upi_id: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl PaymentMethod {
    /// One-line label for pickers and summaries.
    pub fn label(&self) -> String {
        match self.method_type.as_str() {
            "credit_card" => {
                let last_four = self.card_last_four.as_deref().unwrap_or("????");
                format!("Card ending {last_four}")
            }
            "upi" => self
                .upi_id
                .clone()
                .unwrap_or_else(|| "UPI".to_owned()),
            "bank_account" => self
                .bank_name
                .clone()
                .unwrap_or_else(|| "Bank account".to_owned()),
            other => other.to_owned(),
        }
    }
}

/// The customer's saved delivery address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub pin_code: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Payload for submitting an order review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub service_request_id: i32,
    pub rating: u8,
    pub comment: String,
}

/// Aggregate order figures shown on the statistics page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_requests: u32,
    pub completed: u32,
    pub pending: u32,
    pub total_spent: f64,
}
