//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`, `checkout`, `review`) so
//! individual components can depend on small focused models. Each model is
//! plain data with pure methods; components wrap them in `RwSignal`s.

pub mod auth;
pub mod checkout;
pub mod review;
pub mod ui;
