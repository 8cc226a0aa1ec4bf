//! Page components, one per entry in the route table.

pub mod about;
pub mod address;
pub mod cart;
pub mod confirm_order;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod payment;
pub mod profile;
pub mod review;
pub mod service_add;
pub mod service_edit;
pub mod signin;
pub mod signup;
pub mod statistics;
pub mod wishlist;
