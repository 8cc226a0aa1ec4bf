//! Static route table.
//!
//! Every routable view declares its path, display metadata, and at most
//! one access requirement. The table is compiled in and immutable.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access requirement a route declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including anonymous visitors.
    #[default]
    Public,
    /// Any signed-in account.
    RequiresAuthenticated,
    /// Admin accounts only.
    RequiresAdmin,
    /// Anonymous visitors only (sign-in/sign-up).
    RequiresGuestOnly,
}

/// Static description of a routable view.
#[derive(Clone, Copy, Debug)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub access: Access,
}

impl RouteMeta {
    /// Document title for this view, falling back to the app default.
    pub fn display_title(&self) -> &'static str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }

    /// Meta description for this view, falling back to the app default.
    pub fn display_description(&self) -> &'static str {
        self.description.unwrap_or(DEFAULT_DESCRIPTION)
    }
}

pub const DEFAULT_TITLE: &str = "Frenzy";
pub const DEFAULT_DESCRIPTION: &str = "The household services app";

/// Where failed authentication checks land.
pub const SIGNIN_PATH: &str = "/signin";
/// Where failed admin and guest-only checks land.
pub const PROFILE_PATH: &str = "/profile";
/// Where blocked accounts land.
pub const ROOT_PATH: &str = "/";

pub const HOME: RouteMeta = RouteMeta {
    path: "/",
    name: "home",
    title: Some("Household Services -Frenzy"),
    description: Some("Home page of Frenzy the household services app"),
    access: Access::Public,
};

pub const ABOUT: RouteMeta = RouteMeta {
    path: "/about",
    name: "about",
    title: Some("About Us -Frenzy"),
    description: Some("Explore how Frenzy the household app was incepted"),
    access: Access::Public,
};

pub const CONTACT: RouteMeta = RouteMeta {
    path: "/contactus",
    name: "contactus",
    title: Some("Contact Us -Frenzy"),
    description: Some("Get your queries answered swiftly at the Frenzy support page"),
    access: Access::Public,
};

pub const SIGNIN: RouteMeta = RouteMeta {
    path: "/signin",
    name: "signin",
    title: Some("Signin -Frenzy"),
    description: Some("Login to your existing account in the Frenzy app"),
    access: Access::RequiresGuestOnly,
};

pub const SIGNUP: RouteMeta = RouteMeta {
    path: "/signup",
    name: "signup",
    title: Some("Signup -Frenzy"),
    description: Some("Register a new account in the Frenzy app"),
    access: Access::RequiresGuestOnly,
};

pub const DASHBOARD: RouteMeta = RouteMeta {
    path: "/dashboard",
    name: "dashboard",
    title: Some("Dashboard"),
    description: Some("You have reached your dashboard at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const PROFILE: RouteMeta = RouteMeta {
    path: "/profile",
    name: "profile",
    title: Some("Profile"),
    description: Some("View your profile, previous orders and wishlist at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const CART: RouteMeta = RouteMeta {
    path: "/cart",
    name: "cart",
    title: Some("Services Cart"),
    description: Some("You are visiting your cart at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const ADDRESS: RouteMeta = RouteMeta {
    path: "/address",
    name: "address",
    title: Some("Cart-Address"),
    description: Some("Provide your address for delivery of the items in your cart"),
    access: Access::RequiresAuthenticated,
};

pub const PAYMENT: RouteMeta = RouteMeta {
    path: "/payment",
    name: "payment",
    title: Some("Cart-Payment"),
    description: Some("Provide your payment details for the items in your cart"),
    access: Access::RequiresAuthenticated,
};

pub const CONFIRM_ORDER: RouteMeta = RouteMeta {
    path: "/confirmorder",
    name: "confirmorder",
    title: Some("Order Status"),
    description: Some("View the status of the order you placed at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const REVIEW: RouteMeta = RouteMeta {
    path: "/review",
    name: "review",
    title: Some("Order Review"),
    description: Some("Provide a review for the order you placed with us"),
    access: Access::RequiresAuthenticated,
};

pub const WISHLIST: RouteMeta = RouteMeta {
    path: "/wishlist",
    name: "wishlist",
    title: Some("Services Wishlist"),
    description: Some("You are visiting your wishlist at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const STATISTICS: RouteMeta = RouteMeta {
    path: "/statistics",
    name: "statistics",
    title: Some("View statistics -Frenzy"),
    description: Some("View your statistics regarding orders at Frenzy"),
    access: Access::RequiresAuthenticated,
};

pub const SERVICE_ADD: RouteMeta = RouteMeta {
    path: "/service",
    name: "service",
    title: Some("Add a new service"),
    description: Some("Provide details for adding a new service to the Frenzy app"),
    access: Access::RequiresAdmin,
};

pub const SERVICE_EDIT: RouteMeta = RouteMeta {
    path: "/scruitny",
    name: "scruitny",
    title: Some("Edit existing service"),
    description: Some("Change price, name and other details of an existing service"),
    access: Access::RequiresAdmin,
};

/// Every routable view, in navigation-menu order.
pub static ROUTES: [RouteMeta; 16] = [
    HOME,
    ABOUT,
    CONTACT,
    SIGNIN,
    SIGNUP,
    DASHBOARD,
    PROFILE,
    CART,
    ADDRESS,
    PAYMENT,
    CONFIRM_ORDER,
    REVIEW,
    WISHLIST,
    STATISTICS,
    SERVICE_ADD,
    SERVICE_EDIT,
];

/// Look up a route by its exact path.
pub fn by_path(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|r| r.path == path)
}
