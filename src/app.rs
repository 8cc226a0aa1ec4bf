//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, address::AddressPage, cart::CartPage, confirm_order::ConfirmOrderPage,
    contact::ContactPage, dashboard::DashboardPage, home::HomePage, payment::PaymentPage,
    profile::ProfilePage, review::ReviewPage, service_add::ServiceAddPage,
    service_edit::ServiceEditPage, signin::SigninPage, signup::SignupPage,
    statistics::StatisticsPage, wishlist::WishlistPage,
};
use crate::router::guard::Guarded;
use crate::router::routes;
use crate::router::sink::{DocumentSink, SharedSink};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=routes::DEFAULT_DESCRIPTION/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the presentation sink, and sets
/// up client-side routing with every view behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context::<SharedSink>(Arc::new(DocumentSink));

    view! {
        <Stylesheet id="leptos" href="/pkg/frenzy.css"/>
        <Title text=routes::DEFAULT_TITLE/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=routes::HOME><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("about")
                        view=|| view! { <Guarded route=routes::ABOUT><AboutPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("contactus")
                        view=|| view! { <Guarded route=routes::CONTACT><ContactPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("signin")
                        view=|| view! { <Guarded route=routes::SIGNIN><SigninPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <Guarded route=routes::SIGNUP><SignupPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! { <Guarded route=routes::DASHBOARD><DashboardPage/></Guarded> }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded route=routes::PROFILE><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("cart")
                        view=|| view! { <Guarded route=routes::CART><CartPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("address")
                        view=|| view! { <Guarded route=routes::ADDRESS><AddressPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("payment")
                        view=|| view! { <Guarded route=routes::PAYMENT><PaymentPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("confirmorder")
                        view=|| {
                            view! {
                                <Guarded route=routes::CONFIRM_ORDER>
                                    <ConfirmOrderPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("review")
                        view=|| view! { <Guarded route=routes::REVIEW><ReviewPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("wishlist")
                        view=|| view! { <Guarded route=routes::WISHLIST><WishlistPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("statistics")
                        view=|| {
                            view! { <Guarded route=routes::STATISTICS><StatisticsPage/></Guarded> }
                        }
                    />
                    <Route
                        path=StaticSegment("service")
                        view=|| {
                            view! { <Guarded route=routes::SERVICE_ADD><ServiceAddPage/></Guarded> }
                        }
                    />
                    <Route
                        path=StaticSegment("scruitny")
                        view=|| {
                            view! {
                                <Guarded route=routes::SERVICE_EDIT>
                                    <ServiceEditPage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
