use dioxus::prelude::*;

use super::dashboard::DashboardView;
use super::login::LoginView;
use super::not_found::NotFoundView;
use super::product_detail::ProductDetailView;
use super::profile::ProfileView;
use super::register_warranty::RegisterWarrantyView;
use super::role_selection::RoleSelectionView;
use super::service_history::ServiceHistoryView;
use super::service_request::ServiceRequestView;
use super::session_state::{load_session, use_session};
use super::toast::{provide_toasts, ToastHost};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    RoleSelection {},
    #[route("/login")]
    Login {},
    #[layout(RequireAuth)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/product/:id")]
    ProductDetail { id: String },
    #[route("/register-warranty")]
    RegisterWarranty {},
    #[route("/service-request")]
    ServiceRequest {},
    #[route("/service-history")]
    ServiceHistory {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

static STYLESHEET: Asset = asset!("/assets/aftercare.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(load_session()));
    provide_toasts();

    rsx! {
        document::Stylesheet { href: STYLESHEET }
        Router::<Route> {}
        ToastHost {}
    }
}

/// Layout for the protected routes: a single authenticated-flag check,
/// no token or expiry semantics. Unauthenticated visits land on /login.
#[component]
fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.read().authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! { Outlet::<Route> {} }
}

/// Route component: the role landing screen.
#[component]
fn RoleSelection() -> Element {
    rsx! { RoleSelectionView {} }
}

/// Route component: mobile-OTP login.
#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

/// Route component: product list with search.
#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

/// Route component: a single product's warranty details by id from the URL.
#[component]
fn ProductDetail(id: String) -> Element {
    rsx! { ProductDetailView { id } }
}

#[component]
fn RegisterWarranty() -> Element {
    rsx! { RegisterWarrantyView {} }
}

#[component]
fn ServiceRequest() -> Element {
    rsx! { ServiceRequestView {} }
}

#[component]
fn ServiceHistory() -> Element {
    rsx! { ServiceHistoryView {} }
}

#[component]
fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundView { segments } }
}
