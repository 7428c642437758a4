use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/booking/:id")]
    BookingConfirmation { id: String },
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}
