use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Message;
use crate::routes::Route;
use crate::stores::SessionHandle;
use crate::utils::i18n::t;

/// Redirect target of the login flow. Reads the stored session through the
/// same repository the login page writes it with.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session store context");
    let logged_in = use_memo((), move |_| session.get().is_some());

    html! {
        <div class="page dashboard-page">
            <h2>{ t("admin_dashboard") }</h2>
            if *logged_in {
                <Message variant="success">{ t("dashboard_welcome") }</Message>
            } else {
                <Message variant="danger">{ t("dashboard_not_logged_in") }</Message>
                <Link<Route> classes="btn btn-primary" to={Route::AdminLogin}>
                    { t("go_to_login") }
                </Link<Route>>
            }
        </div>
    }
}
