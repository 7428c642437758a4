use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::utils::i18n::t;

/// Landing page; booking/search flows live in other parts of the product,
/// this route is the target of the confirmation page's navigation actions.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home-page">
            <h1>{ t("app_title") }</h1>
            <p class="muted">{ t("app_tagline") }</p>
            <Link<Route> classes="btn btn-outline" to={Route::AdminLogin}>
                { t("admin_login") }
            </Link<Route>>
        </div>
    }
}
