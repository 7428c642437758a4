use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AdminDashboardPage, BookingConfirmationPage, HomePage, LoginPage};
use crate::routes::Route;
use crate::stores::{LocalSessionStore, SessionHandle};
use crate::utils::i18n::t;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::BookingConfirmation { id } => html! { <BookingConfirmationPage {id} /> },
        Route::AdminLogin => html! { <LoginPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::NotFound => html! {
            <div class="page not-found">
                <h2>{ t("not_found") }</h2>
                <Link<Route> to={Route::Home}>{ t("back_to_home") }</Link<Route>>
            </div>
        },
    }
}

/// Root component: session store context + browser routing.
#[function_component(App)]
pub fn app() -> Html {
    // One store instance for the whole app; pages reach it through context so
    // tests can swap in an in-memory fake.
    let session = use_memo((), |_| SessionHandle::new(Rc::new(LocalSessionStore)));

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionHandle>>
    }
}
