use yew::prelude::*;

/// Progress indicator shown while a page-level fetch is outstanding.
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader" role="status">
            <div class="loader-spinner"></div>
        </div>
    }
}
