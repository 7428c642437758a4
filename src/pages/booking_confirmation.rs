use std::cell::Cell;
use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loader, Message};
use crate::models::Ticket;
use crate::routes::Route;
use crate::services::ApiClient;
use crate::utils::datetime::format_date_time;
use crate::utils::i18n::t;

/// Mutually exclusive render states of the confirmation page.
#[derive(Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded(Box<Ticket>),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct BookingConfirmationProps {
    /// Ticket identifier from the /booking/:id path segment.
    pub id: String,
}

#[function_component(BookingConfirmationPage)]
pub fn booking_confirmation_page(props: &BookingConfirmationProps) -> Html {
    let state = use_state(|| FetchState::Loading);
    let navigator = use_navigator().expect("router context");

    // One fetch per identifier value. The cancellation flag makes a result
    // that arrives after unmount or after the id changed a no-op, so the
    // newest identifier always wins.
    {
        let state = state.clone();
        use_effect_with(props.id.clone(), move |id| {
            state.set(FetchState::Loading);

            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();
            let id = id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_ticket_by_id(&id).await;
                if guard.get() {
                    log::debug!("Stale ticket fetch for {} dropped", id);
                    return;
                }
                match result {
                    Ok(ticket) => state.set(FetchState::Loaded(Box::new(ticket))),
                    Err(e) => {
                        log::error!("❌ Failed to load ticket {}: {}", id, e);
                        state.set(FetchState::Failed(t("booking_load_failed").to_string()));
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Home))
    };

    let print_ticket = Callback::from(|_| {
        if let Some(win) = window() {
            let _ = win.print();
        }
    });

    html! {
        <div class="page booking-page">
            <button class="btn btn-light" onclick={go_home.clone()}>
                { t("back_to_home") }
            </button>

            {
                match &*state {
                    FetchState::Loading => html! { <Loader /> },
                    FetchState::Failed(message) => html! {
                        <Message variant="danger">{ message.clone() }</Message>
                    },
                    FetchState::Loaded(ticket) => html! {
                        <>
                            <Message variant="success">{ t("booking_success") }</Message>
                            { ticket_card(ticket) }
                            <div class="booking-actions">
                                <button class="btn btn-primary" onclick={print_ticket}>
                                    { t("print_ticket") }
                                </button>
                                <button class="btn btn-outline" onclick={go_home}>
                                    { t("book_another_flight") }
                                </button>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}

fn ticket_card(ticket: &Ticket) -> Html {
    let flight = &ticket.flight;

    html! {
        <div class="ticket-card">
            <div class="ticket-header">
                <h4>{ t("booking_confirmation") }</h4>
            </div>
            <div class="ticket-body">
                <div class="ticket-row">
                    <div class="ticket-field">
                        <h6>{ t("ticket_id") }</h6>
                        <p class="emphasis">{ &ticket.ticket_id }</p>
                    </div>
                    <div class="ticket-field">
                        <h6>{ t("seat_number") }</h6>
                        <p class="emphasis">{ &ticket.seat_number }</p>
                    </div>
                </div>

                <div class="ticket-row">
                    <div class="ticket-field">
                        <h6>{ t("passenger_name") }</h6>
                        <p>{ format!("{} {}", ticket.passenger_name, ticket.passenger_surname) }</p>
                    </div>
                    <div class="ticket-field">
                        <h6>{ t("email") }</h6>
                        <p>{ &ticket.passenger_email }</p>
                    </div>
                </div>

                <hr />
                <h5>{ t("flight_details") }</h5>

                <div class="ticket-row">
                    <div class="ticket-field">
                        <h6>{ t("flight_number") }</h6>
                        <p>{ &flight.flight_id }</p>
                    </div>
                    <div class="ticket-field">
                        <h6>{ t("price") }</h6>
                        <p class="price">{ format!("{} ₺", flight.price) }</p>
                    </div>
                </div>

                <div class="ticket-row">
                    <div class="ticket-field">
                        <h6>{ t("from") }</h6>
                        <p>{ &flight.from_city.city_name }</p>
                        <p class="muted">{ format_date_time(&flight.departure_time) }</p>
                    </div>
                    <div class="ticket-field">
                        <h6>{ t("to") }</h6>
                        <p>{ &flight.to_city.city_name }</p>
                        <p class="muted">{ format_date_time(&flight.arrival_time) }</p>
                    </div>
                </div>

                <div class="ticket-row">
                    <div class="ticket-field">
                        <h6>{ t("booking_date") }</h6>
                        <p>{ format_date_time(&ticket.booking_date) }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
