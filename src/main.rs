use log::{info, Level};
use yew::prelude::*;

mod config;
mod ledger;
mod schedule;
mod submit;
mod validate;
mod components {
    pub mod booking_popup;
    pub mod contact_form;
    pub mod nav;
    pub mod notification;
    pub mod site;
}

use components::booking_popup::BookingPopup;
use components::nav::Nav;
use components::site::Site;

#[function_component]
fn App() -> Html {
    // Popup state lives here so the nav, the hero button and the popup all
    // see the same flag instead of sharing module globals
    let popup_open = use_state(|| false);

    let open_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_| popup_open.set(true))
    };
    let close_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_| popup_open.set(false))
    };

    html! {
        <>
            <Nav on_book={open_popup.clone()} />
            <Site on_book={open_popup} />
            <BookingPopup open={*popup_open} on_close={close_popup} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting pet care site");
    yew::Renderer::<App>::new().render();
}
