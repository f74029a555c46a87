use chrono::Local;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::components::notification::{show_notification, NoticeKind};
use crate::config;
use crate::ledger::{self, BookingRecord};
use crate::schedule;
use crate::submit::{self, Delivery};
use crate::validate;

pub const SERVICES: [&str; 5] = [
    "Dog Walking",
    "Pet Sitting",
    "Grooming",
    "Daycare",
    "Vet Transport",
];

#[derive(Properties, PartialEq)]
pub struct BookingPopupProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Booking overlay: popup visibility, date/time defaults, and the
/// validate -> submit -> settle flow for the booking form. Every path past
/// validation ends in a success notice and a ledger write; the webhook is
/// fire-and-forget.
#[function_component(BookingPopup)]
pub fn booking_popup(props: &BookingPopupProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let notes = use_state(String::new);
    let min_date = use_state(String::new);
    let is_submitting = use_state(|| false);

    // Lock body scroll while open and pre-fill tomorrow / next full hour
    {
        let date = date.clone();
        let time = time.clone();
        let min_date = min_date.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if *open { "hidden" } else { "auto" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                if *open {
                    let now = Local::now().naive_local();
                    let tomorrow = schedule::tomorrow(now);
                    min_date.set(tomorrow.clone());
                    date.set(tomorrow);
                    time.set(schedule::next_full_hour(now));
                }
                || ()
            },
            props.open,
        );
    }

    // Escape closes the popup; the listener only exists while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let mut listener = None;
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        listener = Some((document, callback));
                    }
                }
                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.open,
        );
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Backdrop only, not the dialog content
            if let (Some(target), Some(current)) = (e.target(), e.current_target()) {
                if target == current {
                    on_close.emit(());
                }
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let date = date.clone();
        let time = time.clone();
        let notes = notes.clone();
        let is_submitting = is_submitting.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!("Starting booking submission");

            let record = BookingRecord::new(
                name.trim().to_string(),
                email.trim().to_string(),
                phone.trim().to_string(),
                (*service).clone(),
                (*date).clone(),
                (*time).clone(),
                notes.trim().to_string(),
            );

            let required = [
                ("name", record.name.as_str()),
                ("email", record.email.as_str()),
                ("phone", record.phone.as_str()),
                ("service", record.service.as_str()),
                ("date", record.date.as_str()),
                ("time", record.time.as_str()),
                ("notes", record.notes.as_str()),
            ];
            if let Some(field) = validate::first_missing(&required) {
                log!("Booking rejected, empty field:", field);
                show_notification("Please fill in all required fields.", NoticeKind::Error);
                return;
            }

            is_submitting.set(true);

            let fields = (
                name.clone(),
                email.clone(),
                phone.clone(),
                service.clone(),
                date.clone(),
                time.clone(),
                notes.clone(),
            );
            let is_submitting = is_submitting.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let reset = move || {
                    fields.0.set(String::new());
                    fields.1.set(String::new());
                    fields.2.set(String::new());
                    fields.3.set(String::new());
                    fields.4.set(String::new());
                    fields.5.set(String::new());
                    fields.6.set(String::new());
                };
                match config::booking_webhook() {
                    None => {
                        log!("No booking webhook configured, keeping booking local");
                        TimeoutFuture::new(1_500).await;
                        ledger::append_booking(record);
                        show_notification(
                            "Booking saved locally! (online booking not configured)",
                            NoticeKind::Success,
                        );
                        reset();
                        is_submitting.set(false);
                        on_close.emit(());
                    }
                    Some(url) => {
                        let delivery = submit::send_booking(url, &record).await;
                        ledger::append_booking(record);
                        match delivery {
                            Delivery::Attempted => show_notification(
                                "Booking submitted! We'll confirm your appointment shortly.",
                                NoticeKind::Success,
                            ),
                            Delivery::Failed => show_notification(
                                "Booking saved locally! (network issue reaching the booking service)",
                                NoticeKind::Success,
                            ),
                        }
                        reset();
                        is_submitting.set(false);
                        TimeoutFuture::new(2_000).await;
                        on_close.emit(());
                    }
                }
            });
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="booking-popup" onclick={on_overlay_click}>
            <style>
                {r#".booking-popup {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                    padding: 1rem;
                }
                .popup-content {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 480px;
                    max-height: 90vh;
                    overflow-y: auto;
                    position: relative;
                }
                .popup-content h2 {
                    margin-bottom: 1rem;
                }
                .popup-content form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .popup-content input,
                .popup-content select,
                .popup-content textarea {
                    padding: 0.6rem;
                    border: 1px solid #ccc;
                    border-radius: 6px;
                    font-size: 1rem;
                }
                .close-btn {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .submit-btn {
                    padding: 0.75rem;
                    border: none;
                    border-radius: 6px;
                    background: #4a90d9;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .submit-btn:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }"#}
            </style>
            <div class="popup-content">
                <button class="close-btn" aria-label="Close booking form" onclick={on_close_click}>
                    {"\u{00d7}"}
                </button>
                <h2>{"Book an Appointment"}</h2>
                <form onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={(*name).clone()}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                    <input
                        type="email"
                        placeholder="Email Address"
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="tel"
                        placeholder="Phone Number"
                        value={(*phone).clone()}
                        onchange={let phone = phone.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        }}
                    />
                    <select onchange={let service = service.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        service.set(select.value());
                    }}>
                        <option value="" selected={service.is_empty()}>{"Select a Service"}</option>
                        { for SERVICES.iter().map(|s| html! {
                            <option value={*s} selected={*service == *s}>{*s}</option>
                        }) }
                    </select>
                    <input
                        type="date"
                        value={(*date).clone()}
                        min={(*min_date).clone()}
                        onchange={let date = date.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            date.set(input.value());
                        }}
                    />
                    <input
                        type="time"
                        value={(*time).clone()}
                        onchange={let time = time.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            time.set(input.value());
                        }}
                    />
                    <textarea
                        placeholder="Tell us about your pet"
                        rows="3"
                        value={(*notes).clone()}
                        onchange={let notes = notes.clone(); move |e: Event| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            notes.set(area.value());
                        }}
                    />
                    <button type="submit" class="submit-btn" disabled={*is_submitting}>
                        if *is_submitting {
                            <span class="btn-loading">{"Booking..."}</span>
                        } else {
                            <span class="btn-text">{"Book Appointment"}</span>
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
