use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{show_notification, NoticeKind};
use crate::ledger::{self, ContactRecord};
use crate::validate;

/// Contact form flow: presence + email-shape validation, a simulated send
/// delay (there is no remote endpoint for this form yet), then the local
/// ledger write and a success notice.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let is_sending = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let is_sending = is_sending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let record = ContactRecord::new(
                name.trim().to_string(),
                email.trim().to_string(),
                message.trim().to_string(),
            );

            let required = [
                ("name", record.name.as_str()),
                ("email", record.email.as_str()),
                ("message", record.message.as_str()),
            ];
            if validate::first_missing(&required).is_some() {
                show_notification("Please fill in all required fields.", NoticeKind::Error);
                return;
            }
            if !validate::is_valid_email(&record.email) {
                show_notification("Please enter a valid email address.", NoticeKind::Error);
                return;
            }

            is_sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                // Simulated send, replaced with a real call once the contact
                // endpoint exists
                log!("Simulating contact form submission");
                TimeoutFuture::new(1_000).await;

                ledger::append_contact(record);
                show_notification(
                    "Thank you for your message! We will get back to you within 24 hours.",
                    NoticeKind::Success,
                );
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                is_sending.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                name="contactName"
                placeholder="Your Name"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                name="contactEmail"
                placeholder="Email Address"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <textarea
                name="contactMessage"
                placeholder="How can we help?"
                rows="5"
                value={(*message).clone()}
                onchange={let message = message.clone(); move |e: Event| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(area.value());
                }}
            />
            <button type="submit" class="submit-btn" disabled={*is_sending}>
                { if *is_sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
