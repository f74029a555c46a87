use gloo_console::log;
use gloo_net::http::Request;
use web_sys::RequestMode;

use crate::ledger::BookingRecord;

/// What came back from a fire-and-forget send. The response is opaque
/// (no-cors), so `Attempted` means the request left the browser, not that the
/// sheet accepted it. Callers treat both variants the same apart from wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Attempted,
    Failed,
}

/// The seven fields the spreadsheet endpoint expects, form-encoded.
/// Timestamp and status stay local.
pub fn form_encode(record: &BookingRecord) -> String {
    let fields = [
        ("name", &record.name),
        ("email", &record.email),
        ("phone", &record.phone),
        ("service", &record.service),
        ("date", &record.date),
        ("time", &record.time),
        ("notes", &record.notes),
    ];
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Best-effort POST to the booking webhook. Never propagates an error; the
/// caller falls back to the local ledger either way.
pub async fn send_booking(url: &str, record: &BookingRecord) -> Delivery {
    let request = Request::post(url)
        .mode(RequestMode::NoCors)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_encode(record));
    match request.send().await {
        Ok(_) => {
            // Opaque response, deliberately not inspected
            log!("Booking request sent to webhook");
            Delivery::Attempted
        }
        Err(e) => {
            log!("Booking webhook send failed:", e.to_string());
            Delivery::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_encode_emits_the_seven_wire_fields() {
        let record = BookingRecord::new(
            "Ada".into(),
            "ada@example.com".into(),
            "555-0101".into(),
            "Pet Sitting".into(),
            "2026-08-31".into(),
            "09:00".into(),
            "Key under the mat".into(),
        );
        let body = form_encode(&record);
        assert_eq!(
            body,
            "name=Ada&email=ada%40example.com&phone=555-0101&service=Pet%20Sitting\
             &date=2026-08-31&time=09%3A00&notes=Key%20under%20the%20mat"
        );
        assert!(!body.contains("timestamp"));
        assert!(!body.contains("status"));
    }

    #[test]
    fn form_encode_escapes_separators_in_values() {
        let record = BookingRecord::new(
            "A&B".into(),
            "a@b.c".into(),
            "1".into(),
            "Grooming".into(),
            "2026-09-01".into(),
            "10:00".into(),
            "needs=care".into(),
        );
        let body = form_encode(&record);
        assert!(body.contains("name=A%26B"));
        assert!(body.contains("notes=needs%3Dcare"));
    }
}
