use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// localStorage key holding the bookings list.
pub const BOOKINGS_KEY: &str = "petBookings";
/// localStorage key holding the contact messages list.
pub const CONTACTS_KEY: &str = "petContacts";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub timestamp: String,
    pub status: String,
}

impl BookingRecord {
    /// Stamps the record with the current instant and the initial "New"
    /// status. Records are never mutated after this.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone: String,
        service: String,
        date: String,
        time: String,
        notes: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            service,
            date,
            time,
            notes,
            timestamp: Utc::now().to_rfc3339(),
            status: "New".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactRecord {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Decodes a stored ledger value. Absent or malformed values fall back to an
/// empty list; a corrupted ledger must never break a submission.
pub fn parse_records<T: DeserializeOwned>(raw: Option<String>) -> Vec<T> {
    raw.and_then(|value| serde_json::from_str(&value).ok())
        .unwrap_or_default()
}

/// Whole-list read-modify-write append. Storage being unavailable is a silent
/// skip; two tabs appending at once can lose an update, which is accepted.
fn append<T: Serialize + DeserializeOwned>(key: &str, record: T) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    let storage = match storage {
        Some(storage) => storage,
        None => return,
    };
    let mut records: Vec<T> = parse_records(storage.get_item(key).ok().flatten());
    records.push(record);
    if let Ok(serialized) = serde_json::to_string(&records) {
        let _ = storage.set_item(key, &serialized);
    }
}

pub fn append_booking(record: BookingRecord) {
    append(BOOKINGS_KEY, record);
}

pub fn append_contact(record: ContactRecord) {
    append(CONTACTS_KEY, record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn booking() -> BookingRecord {
        BookingRecord::new(
            "Ada".into(),
            "ada@example.com".into(),
            "555-0101".into(),
            "Dog Walking".into(),
            "2026-08-31".into(),
            "15:00".into(),
            "Two golden retrievers".into(),
        )
    }

    #[test]
    fn missing_value_parses_to_empty_list() {
        let records: Vec<BookingRecord> = parse_records(None);
        assert!(records.is_empty());
    }

    #[test]
    fn corrupt_value_parses_to_empty_list() {
        let records: Vec<BookingRecord> = parse_records(Some("not valid json".into()));
        assert!(records.is_empty());
        let records: Vec<ContactRecord> = parse_records(Some("{\"half\":".into()));
        assert!(records.is_empty());
    }

    #[test]
    fn stored_list_round_trips() {
        let stored = serde_json::to_string(&vec![booking()]).unwrap();
        let records: Vec<BookingRecord> = parse_records(Some(stored));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service, "Dog Walking");
    }

    #[test]
    fn new_booking_is_stamped_new_with_current_timestamp() {
        let start = Utc::now();
        let record = booking();
        assert_eq!(record.status, "New");
        let stamped = DateTime::parse_from_rfc3339(&record.timestamp).unwrap();
        assert!(stamped >= start);
    }

    #[test]
    fn contact_record_carries_a_parseable_timestamp() {
        let record = ContactRecord::new(
            "Ada".into(),
            "ada@example.com".into(),
            "Do you board cats?".into(),
        );
        assert!(DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }
}
