/// Webhook endpoint for booking submissions, typically a Google Apps Script
/// URL backed by a spreadsheet. `None` means online delivery is not set up
/// and bookings stay in local storage only.
#[cfg(debug_assertions)]
pub fn booking_webhook() -> Option<&'static str> {
    None // Development keeps bookings local
}

#[cfg(not(debug_assertions))]
pub fn booking_webhook() -> Option<&'static str> {
    // Paste the deployed Apps Script URL here to enable online delivery
    None
}
