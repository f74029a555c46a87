use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Shows a transient notice banner. Only one is visible at a time; any
/// existing one is removed immediately rather than queued. The banner slides
/// in shortly after insertion, holds for 5 seconds, then fades out and is
/// removed from the document. Cannot fail from the caller's perspective:
/// every missing DOM collaborator degrades to a no-op.
pub fn show_notification(message: &str, kind: NoticeKind) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Ok(Some(existing)) = document.query_selector(".notification") {
        existing.remove();
    }

    let banner = match document.create_element("div") {
        Ok(element) => element,
        Err(_) => return,
    };
    banner.set_class_name(&format!("notification {}", kind.class()));
    let _ = banner.set_attribute("role", "alert");
    let _ = banner.set_attribute("aria-live", "assertive");

    if let (Ok(content), Ok(text)) = (
        document.create_element("div"),
        document.create_element("span"),
    ) {
        content.set_class_name("notification-content");
        text.set_text_content(Some(message));
        let _ = content.append_child(&text);
        let _ = banner.append_child(&content);
    }

    let body = match document.body() {
        Some(body) => body,
        None => return,
    };
    let _ = body.append_child(&banner);

    // Let the insertion paint once before the slide-in class lands
    {
        let banner = banner.clone();
        Timeout::new(10, move || {
            let _ = banner.class_list().add_1("show");
        })
        .forget();
    }

    Timeout::new(5_000, move || {
        let _ = banner.class_list().remove_1("show");
        // Matches the 300ms CSS fade
        Timeout::new(300, move || banner.remove()).forget();
    })
    .forget();
}
