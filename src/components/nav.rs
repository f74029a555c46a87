use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Anchor scroll stops this far above the target so the fixed header does
/// not cover it.
const HEADER_OFFSET: i32 = 80;
/// Viewports wider than this use the desktop layout; the mobile menu closes
/// itself past it.
const MOBILE_BREAKPOINT: f64 = 768.0;

const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("contact", "Contact"),
];

fn scroll_to_section(id: &str) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let target = match window.document().and_then(|d| d.get_element_by_id(id)) {
        Some(target) => target,
        None => return,
    };
    let top = target
        .dyn_ref::<web_sys::HtmlElement>()
        .map_or(0, |e| e.offset_top())
        - HEADER_OFFSET;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top as f64);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

/// Fixed top navigation: hamburger-toggled mobile menu with aria-expanded
/// mirroring, and smooth in-page scrolling with a fixed header offset.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    // Widening past the breakpoint closes the mobile menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.map(|window| {
                    let win = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let width = win.inner_width().ok().and_then(|w| w.as_f64());
                        if width.map_or(false, |w| w > MOBILE_BREAKPOINT) {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Escape closes the menu; listener exists only while it is open
    {
        let menu_open = menu_open.clone();
        let is_open = *menu_open;
        use_effect_with_deps(
            move |open| {
                let mut listener = None;
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let menu_open = menu_open.clone();
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open.set(false);
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
            is_open,
        );
    }

    // Suppress page scroll behind the open mobile menu
    {
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if *open { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                || ()
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Clicking the menu backdrop (not a link) closes it
    let on_menu_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            if let (Some(target), Some(current)) = (e.target(), e.current_target()) {
                if target == current {
                    menu_open.set(false);
                }
            }
        })
    };

    let on_book_click = {
        let menu_open = menu_open.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a
                    href="#home"
                    class="nav-logo"
                    onclick={Callback::from(|e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("home");
                    })}
                >
                    {"Happy Paws"}
                </a>
                <button
                    class="burger-menu"
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={on_menu_click}>
                    { for SECTIONS.iter().map(|(id, label)| {
                        let menu_open = menu_open.clone();
                        let id = *id;
                        html! {
                            <a
                                href={format!("#{}", id)}
                                class="nav-link"
                                onclick={Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    scroll_to_section(id);
                                })}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                    <button class="nav-book-button" onclick={on_book_click}>
                        {"Book Now"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
