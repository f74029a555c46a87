use yew::prelude::*;

use crate::components::booking_popup::SERVICES;
use crate::components::contact_form::ContactForm;

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub on_book: Callback<()>,
}

/// Static page sections the controllers target by id: hero, services, about
/// and contact. Also carries the page-level styles for the nav, the section
/// anchors and the notification banner.
#[function_component(Site)]
pub fn site(props: &SiteProps) -> Html {
    let on_hero_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <main>
            <style>
                {r#"* {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                body {
                    font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                    color: #2d2d2d;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 64px;
                    background: #fff;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
                    z-index: 50;
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1rem;
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: bold;
                    color: #4a90d9;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }
                .nav-link {
                    color: #2d2d2d;
                    text-decoration: none;
                }
                .nav-book-button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #4a90d9;
                    color: #fff;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #2d2d2d;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-menu {
                        display: none;
                    }
                    .nav-menu.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: fixed;
                        inset: 64px 0 0 0;
                        background: rgba(255, 255, 255, 0.98);
                        padding-top: 2rem;
                        z-index: 49;
                    }
                }
                section {
                    padding: 5rem 1rem 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .hero {
                    text-align: center;
                    padding-top: 8rem;
                }
                .hero h1 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }
                .hero p {
                    margin-bottom: 2rem;
                    color: #555;
                }
                .hero-book-btn {
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: #4a90d9;
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .service-card {
                    padding: 1.5rem;
                    border: 1px solid #e3e3e3;
                    border-radius: 10px;
                    text-align: center;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 480px;
                    margin-top: 1.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.6rem;
                    border: 1px solid #ccc;
                    border-radius: 6px;
                    font-size: 1rem;
                }
                .notification {
                    position: fixed;
                    top: 80px;
                    right: 1rem;
                    max-width: 340px;
                    padding: 0.9rem 1.2rem;
                    border-radius: 8px;
                    color: #fff;
                    opacity: 0;
                    transform: translateX(24px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    z-index: 200;
                }
                .notification.show {
                    opacity: 1;
                    transform: translateX(0);
                }
                .notification.success {
                    background: #3f9d5f;
                }
                .notification.error {
                    background: #d1495b;
                }"#}
            </style>

            <section id="home" class="hero">
                <h1>{"Happy Paws Pet Care"}</h1>
                <p>{"Walks, sitting and grooming for the pets of the neighbourhood."}</p>
                <button class="hero-book-btn" onclick={on_hero_book}>
                    {"Book an Appointment"}
                </button>
            </section>

            <section id="services">
                <h2>{"Our Services"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{*service}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about">
                <h2>{"About Us"}</h2>
                <p>
                    {"A small local team of pet lovers. Every booking is handled \
                      personally and confirmed by email or phone."}
                </p>
            </section>

            <section id="contact">
                <h2>{"Get in Touch"}</h2>
                <ContactForm />
            </section>
        </main>
    }
}
