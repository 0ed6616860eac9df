use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::components::reveal::Reveal;
use crate::content::{FAQS, OFFERS, SERVICE_PILLARS};
use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <Reveal>
                    <span class="hero-badge">{"Consent Mode v2 · Server-Side Tagging · DSGVO"}</span>
                    <h1>{"Consent, der Ihre Daten "}<span class="gradient-text">{"nicht kostet"}</span>{"."}</h1>
                    <p class="hero-sub">
                        {"Wir bauen Cookie-Banner und Consent-Setups, die Nutzer akzeptieren, Juristen nicht hassen und Ihre Marketing-Signale intakt lassen."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Booking} classes="primary-button">
                            {"15-Minuten-Gespräch buchen"}
                        </Link<Route>>
                        <Link<Route> to={Route::ComplianceCenter} classes="secondary-button">
                            {"Compliance-Check starten"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>

            <section class="home-pillars">
                <h2>{"Was wir lösen"}</h2>
                <div class="pillar-grid">
                    { for SERVICE_PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                        <Reveal delay_ms={i as u32 * 120} class={classes!("pillar-card")}>
                            <span class="pillar-icon">{pillar.icon}</span>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.description}</p>
                        </Reveal>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="text-link">{"Alle Leistungen ansehen →"}</Link<Route>>
            </section>

            <section class="home-offers">
                <h2>{"Einstiegspakete"}</h2>
                <div class="offer-strip">
                    { for OFFERS.iter().map(|offer| html! {
                        <div class={classes!("offer-chip", offer.bestseller.then(|| "bestseller"))}>
                            <strong>{offer.title}</strong>
                            <span>{offer.price}</span>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Offers} classes="text-link">{"Zu den Angeboten →"}</Link<Route>>
            </section>

            <section class="faq-section">
                <h2>{"Häufige Fragen"}</h2>
                { for FAQS.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </section>

            <style>
                {r#"
                .hero {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 5vw, 4rem);
                    max-width: 900px;
                    margin: 1rem auto;
                }
                .hero-badge {
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                    background: #f5ecfb;
                    color: #6A0DAD;
                    font-size: 0.8rem;
                }
                .hero-sub {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    color: #525252;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .home-pillars, .home-offers, .faq-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .pillar-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .pillar-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.05);
                }
                .offer-strip {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 1.5rem;
                }
                .offer-chip {
                    display: flex;
                    flex-direction: column;
                    padding: 1rem 1.5rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 12px;
                }
                .offer-chip.bestseller {
                    border-color: #FF4FA2;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e5e5;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.2rem 0;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    display: none;
                    color: #525252;
                    padding-bottom: 1rem;
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}
