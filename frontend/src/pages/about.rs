use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::CONTACT_EMAIL;
use crate::Route;

const PRINCIPLES: [(&str, &str); 3] = [
    ("Technik vor Theater", "Wir reparieren Consent-Setups, statt Folien darüber zu schreiben."),
    ("Nachweisbar", "Jede Änderung endet in einem Proof-Stack, den Ihr Team und Ihre Anwälte lesen können."),
    ("Fair zu Nutzern", "„Alle ablehnen“ ist gleichwertig. Gute Consent-Raten entstehen durch Vertrauen, nicht durch Tricks."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"Über uns"}</h1>
                <p>
                    {"ConsentWerft ist ein kleines Team aus Tracking-Engineers und UX-Designern aus dem DACH-Raum. Wir verbinden Marketing-Messbarkeit mit Datenschutz, technisch sauber und ohne Rechtsberatung."}
                </p>
            </section>
            <section class="principles">
                { for PRINCIPLES.iter().enumerate().map(|(i, (title, text))| html! {
                    <Reveal delay_ms={i as u32 * 150} class={classes!("principle-card")}>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </section>
            <section class="page-cta">
                <p>{"Fragen? Schreiben Sie uns an "}<a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></p>
                <Link<Route> to={Route::Booking} classes="primary-button">{"Kennenlernen buchen"}</Link<Route>>
            </section>
            <style>
                {r#"
                .principles {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .principle-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fafafa;
                }
                "#}
            </style>
        </div>
    }
}
