use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SERVICE_PILLARS;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Leistungen"}</h1>
                <p>{"Vier Bausteine, ein Ziel: Consent, der rechtlich hält und Ihre Daten nicht kostet."}</p>
            </section>

            { for SERVICE_PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                <Reveal class={classes!("service-row", (i % 2 == 1).then(|| "reversed"))}>
                    <div class="service-text">
                        <span class="pillar-icon">{pillar.icon}</span>
                        <h2>{pillar.title}</h2>
                        <p>{pillar.description}</p>
                        <ul>
                            { for pillar.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
                        </ul>
                        <p class="service-outcome"><strong>{"Ergebnis: "}</strong>{pillar.outcome}</p>
                    </div>
                    <img src={pillar.image} alt={pillar.title} loading="lazy" />
                </Reveal>
            }) }

            <section class="page-cta">
                <h2>{"Welcher Baustein passt zu Ihnen?"}</h2>
                <Link<Route> to={Route::Booking} classes="primary-button">{"Gespräch buchen"}</Link<Route>>
            </section>

            <style>
                {r#"
                .page-hero {
                    text-align: center;
                    padding: 8rem 2rem 3rem;
                }
                .page-hero p {
                    color: #525252;
                }
                .service-row {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                }
                .service-row.reversed {
                    flex-direction: row-reverse;
                }
                .service-row img {
                    width: 45%;
                    border-radius: 16px;
                    object-fit: cover;
                }
                .service-text ul {
                    list-style: none;
                    padding: 0;
                }
                .service-outcome {
                    color: #6A0DAD;
                }
                .page-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }
                @media (max-width: 768px) {
                    .service-row, .service-row.reversed {
                        flex-direction: column;
                    }
                    .service-row img {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
