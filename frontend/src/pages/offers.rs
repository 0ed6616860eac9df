use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Offer, OFFERS};
use crate::Route;

fn offer_card(offer: &Offer) -> Html {
    html! {
        <div class={classes!("offer-card", offer.bestseller.then(|| "bestseller"))}>
            if offer.bestseller {
                <span class="bestseller-badge">{"Bestseller"}</span>
            }
            <h3>{offer.title}</h3>
            <div class="offer-price">{offer.price}</div>
            <p>{offer.description}</p>
            <ul>
                { for offer.features.iter().map(|feature| html! { <li>{"✓ "}{*feature}</li> }) }
            </ul>
            <div class="offer-scope">
                <p><strong>{"Inklusive: "}</strong>{offer.includes}</p>
                <p class="excludes"><strong>{"Nicht enthalten: "}</strong>{offer.excludes}</p>
            </div>
            <Link<Route> to={Route::Booking} classes="primary-button">{offer.cta}</Link<Route>>
        </div>
    }
}

#[function_component(Offers)]
pub fn offers() -> Html {
    html! {
        <div class="offers-page">
            <section class="page-hero">
                <h1>{"Angebote"}</h1>
                <p>{"Fixe Pakete mit klarem Umfang. Kein Projekt-Theater."}</p>
            </section>
            <section class="offer-grid">
                { for OFFERS.iter().map(offer_card) }
            </section>
            <p class="offer-footnote">{"* Preise zzgl. MwSt. Wir liefern technische Umsetzung und Nachweise, keine Rechtsberatung."}</p>
            <style>
                {r#"
                .offer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.5rem;
                }
                .offer-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem 1.5rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 16px;
                    background: #fff;
                }
                .offer-card.bestseller {
                    border: 2px solid #FF4FA2;
                    box-shadow: 0 20px 40px rgba(255, 79, 162, 0.15);
                }
                .bestseller-badge {
                    position: absolute;
                    top: -0.8rem;
                    left: 1.5rem;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    color: #fff;
                    font-size: 0.75rem;
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                }
                .offer-price {
                    font-size: 1.6rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .offer-card ul {
                    list-style: none;
                    padding: 0;
                    flex: 1;
                }
                .offer-scope {
                    font-size: 0.85rem;
                    color: #525252;
                }
                .offer-scope .excludes {
                    color: #a3a3a3;
                }
                .offer-footnote {
                    text-align: center;
                    color: #737373;
                    font-size: 0.8rem;
                    padding: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
