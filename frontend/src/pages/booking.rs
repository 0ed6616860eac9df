use yew::prelude::*;

use crate::components::booking_form::BookingForm;

#[function_component(Booking)]
pub fn booking() -> Html {
    html! {
        <div class="booking-page">
            <section class="page-hero">
                <h1>{"15-Minuten-Gespräch buchen"}</h1>
                <p>{"Kostenlos und unverbindlich. Wir schauen gemeinsam auf Ihr Consent-Setup und nennen die nächsten Schritte."}</p>
            </section>
            <section class="booking-container">
                <BookingForm />
            </section>
            <style>
                {r#"
                .booking-container {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 0 2rem 6rem;
                }
                "#}
            </style>
        </div>
    }
}
