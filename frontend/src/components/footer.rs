use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::consent::ConsentHandle;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let consent = use_context::<ConsentHandle>().expect("ConsentHandle is provided by App");

    let open_settings = {
        let reopen = consent.reopen.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            reopen.emit(());
        })
    };

    let mailto = format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode("Anfrage über consentwerft.de")
    );

    let status_label = match consent.status {
        Some(status) => format!("Aktuell: {}", status.as_str()),
        None => "Noch keine Auswahl".to_string(),
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-logo">{"ConsentWerft"}</div>
                    <p>{"Consent-Banner, Consent Mode v2 und Server-Side Tagging, technisch sauber und nachweisbar. Keine Rechtsberatung."}</p>
                </div>
                <div>
                    <h4>{"Seiten"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{"Leistungen"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Offers}>{"Angebote"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ComplianceCenter}>{"DSGVO-Center"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"Über uns"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Kontakt"}</h4>
                    <ul>
                        <li><a href={mailto}>{CONTACT_EMAIL}</a></li>
                        <li><Link<Route> to={Route::Booking}>{"15-Minuten-Gespräch buchen"}</Link<Route>></li>
                        <li>
                            <a href="#" onclick={open_settings}>{"Cookie-Einstellungen"}</a>
                            <span class="footer-muted">{format!(" ({})", status_label)}</span>
                        </li>
                    </ul>
                </div>
            </div>
            <p class="footer-bottom">{"© 2026 ConsentWerft · * Preise zzgl. MwSt."}</p>
            <style>
                {r#"
                .site-footer {
                    background: #0a0a0a;
                    color: #d4d4d4;
                    padding: 4rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }
                .site-footer li {
                    margin-bottom: 0.5rem;
                }
                .site-footer a {
                    color: #e5e5e5;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #FF4FA2;
                }
                .footer-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #fff;
                }
                .footer-muted {
                    color: #737373;
                    font-size: 0.8rem;
                }
                .footer-bottom {
                    text-align: center;
                    color: #737373;
                    font-size: 0.8rem;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
