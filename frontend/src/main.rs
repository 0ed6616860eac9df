use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;

mod config;
mod content;
mod api;
mod wizard;
mod booking;
mod quiz;
mod consent;
mod flight;
mod upload;
mod components {
    pub mod breach_chart;
    pub mod booking_form;
    pub mod chat_bot;
    pub mod compliance_quiz;
    pub mod consent_banner;
    pub mod footer;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod offers;
    pub mod compliance_center;
    pub mod about;
    pub mod booking;
    pub mod design_lab;
}

use pages::{
    home::Home,
    services::Services,
    offers::Offers,
    compliance_center::ComplianceCenter,
    about::About,
    booking::Booking,
    design_lab::DesignLab,
};
use components::{
    chat_bot::ChatBot,
    consent_banner::ConsentBanner,
    footer::Footer,
};
use consent::{ConsentHandle, ConsentStatus, PROMPT_DELAY_MS};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/leistungen")]
    Services,
    #[at("/angebote")]
    Offers,
    #[at("/dsgvo-center")]
    ComplianceCenter,
    #[at("/ueber-uns")]
    About,
    #[at("/gespraech-buchen")]
    Booking,
    #[at("/design-studio")]
    DesignLab,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Offers => {
            info!("Rendering Offers page");
            html! { <Offers /> }
        },
        Route::ComplianceCenter => {
            info!("Rendering Compliance Center page");
            html! { <ComplianceCenter /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        },
        Route::DesignLab => {
            info!("Rendering Design Lab page");
            html! { <DesignLab /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"Diese Seite gibt es nicht."}</p>
                    <Link<Route> to={Route::Home} classes="nav-link">{"Zur Startseite"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 24.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Leistungen"),
        (Route::Offers, "Angebote"),
        (Route::ComplianceCenter, "DSGVO-Center"),
        (Route::DesignLab, "Design Lab"),
        (Route::About, "Über uns"),
    ];

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ConsentWerft"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menü">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Booking} classes="nav-cta">
                            {"Gespräch buchen"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    // read once; afterwards only the banner's decision changes it
    let consent_status = use_state(consent::load_status);
    let banner_visible = use_state(|| false);

    {
        let banner_visible = banner_visible.clone();
        let undecided = consent_status.is_none();
        use_effect_with_deps(
            move |_| {
                let timeout = undecided.then(|| {
                    Timeout::new(PROMPT_DELAY_MS, move || banner_visible.set(true))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let reopen = {
        let banner_visible = banner_visible.clone();
        Callback::from(move |_| banner_visible.set(true))
    };

    let decided = {
        let consent_status = consent_status.clone();
        Callback::from(move |status: ConsentStatus| {
            info!("Consent decision: {}", status.as_str());
            consent::store_status(status);
            consent_status.set(Some(status));
        })
    };

    let close = {
        let banner_visible = banner_visible.clone();
        Callback::from(move |_| banner_visible.set(false))
    };

    let handle = ConsentHandle {
        status: *consent_status,
        visible: *banner_visible,
        reopen,
        decided,
        close,
    };

    html! {
        <ContextProvider<ConsentHandle> context={handle}>
            <BrowserRouter>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <ConsentBanner />
                <ChatBot />
            </BrowserRouter>
        </ContextProvider<ConsentHandle>>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
