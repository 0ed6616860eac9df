use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::consent::{BannerPhase, ConsentHandle, ConsentStatus};

#[function_component(ConsentBanner)]
pub fn consent_banner() -> Html {
    let handle = use_context::<ConsentHandle>().expect("ConsentHandle is provided by App");
    let phase = use_state(BannerPhase::default);

    // each timed phase schedules its own successor; dropping the timeout on
    // re-render or unmount cancels the sequence
    {
        let phase_setter = phase.clone();
        let handle = handle.clone();
        use_effect_with_deps(
            move |current: &BannerPhase| {
                let current = *current;
                let timeout = current.dwell_ms().map(|ms| {
                    Timeout::new(ms, move || {
                        let step = current.tick();
                        if let Some(status) = step.persist {
                            handle.decided.emit(status);
                        }
                        if step.hide {
                            handle.close.emit(());
                        }
                        phase_setter.set(step.next);
                    })
                });
                move || drop(timeout)
            },
            *phase,
        );
    }

    let choose = |status: ConsentStatus| {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = phase.choose(status) {
                phase.set(next);
            }
        })
    };

    let button_label = |status: ConsentStatus, idle_label: &'static str| -> Html {
        if phase.pending() == Some(status) {
            html! { <span class="spinner" aria-label="Wird gespeichert"></span> }
        } else if phase.confirmed() == Some(status) {
            html! { <span aria-label="Gespeichert">{"✓"}</span> }
        } else {
            html! { {idle_label} }
        }
    };

    let closing = matches!(*phase, BannerPhase::Closing(_));
    let busy = phase.is_busy();

    html! {
        <div
            class={classes!(
                "consent-banner",
                handle.visible.then(|| "open"),
                closing.then(|| "closing"),
            )}
            aria-hidden={(!handle.visible).to_string()}
        >
            <div class="consent-accent"></div>
            <div class="consent-inner">
                <div class="consent-text">
                    <h3>{"🛡️ Datenschutz-Einstellung (Demo)"}</h3>
                    <p>
                        {"Wir nutzen Cookies, um den Consent Mode v2 zu demonstrieren. Hier sehen Sie, wie ein "}
                        <strong>{"gleichwertiges „Alle ablehnen“"}</strong>
                        {" aussieht."}
                    </p>
                </div>
                <div class="consent-actions">
                    <button
                        class="consent-button outline"
                        onclick={choose(ConsentStatus::Denied)}
                        disabled={busy}
                    >
                        { button_label(ConsentStatus::Denied, "Alle ablehnen") }
                    </button>
                    <button
                        class="consent-button gradient"
                        onclick={choose(ConsentStatus::Granted)}
                        disabled={busy}
                    >
                        { button_label(ConsentStatus::Granted, "Alle akzeptieren") }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .consent-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 -8px 30px -5px rgba(0, 0, 0, 0.1);
                    transform: translateY(100%);
                    opacity: 0;
                    pointer-events: none;
                    transition: transform 0.5s cubic-bezier(0.16, 1, 0.3, 1), opacity 0.3s;
                }
                .consent-banner.open {
                    transform: translateY(0);
                    opacity: 1;
                    pointer-events: auto;
                }
                .consent-banner.open.closing {
                    transform: translateY(100%);
                }
                .consent-accent {
                    height: 4px;
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                }
                .consent-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.5rem 2rem;
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                }
                .consent-text h3 {
                    margin: 0 0 0.5rem;
                    color: #171717;
                }
                .consent-text p {
                    margin: 0;
                    color: #525252;
                    font-size: 0.9rem;
                    max-width: 48rem;
                }
                .consent-actions {
                    display: flex;
                    gap: 0.5rem;
                }
                .consent-button {
                    min-width: 140px;
                    padding: 0.7rem 1.2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .consent-button.outline {
                    background: #fff;
                    border: 1px solid #d4d4d4;
                    color: #171717;
                }
                .consent-button.gradient {
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                }
                .consent-button:disabled {
                    cursor: default;
                    opacity: 0.8;
                }
                "#}
            </style>
        </div>
    }
}
