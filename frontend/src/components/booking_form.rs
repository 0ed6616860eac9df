use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use chrono::{Local, NaiveDate};

use crate::booking::{
    self, available_dates, BookingAction, BookingField, BookingStep, BookingWizard, TIME_SLOTS,
    TOPICS,
};

fn field_error(wizard: &BookingWizard, field: BookingField) -> Html {
    match wizard.error(field) {
        Some(_) => html! { <p class="field-error">{field.message()}</p> },
        None => html! {},
    }
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let wizard = use_reducer(BookingWizard::new);
    let dates = use_memo(|_| available_dates(Local::now().date_naive()), ());

    let choose_date = {
        let wizard = wizard.dispatcher();
        Callback::from(move |date: NaiveDate| wizard.dispatch(BookingAction::ChooseDate(date)))
    };
    let choose_time = {
        let wizard = wizard.dispatcher();
        Callback::from(move |time: &'static str| wizard.dispatch(BookingAction::ChooseTime(time)))
    };
    let go_back = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(BookingAction::Back))
    };
    let reset = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(BookingAction::Reset))
    };

    let on_name = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(BookingAction::EditName(input.value()));
        })
    };
    let on_email = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(BookingAction::EditEmail(input.value()));
        })
    };
    let on_topic = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            wizard.dispatch(BookingAction::EditTopic(select.value()));
        })
    };
    let on_submit = {
        let wizard = wizard.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            wizard.dispatch(BookingAction::Submit);
        })
    };

    let draft = wizard.data();

    let body = match wizard.current() {
        BookingStep::Date => html! {
            <div class="booking-step">
                <h3>{"1. Tag auswählen"}</h3>
                <div class="date-grid">
                    { for dates.iter().map(|date| {
                        let date = *date;
                        let selected = draft.date == Some(date);
                        html! {
                            <button
                                class={classes!("date-option", selected.then(|| "selected"))}
                                onclick={choose_date.reform(move |_: MouseEvent| date)}
                            >
                                <span class="weekday">{booking::weekday_short(date)}</span>
                                <span class="day">{booking::day_month_short(date)}</span>
                            </button>
                        }
                    }) }
                </div>
                { field_error(&wizard, BookingField::Date) }
            </div>
        },
        BookingStep::Time => html! {
            <div class="booking-step">
                <h3>{"2. Uhrzeit auswählen"}</h3>
                <div class="time-grid">
                    { for TIME_SLOTS.iter().map(|slot| {
                        let slot: &'static str = slot;
                        let selected = draft.time == Some(slot);
                        html! {
                            <button
                                class={classes!("time-option", selected.then(|| "selected"))}
                                onclick={choose_time.reform(move |_: MouseEvent| slot)}
                            >
                                {slot}
                            </button>
                        }
                    }) }
                </div>
                { field_error(&wizard, BookingField::Time) }
                <button class="back-button" onclick={go_back.clone()}>{"← Zurück"}</button>
            </div>
        },
        BookingStep::Contact => html! {
            <form class="booking-step" onsubmit={on_submit} novalidate={true}>
                <h3>{"3. Ihre Angaben"}</h3>
                <label>
                    {"Worum geht es?"}
                    <select onchange={on_topic}>
                        <option value="" selected={draft.contact.topic.is_empty()}>{"Bitte wählen"}</option>
                        { for TOPICS.iter().map(|topic| html! {
                            <option value={*topic} selected={draft.contact.topic == *topic}>{*topic}</option>
                        }) }
                    </select>
                </label>
                { field_error(&wizard, BookingField::Topic) }
                <label>
                    {"Name"}
                    <input type="text" value={draft.contact.name.clone()} oninput={on_name} />
                </label>
                { field_error(&wizard, BookingField::Name) }
                <label>
                    {"E-Mail"}
                    <input type="email" value={draft.contact.email.clone()} oninput={on_email} />
                </label>
                { field_error(&wizard, BookingField::Email) }
                <div class="booking-actions">
                    <button type="button" class="back-button" onclick={go_back.clone()}>{"← Zurück"}</button>
                    <button type="submit" class="primary-button">{"Termin bestätigen"}</button>
                </div>
            </form>
        },
        BookingStep::Confirmation => match wizard.result() {
            Some(confirmation) => html! {
                <div class="booking-step confirmation">
                    <div class="confirmation-icon">{"✓"}</div>
                    <h3>{"Termin bestätigt!"}</h3>
                    <p>
                        {format!(
                            "Danke, {}! Wir sprechen am {} um {} Uhr über „{}“.",
                            confirmation.name,
                            booking::long_label(confirmation.date),
                            confirmation.time,
                            confirmation.topic,
                        )}
                    </p>
                    <p>{format!("Die Bestätigung geht an {}.", confirmation.email)}</p>
                    <button class="primary-button" onclick={reset}>{"Zurück zum Start"}</button>
                </div>
            },
            None => html! {},
        },
    };

    html! {
        <div class="booking-form">
            <aside class="booking-summary">
                <h4>{"Erstgespräch"}</h4>
                <ul>
                    { for draft.summary().into_iter().map(|line| html! { <li>{line}</li> }) }
                </ul>
            </aside>
            <div class="booking-main">
                <div class="booking-progress">
                    { for (1..=3).map(|n| html! {
                        <span class={classes!("progress-dot", (wizard.step() >= n).then(|| "active"))}></span>
                    }) }
                </div>
                { body }
            </div>
            <style>
                {r#"
                .booking-form {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 2rem;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                }
                .booking-summary ul {
                    list-style: none;
                    padding: 0;
                    line-height: 2;
                }
                .booking-progress {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .progress-dot {
                    width: 2rem;
                    height: 4px;
                    border-radius: 2px;
                    background: #e5e5e5;
                }
                .progress-dot.active {
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                }
                .date-grid, .time-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                }
                .time-grid {
                    grid-template-columns: repeat(5, 1fr);
                }
                .date-option, .time-option {
                    padding: 0.8rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 10px;
                    background: #fff;
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .date-option.selected, .time-option.selected {
                    border-color: #6A0DAD;
                    background: #f5ecfb;
                }
                .booking-step label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                    margin-top: 1rem;
                }
                .booking-step input, .booking-step select {
                    padding: 0.6rem;
                    border: 1px solid #d4d4d4;
                    border-radius: 8px;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin: 0.3rem 0 0;
                }
                .booking-actions {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }
                .back-button {
                    background: none;
                    border: none;
                    color: #525252;
                    cursor: pointer;
                    margin-top: 1rem;
                }
                .primary-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                    cursor: pointer;
                }
                .confirmation {
                    text-align: center;
                }
                .confirmation-icon {
                    font-size: 3rem;
                    color: #16a34a;
                }
                @media (max-width: 768px) {
                    .booking-form {
                        grid-template-columns: 1fr;
                    }
                    .time-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
