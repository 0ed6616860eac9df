use yew::prelude::*;
use yew_router::prelude::*;

use crate::quiz::{self, QuizAction, QuizField, QuizStep, QuizWizard, Tier, INDUSTRIES, QUESTIONS};
use crate::Route;

fn on_click(
    wizard: &UseReducerDispatcher<QuizWizard>,
    action: impl Fn() -> QuizAction + 'static,
) -> Callback<MouseEvent> {
    let wizard = wizard.clone();
    Callback::from(move |_: MouseEvent| wizard.dispatch(action()))
}

#[function_component(ComplianceQuiz)]
pub fn compliance_quiz() -> Html {
    let wizard = use_reducer(QuizWizard::new);
    let dispatcher = wizard.dispatcher();

    let answered = wizard.data().answers.iter().filter(|a| a.is_some()).count();
    let progress = match wizard.current() {
        QuizStep::Industry => 0,
        QuizStep::Questions => 10 + answered * 80 / QUESTIONS.len(),
        QuizStep::Result => 100,
    };

    let body = match wizard.current() {
        QuizStep::Industry => html! {
            <div class="quiz-step">
                <h3>{"In welcher Branche sind Sie tätig?"}</h3>
                <div class="quiz-options">
                    { for INDUSTRIES.iter().map(|industry| {
                        let id = industry.id;
                        html! {
                            <button
                                class="quiz-option"
                                onclick={on_click(&dispatcher, move || QuizAction::ChooseIndustry(id))}
                            >
                                {industry.label}
                            </button>
                        }
                    }) }
                </div>
            </div>
        },
        QuizStep::Questions => html! {
            <div class="quiz-step">
                <p class="quiz-industry">
                    { wizard.data().industry.and_then(quiz::industry_label).unwrap_or_default() }
                </p>
                { for QUESTIONS.iter().enumerate().map(|(index, question)| {
                    let answer = wizard.answer_of(index);
                    let missing = wizard.error(QuizField::Question(index)).is_some();
                    html! {
                        <div class={classes!("quiz-question", missing.then(|| "missing"))}>
                            <p>{format!("{}. {}", index + 1, question)}</p>
                            <div class="quiz-answers">
                                <button
                                    class={classes!("quiz-answer", (answer == Some(true)).then(|| "selected"))}
                                    onclick={on_click(&dispatcher, move || QuizAction::Answer(index, true))}
                                >
                                    {"Ja"}
                                </button>
                                <button
                                    class={classes!("quiz-answer", (answer == Some(false)).then(|| "selected"))}
                                    onclick={on_click(&dispatcher, move || QuizAction::Answer(index, false))}
                                >
                                    {"Nein"}
                                </button>
                            </div>
                        </div>
                    }
                }) }
                if !wizard.errors().is_empty() {
                    <p class="field-error">{"Bitte beantworten Sie alle Fragen."}</p>
                }
                <div class="quiz-actions">
                    <button class="back-button" onclick={on_click(&dispatcher, || QuizAction::Back)}>
                        {"← Zurück"}
                    </button>
                    <button class="primary-button" onclick={on_click(&dispatcher, || QuizAction::Submit)}>
                        {"Auswertung anzeigen"}
                    </button>
                </div>
            </div>
        },
        QuizStep::Result => match wizard.result() {
            Some(score) => {
                let tier_class = match score.tier() {
                    Tier::NeedsAction => "tier-low",
                    Tier::GoodFoundation => "tier-mid",
                    Tier::Strong => "tier-high",
                };
                html! {
                    <div class="quiz-step quiz-result">
                        <div class={classes!("quiz-score", tier_class)}>{format!("{}%", score.percent())}</div>
                        <p>{score.tier().headline()}</p>
                        <div class="quiz-actions">
                            <Link<Route> to={Route::Booking} classes="primary-button">
                                {"Kostenloses Gespräch buchen"}
                            </Link<Route>>
                            <button class="back-button" onclick={on_click(&dispatcher, || QuizAction::Reset)}>
                                {"Test wiederholen"}
                            </button>
                        </div>
                    </div>
                }
            }
            None => html! {},
        },
    };

    html! {
        <div class="compliance-quiz">
            <div class="quiz-progress">
                <div class="quiz-progress-bar" style={format!("width: {}%;", progress)}></div>
            </div>
            { body }
            <style>
                {r#"
                .compliance-quiz {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                }
                .quiz-progress {
                    height: 6px;
                    background: #f5f5f5;
                    border-radius: 3px;
                    margin-bottom: 1.5rem;
                    overflow: hidden;
                }
                .quiz-progress-bar {
                    height: 100%;
                    background: linear-gradient(90deg, #6A0DAD, #FF4FA2);
                    transition: width 0.4s ease;
                }
                .quiz-options {
                    display: grid;
                    gap: 0.75rem;
                }
                .quiz-option, .quiz-answer {
                    padding: 0.8rem 1rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 10px;
                    background: #fff;
                    cursor: pointer;
                    text-align: left;
                }
                .quiz-answer.selected {
                    border-color: #6A0DAD;
                    background: #f5ecfb;
                }
                .quiz-question {
                    padding: 0.75rem 0;
                    border-bottom: 1px solid #f5f5f5;
                }
                .quiz-question.missing p {
                    color: #dc2626;
                }
                .quiz-answers {
                    display: flex;
                    gap: 0.5rem;
                }
                .quiz-actions {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 1.5rem;
                }
                .quiz-result {
                    text-align: center;
                }
                .quiz-score {
                    font-size: 3rem;
                    font-weight: 800;
                }
                .quiz-score.tier-low { color: #dc2626; }
                .quiz-score.tier-mid { color: #d97706; }
                .quiz-score.tier-high { color: #16a34a; }
                "#}
            </style>
        </div>
    }
}
