use yew::prelude::*;

use crate::components::breach_chart::BreachChart;
use crate::components::compliance_quiz::ComplianceQuiz;
use crate::components::reveal::Reveal;
use crate::content::{DACH_CASES, KEY_METRICS, TIMELINE};

#[function_component(ComplianceCenter)]
pub fn compliance_center() -> Html {
    html! {
        <div class="compliance-page">
            <section class="page-hero">
                <h1>{"DSGVO-Center"}</h1>
                <p>{"Wie Datenschutzrecht entstanden ist, was Verstöße kosten und wo Ihr Setup heute steht."}</p>
            </section>

            <section class="timeline-section">
                <h2>{"Meilensteine des Datenschutzes"}</h2>
                <ol class="timeline">
                    { for TIMELINE.iter().enumerate().map(|(i, milestone)| html! {
                        <li>
                            <Reveal delay_ms={i as u32 * 80} class={classes!("timeline-entry")}>
                                <span class="timeline-year">{milestone.year}</span>
                                <h3>{milestone.title}<small>{format!(" · {}", milestone.region)}</small></h3>
                                <p>{milestone.description}</p>
                            </Reveal>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="cost-section">
                <h2>{"Was ein Datenleck kostet"}</h2>
                <div class="metric-grid">
                    { for KEY_METRICS.iter().map(|metric| html! {
                        <div class="metric-card">
                            <span class="metric-label">{metric.label}</span>
                            <strong class="metric-value">{metric.value}</strong>
                            <p>{metric.source}</p>
                        </div>
                    }) }
                </div>
                <BreachChart />
            </section>

            <section class="cases-section">
                <h2>{"Fälle aus dem DACH-Raum"}</h2>
                <div class="case-grid">
                    { for DACH_CASES.iter().map(|case| html! {
                        <div class="case-card">
                            <h3>{case.company}</h3>
                            <span class="case-country">{case.country}</span>
                            <p><strong>{"Bußgeld: "}</strong>{case.fine}</p>
                            <p>{case.violation}</p>
                            <p class="case-impact">{case.impact}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="quiz-section">
                <h2>{"Compliance-Schnellcheck"}</h2>
                <p>{"Fünf Fragen, zwei Minuten. Das Ergebnis ersetzt keine Rechtsberatung."}</p>
                <ComplianceQuiz />
            </section>

            <style>
                {r#"
                .timeline-section, .cost-section, .cases-section, .quiz-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .timeline {
                    list-style: none;
                    padding-left: 1.5rem;
                    border-left: 2px solid #e9d5f5;
                }
                .timeline-entry {
                    margin-bottom: 1.5rem;
                }
                .timeline-year {
                    color: #6A0DAD;
                    font-weight: 700;
                }
                .timeline small {
                    color: #737373;
                    font-weight: 400;
                }
                .metric-grid, .case-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .metric-card, .case-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: #fafafa;
                }
                .metric-value {
                    display: block;
                    font-size: 1.8rem;
                    color: #171717;
                }
                .metric-label, .case-country {
                    color: #737373;
                    font-size: 0.85rem;
                }
                .case-impact {
                    color: #dc2626;
                    font-weight: 600;
                }
                .chart-source {
                    color: #a3a3a3;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
