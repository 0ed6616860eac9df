//! Compliance self-check: industry, questionnaire, scored result.

use std::rc::Rc;

use yew::Reducible;

use crate::wizard::{FieldError, Flow, Wizard};

pub struct Industry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INDUSTRIES: [Industry; 3] = [
    Industry { id: "ecommerce", label: "E-Commerce / Shopify" },
    Industry { id: "saas", label: "B2B SaaS / Software" },
    Industry { id: "agency", label: "Agentur / Dienstleister" },
];

pub const QUESTIONS: [&str; 5] = [
    "Ist Ihr Cookie-Banner so konfiguriert, dass vor der Zustimmung KEINE Marketing-Tags feuern?",
    "Nutzen Sie den Google Consent Mode v2, um Conversion-Daten zu modellieren?",
    "Werden die Einwilligungen Ihrer Nutzer nachweisbar und revisionssicher gespeichert?",
    "Haben Sie Server-Side Tagging im Einsatz, um die Datenhoheit zu erhöhen?",
    "Ist Ihr Checkout-Prozess datenschutzkonform (z.B. bzgl. Newsletter-Anmeldung)?",
];

pub fn industry_label(id: &str) -> Option<&'static str> {
    INDUSTRIES.iter().find(|i| i.id == id).map(|i| i.label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Industry,
    Questions,
    Result,
}

impl QuizStep {
    pub fn from_number(step: usize) -> Self {
        match step {
            1 => Self::Industry,
            2 => Self::Questions,
            _ => Self::Result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuizField {
    Industry,
    Question(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    NeedsAction,
    GoodFoundation,
    Strong,
}

impl Tier {
    /// Lower bounds are inclusive: 50 is a good foundation, 80 is strong.
    pub fn from_score(score: f64) -> Self {
        if score < 50.0 {
            Self::NeedsAction
        } else if score < 80.0 {
            Self::GoodFoundation
        } else {
            Self::Strong
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::NeedsAction => "Handlungsbedarf erkannt! Viele Ihrer Prozesse scheinen nicht den aktuellen Standards zu entsprechen.",
            Self::GoodFoundation => "Gute Grundlage! Sie haben bereits wichtige Schritte unternommen, aber es gibt noch Optimierungspotenzial.",
            Self::Strong => "Sehr gut! Ihre Implementierung ist auf einem hohen Niveau.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    value: f64,
}

impl QuizScore {
    pub fn from_answers(answers: &[Option<bool>]) -> Self {
        if answers.is_empty() {
            return Self { value: 0.0 };
        }
        let yes = answers.iter().filter(|a| **a == Some(true)).count();
        Self {
            value: yes as f64 * 100.0 / answers.len() as f64,
        }
    }

    /// Unrounded score in `[0, 100]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rounded for display only.
    pub fn percent(&self) -> u32 {
        self.value.round() as u32
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    pub industry: Option<&'static str>,
    pub answers: [Option<bool>; QUESTIONS.len()],
}

impl QuizAnswers {
    pub fn all_answered(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }
}

impl Flow for QuizAnswers {
    type Field = QuizField;
    type Outcome = QuizScore;

    const STEPS: usize = 3;

    fn check(&self, step: usize) -> Vec<(QuizField, FieldError)> {
        match QuizStep::from_number(step) {
            QuizStep::Industry if self.industry.is_none() => {
                vec![(QuizField::Industry, FieldError::Unselected)]
            }
            QuizStep::Questions => self
                .answers
                .iter()
                .enumerate()
                .filter(|(_, answer)| answer.is_none())
                .map(|(index, _)| (QuizField::Question(index), FieldError::Unanswered))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn outcome(&self) -> Option<QuizScore> {
        Some(QuizScore::from_answers(&self.answers))
    }
}

pub type QuizWizard = Wizard<QuizAnswers>;

impl Wizard<QuizAnswers> {
    pub fn current(&self) -> QuizStep {
        QuizStep::from_number(self.step())
    }

    pub fn choose_industry(&mut self, id: &'static str) {
        self.select(QuizField::Industry, |quiz| quiz.industry = Some(id));
        self.advance();
    }

    pub fn answer(&mut self, index: usize, value: bool) {
        if index >= QUESTIONS.len() {
            return;
        }
        self.select(QuizField::Question(index), |quiz| quiz.answers[index] = Some(value));
    }

    pub fn answer_of(&self, index: usize) -> Option<bool> {
        self.data().answers.get(index).copied().flatten()
    }
}

pub enum QuizAction {
    ChooseIndustry(&'static str),
    Answer(usize, bool),
    Submit,
    Back,
    Reset,
}

impl Reducible for Wizard<QuizAnswers> {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuizAction::ChooseIndustry(id) => next.choose_industry(id),
            QuizAction::Answer(index, value) => next.answer(index, value),
            QuizAction::Submit => {
                next.submit();
            }
            QuizAction::Back => {
                next.go_back();
            }
            QuizAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_from_mask(mask: u32) -> [Option<bool>; 5] {
        let mut answers = [None; 5];
        for (i, slot) in answers.iter_mut().enumerate() {
            *slot = Some(mask & (1 << i) != 0);
        }
        answers
    }

    #[test]
    fn score_stays_within_bounds_for_every_combination() {
        for mask in 0..32u32 {
            let score = QuizScore::from_answers(&answers_from_mask(mask));
            assert!((0.0..=100.0).contains(&score.value()), "mask {mask}");
            assert_eq!(score.value(), mask.count_ones() as f64 * 20.0);
        }
        assert_eq!(QuizScore::from_answers(&answers_from_mask(0)).value(), 0.0);
        assert_eq!(QuizScore::from_answers(&answers_from_mask(31)).value(), 100.0);
    }

    #[test]
    fn rapid_answers_are_all_kept() {
        let mut state = Rc::new(QuizWizard::new()).reduce(QuizAction::ChooseIndustry("saas"));
        for index in 0..QUESTIONS.len() {
            state = state.reduce(QuizAction::Answer(index, index % 2 == 0));
        }
        assert!(state.data().all_answered());

        let state = state.reduce(QuizAction::Submit);
        assert_eq!(state.current(), QuizStep::Result);
        assert_eq!(state.result().map(|s| s.percent()), Some(60));
    }

    #[test]
    fn tier_boundaries_are_inclusive_below() {
        assert_eq!(Tier::from_score(49.999), Tier::NeedsAction);
        assert_eq!(Tier::from_score(50.0), Tier::GoodFoundation);
        assert_eq!(Tier::from_score(79.999), Tier::GoodFoundation);
        assert_eq!(Tier::from_score(80.0), Tier::Strong);
        assert_eq!(Tier::from_score(100.0), Tier::Strong);
    }

    #[test]
    fn tier_uses_the_unrounded_score() {
        // 2 of 3 is 66.67 and 1 of 3 is 33.33
        let score = QuizScore::from_answers(&[Some(true), Some(true), Some(false)]);
        assert_eq!(score.percent(), 67);
        assert_eq!(score.tier(), Tier::GoodFoundation);

        // 79.5 displays as 80 but is not yet strong
        let near = QuizScore { value: 79.5 };
        assert_eq!(near.percent(), 80);
        assert_eq!(near.tier(), Tier::GoodFoundation);
    }

    #[test]
    fn scoring_waits_for_every_answer() {
        let mut quiz = QuizWizard::new();
        quiz.choose_industry("saas");
        assert_eq!(quiz.current(), QuizStep::Questions);

        for index in 0..4 {
            quiz.answer(index, true);
        }
        assert!(!quiz.data().all_answered());
        assert!(!quiz.submit());
        assert_eq!(quiz.error(QuizField::Question(4)), Some(FieldError::Unanswered));
        assert_eq!(quiz.errors().len(), 1);

        quiz.answer(4, false);
        assert_eq!(quiz.error(QuizField::Question(4)), None);
        assert!(quiz.submit());
        assert_eq!(quiz.current(), QuizStep::Result);
        assert_eq!(quiz.result().map(QuizScore::percent), Some(80));
        assert_eq!(quiz.result().map(QuizScore::tier), Some(Tier::Strong));
    }

    #[test]
    fn no_is_an_answer_not_a_gap() {
        let mut quiz = QuizWizard::new();
        quiz.choose_industry("agency");
        for index in 0..QUESTIONS.len() {
            quiz.answer(index, false);
        }
        assert!(quiz.submit());
        assert_eq!(quiz.result().map(QuizScore::value), Some(0.0));
        assert_eq!(quiz.result().map(QuizScore::tier), Some(Tier::NeedsAction));
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut quiz = QuizWizard::new();
        quiz.choose_industry("ecommerce");
        quiz.answer(QUESTIONS.len(), true);
        assert_eq!(quiz.data().answers, [None; 5]);
    }

    #[test]
    fn industry_lookup() {
        assert_eq!(industry_label("saas"), Some("B2B SaaS / Software"));
        assert_eq!(industry_label("bakery"), None);
    }
}
