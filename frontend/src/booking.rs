//! Booking funnel: date, time, contact details, confirmation.
//!
//! Nothing here talks to a server. A confirmed booking only lives in the
//! wizard until the visitor leaves or starts over.

use std::rc::Rc;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

use crate::wizard::{FieldError, Flow, Wizard};

/// How many bookable days are offered.
pub const BOOKABLE_DAYS: usize = 6;
/// Hard cap on the forward scan for bookable days.
pub const LOOKAHEAD_DAYS: u64 = 14;
pub const SESSION_MINUTES: u32 = 15;

pub const TIME_SLOTS: [&str; 10] = [
    "09:00", "09:30", "10:00", "10:30", "11:00",
    "13:00", "13:30", "14:00", "14:30", "15:00",
];

pub const TOPICS: [&str; 5] = [
    "Consent-Check",
    "Fix-Pilot",
    "Banner-A/B",
    "Training",
    "Sonstiges",
];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Weekdays from tomorrow on, skipping weekends.
pub fn available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=LOOKAHEAD_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .take(BOOKABLE_DAYS)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Date,
    Time,
    Contact,
    Confirmation,
}

impl BookingStep {
    pub fn from_number(step: usize) -> Self {
        match step {
            1 => Self::Date,
            2 => Self::Time,
            3 => Self::Contact,
            _ => Self::Confirmation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingField {
    Date,
    Time,
    Topic,
    Name,
    Email,
}

impl BookingField {
    pub fn message(self) -> &'static str {
        match self {
            Self::Date => "Bitte wählen Sie einen Tag aus.",
            Self::Time => "Bitte wählen Sie eine Uhrzeit aus.",
            Self::Topic => "Bitte wählen Sie ein Thema aus.",
            Self::Name => "Bitte geben Sie Ihren Namen ein.",
            Self::Email => "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    /// Empty string is the placeholder entry of the topic select.
    pub topic: String,
}

/// Checks every contact field independently so all failures show at once.
pub fn validate_contact(contact: &ContactDetails) -> Vec<(BookingField, FieldError)> {
    let mut failures = Vec::new();
    if contact.topic.is_empty() {
        failures.push((BookingField::Topic, FieldError::Unselected));
    }
    if contact.name.trim().is_empty() {
        failures.push((BookingField::Name, FieldError::Empty));
    }
    if !EMAIL_PATTERN.is_match(&contact.email) {
        failures.push((BookingField::Email, FieldError::Invalid));
    }
    failures
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<&'static str>,
    pub contact: ContactDetails,
}

impl BookingDraft {
    /// Sidebar rows: the fixed session facts, then whatever has been picked so far.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("⏱ {} Minuten", SESSION_MINUTES),
            "💶 Kostenlos".to_string(),
            "📹 Video-Call".to_string(),
        ];
        if let Some(date) = self.date {
            lines.push(format!("📅 {}", long_label(date)));
        }
        if let Some(time) = self.time {
            lines.push(format!("🕒 {} Uhr", time));
        }
        if !self.contact.topic.is_empty() {
            lines.push(format!("🗂 Thema: {}", self.contact.topic));
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub date: NaiveDate,
    pub time: &'static str,
    pub name: String,
    pub email: String,
    pub topic: String,
}

impl Flow for BookingDraft {
    type Field = BookingField;
    type Outcome = BookingConfirmation;

    const STEPS: usize = 4;

    fn check(&self, step: usize) -> Vec<(BookingField, FieldError)> {
        match BookingStep::from_number(step) {
            BookingStep::Date if self.date.is_none() => {
                vec![(BookingField::Date, FieldError::Unselected)]
            }
            BookingStep::Time if self.time.is_none() => {
                vec![(BookingField::Time, FieldError::Unselected)]
            }
            BookingStep::Contact => validate_contact(&self.contact),
            _ => Vec::new(),
        }
    }

    fn outcome(&self) -> Option<BookingConfirmation> {
        Some(BookingConfirmation {
            date: self.date?,
            time: self.time?,
            name: self.contact.name.trim().to_string(),
            email: self.contact.email.clone(),
            topic: self.contact.topic.clone(),
        })
    }
}

pub type BookingWizard = Wizard<BookingDraft>;

impl Wizard<BookingDraft> {
    pub fn current(&self) -> BookingStep {
        BookingStep::from_number(self.step())
    }

    /// Picking a day records it and moves straight to the time step.
    pub fn choose_date(&mut self, date: NaiveDate) {
        self.select(BookingField::Date, |draft| draft.date = Some(date));
        self.advance();
    }

    pub fn choose_time(&mut self, time: &'static str) {
        self.select(BookingField::Time, |draft| draft.time = Some(time));
        self.advance();
    }

    pub fn edit_name(&mut self, name: String) {
        self.select(BookingField::Name, |draft| draft.contact.name = name);
    }

    pub fn edit_email(&mut self, email: String) {
        self.select(BookingField::Email, |draft| draft.contact.email = email);
    }

    pub fn edit_topic(&mut self, topic: String) {
        self.select(BookingField::Topic, |draft| draft.contact.topic = topic);
    }
}

pub enum BookingAction {
    ChooseDate(NaiveDate),
    ChooseTime(&'static str),
    EditName(String),
    EditEmail(String),
    EditTopic(String),
    Submit,
    Back,
    Reset,
}

impl Wizard<BookingDraft> {
    pub fn apply(&mut self, action: BookingAction) {
        match action {
            BookingAction::ChooseDate(date) => self.choose_date(date),
            BookingAction::ChooseTime(time) => self.choose_time(time),
            BookingAction::EditName(name) => self.edit_name(name),
            BookingAction::EditEmail(email) => self.edit_email(email),
            BookingAction::EditTopic(topic) => self.edit_topic(topic),
            BookingAction::Submit => {
                if self.submit() {
                    log::info!("Booking confirmed (not sent anywhere)");
                }
            }
            BookingAction::Back => {
                self.go_back();
            }
            BookingAction::Reset => self.reset(),
        }
    }
}

/// Each action starts from the latest state, so events fired before a
/// re-render never overwrite each other.
impl Reducible for Wizard<BookingDraft> {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

const WEEKDAYS_LONG: [&str; 7] = [
    "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
];
const WEEKDAYS_SHORT: [&str; 7] = ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."];
const MONTHS_LONG: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];
const MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni",
    "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// "Dienstag, 20. Oktober"
pub fn long_label(date: NaiveDate) -> String {
    format!(
        "{}, {}. {}",
        WEEKDAYS_LONG[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS_LONG[date.month0() as usize]
    )
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAYS_SHORT[date.weekday().num_days_from_monday() as usize]
}

/// "20. Okt."
pub fn day_month_short(date: NaiveDate) -> String {
    format!("{}. {}", date.day(), MONTHS_SHORT[date.month0() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn six_future_weekdays_for_every_start_day() {
        // one full week of starting points covers every weekday
        for offset in 0..7 {
            let today = date(2026, 10, 19) + Days::new(offset);
            let dates = available_dates(today);

            assert_eq!(dates.len(), BOOKABLE_DAYS, "start {}", today);
            assert!(dates.iter().all(|d| *d > today));
            assert!(dates
                .iter()
                .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
            assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn summary_lists_choices_as_they_are_made() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.data().summary().len(), 3);

        wizard.choose_date(date(2026, 10, 20));
        wizard.choose_time("14:30");
        wizard.edit_topic("Banner-A/B".into());

        let summary = wizard.data().summary();
        assert_eq!(summary[0], "⏱ 15 Minuten");
        assert_eq!(summary[1], "💶 Kostenlos");
        assert_eq!(summary[3], format!("📅 {}", long_label(date(2026, 10, 20))));
        assert_eq!(summary[4], "🕒 14:30 Uhr");
        assert_eq!(summary[5], "🗂 Thema: Banner-A/B");
    }

    #[test]
    fn queued_actions_build_on_each_other() {
        let state = Rc::new(BookingWizard::new());
        let state = state.reduce(BookingAction::ChooseDate(date(2026, 10, 20)));
        let state = state.reduce(BookingAction::ChooseTime("09:30"));
        // two edits before any render
        let state = state.reduce(BookingAction::EditName("Mia".into()));
        let state = state.reduce(BookingAction::EditEmail("mia@firma.de".into()));
        let state = state.reduce(BookingAction::EditTopic("Fix-Pilot".into()));

        assert_eq!(state.data().contact.name, "Mia");
        assert_eq!(state.data().contact.email, "mia@firma.de");

        let state = state.reduce(BookingAction::Submit);
        assert_eq!(state.current(), BookingStep::Confirmation);
        assert_eq!(state.result().map(|c| c.topic.as_str()), Some("Fix-Pilot"));

        let state = state.reduce(BookingAction::Reset);
        assert_eq!(state.current(), BookingStep::Date);
    }

    #[test]
    fn friday_skips_to_monday() {
        let dates = available_dates(date(2026, 10, 23));
        assert_eq!(dates[0], date(2026, 10, 26));
        assert_eq!(dates[5], date(2026, 11, 2));
    }

    #[test]
    fn empty_contact_fails_all_three_fields() {
        let mut wizard = BookingWizard::new();
        wizard.choose_date(date(2026, 10, 20));
        wizard.choose_time("10:00");
        wizard.edit_email("max.firma.de".into());

        assert!(!wizard.submit());
        assert_eq!(wizard.current(), BookingStep::Contact);
        assert_eq!(wizard.error(BookingField::Name), Some(FieldError::Empty));
        assert_eq!(wizard.error(BookingField::Email), Some(FieldError::Invalid));
        assert_eq!(wizard.error(BookingField::Topic), Some(FieldError::Unselected));
    }

    #[test]
    fn fixing_one_field_leaves_the_others_flagged() {
        let mut wizard = BookingWizard::new();
        wizard.choose_date(date(2026, 10, 20));
        wizard.choose_time("10:00");
        wizard.submit();

        wizard.edit_name("Max Mustermann".into());
        assert!(!wizard.submit());

        assert_eq!(wizard.error(BookingField::Name), None);
        assert_eq!(wizard.error(BookingField::Email), Some(FieldError::Invalid));
        assert_eq!(wizard.error(BookingField::Topic), Some(FieldError::Unselected));
    }

    #[test]
    fn whitespace_name_counts_as_empty() {
        let contact = ContactDetails {
            name: "   ".into(),
            email: "max@firma.de".into(),
            topic: "Training".into(),
        };
        assert_eq!(
            validate_contact(&contact),
            vec![(BookingField::Name, FieldError::Empty)]
        );
    }

    #[test]
    fn email_shape_is_permissive_but_needs_a_dot_after_the_at() {
        let check = |email: &str| {
            validate_contact(&ContactDetails {
                name: "Max".into(),
                email: email.into(),
                topic: "Training".into(),
            })
            .is_empty()
        };
        assert!(check("max@firma.de"));
        assert!(check("a.b+c@sub.firma.co.uk"));
        assert!(!check("max@firma"));
        assert!(!check("max firma@x.de"));
        assert!(!check("@firma.de"));
        assert!(!check("max@@firma.de"));
    }

    #[test]
    fn valid_contact_confirms_booking() {
        let mut wizard = BookingWizard::new();
        wizard.choose_date(date(2026, 10, 21));
        wizard.choose_time("14:30");
        wizard.edit_topic("Fix-Pilot".into());
        wizard.edit_name("  Erika Muster ".into());
        wizard.edit_email("erika@firma.de".into());

        assert!(wizard.submit());
        assert_eq!(wizard.current(), BookingStep::Confirmation);
        let confirmation = wizard.result().unwrap();
        assert_eq!(confirmation.date, date(2026, 10, 21));
        assert_eq!(confirmation.time, "14:30");
        assert_eq!(confirmation.name, "Erika Muster");
        assert_eq!(confirmation.topic, "Fix-Pilot");
    }

    #[test]
    fn going_back_twice_keeps_date_and_time() {
        let mut wizard = BookingWizard::new();
        wizard.choose_date(date(2026, 10, 22));
        wizard.choose_time("09:30");
        assert_eq!(wizard.current(), BookingStep::Contact);

        wizard.go_back();
        wizard.go_back();
        assert_eq!(wizard.current(), BookingStep::Date);
        assert_eq!(wizard.data().date, Some(date(2026, 10, 22)));
        assert_eq!(wizard.data().time, Some("09:30"));

        // forward again without re-picking
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.current(), BookingStep::Contact);
    }

    #[test]
    fn german_labels() {
        let day = date(2026, 10, 20);
        assert_eq!(long_label(day), "Dienstag, 20. Oktober");
        assert_eq!(weekday_short(day), "Di.");
        assert_eq!(day_month_short(day), "20. Okt.");
    }
}
