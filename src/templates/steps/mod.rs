//! One fragment per wizard step. Each renders only its own inputs; the
//! surrounding page supplies the form element, hidden state and navigation.

use crate::domain::form::{FormState, Step};
use crate::domain::vocab::Choice;
use crate::templates::components::fields;
use maud::Markup;

pub mod exterior;
pub mod interior;
pub mod motivation;
pub mod overview;
pub mod owner;
pub mod presentation;
pub mod pricing;
pub mod property;
pub mod review;

pub fn render_step(step: Step, form: &FormState) -> Markup {
    match step.number() {
        1 => overview::render(form),
        2 => property::render(form),
        3 => interior::render(form),
        4 => exterior::render(form),
        5 => owner::render(form),
        6 => motivation::render(form),
        7 => pricing::render(form),
        8 => presentation::render(form),
        _ => review::render(form),
    }
}

fn name(key: &str) -> String {
    format!("f.{key}")
}

fn value<'a>(form: &'a FormState, key: &str) -> &'a str {
    form.text(key).unwrap_or_default()
}

pub(crate) fn text(form: &FormState, key: &str, label: &str, placeholder: &str) -> Markup {
    fields::text_field(label, &name(key), value(form, key), placeholder)
}

pub(crate) fn area(form: &FormState, key: &str, label: &str, placeholder: &str) -> Markup {
    fields::textarea_field(label, &name(key), value(form, key), placeholder, 3)
}

pub(crate) fn date(form: &FormState, key: &str, label: &str) -> Markup {
    fields::date_field(label, &name(key), value(form, key))
}

pub(crate) fn select(form: &FormState, key: &str, label: &str, choices: &[Choice]) -> Markup {
    fields::select_field(label, &name(key), choices, value(form, key))
}

pub(crate) fn flag(form: &FormState, key: &str, label: &str) -> Markup {
    fields::checkbox_field(label, &name(key), form.flag(key).unwrap_or_default())
}
