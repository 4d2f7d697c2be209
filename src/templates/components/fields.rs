// src/templates/components/fields.rs

//! Labelled inputs for the wizard steps.
//!
//! `name` is the full submitted name (`f.suburb`, `room.17.flooring`, ...).

use crate::domain::vocab::Choice;
use maud::{html, Markup};

pub fn text_field(label: &str, name: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        div class="field" {
            label { (label)
                input type="text" name=(name) value=(value) placeholder=(placeholder);
            }
        }
    }
}

pub fn date_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        div class="field" {
            label { (label)
                input type="date" name=(name) value=(value);
            }
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str, placeholder: &str, rows: u8) -> Markup {
    html! {
        div class="field" {
            label { (label)
                textarea name=(name) rows=(rows) placeholder=(placeholder) { (value) }
            }
        }
    }
}

/// Select with a leading blank "Select" option.
pub fn select_field(label: &str, name: &str, choices: &[Choice], value: &str) -> Markup {
    html! {
        div class="field" {
            label { (label)
                select name=(name) {
                    option value="" selected[value.is_empty()] { "Select" }
                    (options(choices, value))
                }
            }
        }
    }
}

/// Select that submits the form on change, so dependent inputs re-render.
pub fn select_submitting(label: &str, name: &str, choices: &[Choice], value: &str) -> Markup {
    html! {
        div class="field" {
            label { (label)
                select name=(name) onchange="this.form.submit()" {
                    (options(choices, value))
                }
            }
        }
    }
}

pub fn options(choices: &[Choice], value: &str) -> Markup {
    let known = choices.iter().any(|(code, _)| *code == value);
    html! {
        @for (code, label) in choices {
            option value=(code) selected[*code == value] { (label) }
        }
        // Keep values that came from older documents selectable.
        @if !known && !value.is_empty() {
            option value=(value) selected { (value) }
        }
    }
}

/// Checkbox that always submits: a hidden `false` precedes the box.
pub fn checkbox_field(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="field" {
            input type="hidden" name=(name) value="false";
            label {
                input type="checkbox" name=(name) value="true" checked[checked];
                " " (label)
            }
        }
    }
}

/// Toggle chips for a string-set field. Each chip submits `toggle:<list>:<value>`.
pub fn chip_toggles(list_key: &str, options: &[&str], selected: &[String]) -> Markup {
    html! {
        div class="chips" {
            @for option in options {
                @let on = selected.iter().any(|s| s == option);
                button type="submit" name="action" value=(format!("toggle:{list_key}:{option}"))
                    aria-pressed=(if on { "true" } else { "false" }) {
                    (option)
                }
            }
        }
    }
}

/// 1–5 rating select.
pub fn rating_field(label: &str, name: &str, value: u8) -> Markup {
    html! {
        div class="field" {
            label { (label)
                select name=(name) {
                    @for n in 1u8..=5 {
                        option value=(n) selected[n == value] { (n) }
                    }
                }
            }
        }
    }
}

/// Read-only label/value pair for review and summary panels.
pub fn detail(term: &str, value: &str) -> Markup {
    html! {
        div class="detail" {
            dt { (term) }
            dd { @if value.is_empty() { "—" } @else { (value) } }
        }
    }
}
