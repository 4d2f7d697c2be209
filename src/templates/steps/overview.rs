use super::{area, date, select, text};
use crate::domain::form::FormState;
use crate::domain::vocab::SOURCE_OF_ENQUIRY;
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Appraisal overview" }
            p { "Start the record with the basics. You can fill in the detail later." }

            (text(form, "appraisalTitle", "Appraisal title", "11 Maple Crescent Helena Valley – Initial appraisal"))

            div class="grid" {
                (text(form, "streetAddress", "Street address *", ""))
                (text(form, "suburb", "Suburb *", ""))
                (text(form, "postcode", "Postcode *", ""))
                (text(form, "state", "State", ""))
            }

            div class="grid" {
                (date(form, "appraisalDate", "Appraisal date"))
                (select(form, "sourceOfEnquiry", "Source of enquiry", SOURCE_OF_ENQUIRY))
            }

            (area(form, "firstContactNotes", "Notes about first contact", ""))
        }
    }
}
