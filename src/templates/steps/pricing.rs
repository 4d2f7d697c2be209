use super::{area, flag, select, text};
use crate::domain::form::FormState;
use crate::domain::vocab::{AGREEMENT_LIKELIHOOD, PRICING_STRATEGIES};
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Pricing & strategy" }

            div class="grid" {
                (text(form, "suggestedRangeMin", "Suggested range from ($)", ""))
                (text(form, "suggestedRangeMax", "Suggested range to ($)", ""))
                (select(form, "pricingStrategy", "Pricing strategy", PRICING_STRATEGIES))
            }
            (area(form, "comparablesNotes", "Comparables / evidence", "Recent sales, current competition, days on market..."))

            h3 { "Preparation" }
            div class="grid" {
                (area(form, "mustDoPrep", "Must-do before launch", ""))
                (area(form, "niceToHavePrep", "Nice to have", ""))
            }

            h3 { "Fees & agreement" }
            (flag(form, "feesDiscussed", "Fees discussed"))
            @if form.fees_discussed {
                div class="grid" {
                    (text(form, "proposedFee", "Proposed fee", "e.g. 2.2% + $660 marketing"))
                    (select(form, "agreementLikelihood", "Likelihood of listing", AGREEMENT_LIKELIHOOD))
                }
            }
        }
    }
}
