use super::{area, flag, select, text};
use crate::domain::form::{FormState, GoalKey};
use crate::domain::vocab::{EXPECTATION_SOURCES, PRIMARY_REASONS, TIMEFRAMES};
use crate::templates::components::fields::rating_field;
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Motivation & expectations" }

            div class="grid" {
                (select(form, "primaryReason", "Primary reason for selling", PRIMARY_REASONS))
                (select(form, "idealTimeframe", "Ideal timeframe", TIMEFRAMES))
            }
            (area(form, "motivationDetail", "Motivation detail", ""))
            (text(form, "datesToAvoid", "Dates to avoid", "Holidays, work trips, family events, etc."))

            h3 { "Price expectation" }
            (flag(form, "hasPriceExpectation", "Vendor has a price in mind"))
            @if form.has_price_expectation {
                div class="grid" {
                    (text(form, "expectationMin", "Expectation from ($)", ""))
                    (text(form, "expectationMax", "Expectation to ($)", ""))
                    (select(form, "expectationSource", "Where did it come from?", EXPECTATION_SOURCES))
                }
                (area(form, "expectationComments", "Comments", ""))
            }

            h3 { "Non-price goals (1 = low, 5 = high)" }
            div class="grid" {
                @for key in GoalKey::ALL {
                    (rating_field(key.label(), &format!("goal.{}", key.key()), form.non_price_goals.get(key)))
                }
            }
            (area(form, "otherGoalNotes", "Other goals / notes", ""))
        }
    }
}
