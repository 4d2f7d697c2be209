use super::{area, date, text};
use crate::domain::form::{FormState, ListField};
use crate::domain::vocab::MARKETING_CHANNELS;
use crate::templates::components::fields::chip_toggles;
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Presentation, marketing & follow-up" }

            div class="grid" {
                (text(form, "presentationScore", "Presentation score (1–10)", ""))
            }
            (area(form, "presentationSummary", "Presentation summary",
                "Neat but dated – great bones, needs cosmetic refresh."))

            h3 { "Marketing" }
            (area(form, "targetBuyerProfile", "Target buyer profile", ""))
            (area(form, "headlineIdeas", "Headline ideas", ""))
            (chip_toggles(ListField::MarketingChannels.key(), MARKETING_CHANNELS, &form.marketing_channels))

            h3 { "Follow-up" }
            div class="grid" {
                (area(form, "followUpActions", "Follow-up actions", ""))
                (date(form, "followUpDate", "Follow-up date"))
            }
        }
    }
}
