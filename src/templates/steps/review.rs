use crate::domain::form::FormState;
use crate::domain::vocab::{label_for, PRICING_STRATEGIES, PROPERTY_TYPES};
use crate::templates::components::card;
use crate::templates::components::fields::detail;
use maud::{html, Markup};

fn dash(s: &str) -> &str {
    if s.is_empty() {
        "–"
    } else {
        s
    }
}

pub fn render(form: &FormState) -> Markup {
    let counts = format!(
        "{} / {} / {} / {}",
        dash(&form.bedrooms),
        dash(&form.bathrooms),
        dash(&form.wcs),
        dash(&form.car_spaces)
    );

    html! {
        section {
            h2 { "Review" }
            p { "Quick snapshot of the key details before you save or complete the appraisal." }

            div class="grid" {
                (card("Property", html! {
                    dl {
                        (detail("Title / label", &form.appraisal_title))
                        (detail("Address", &form.full_address()))
                        (detail("Type", label_for(PROPERTY_TYPES, &form.property_type)))
                        (detail("Beds / baths / WCs / car", &counts))
                        (detail("Appraisal date", &form.appraisal_date))
                    }
                }))
                (card("Owners", html! {
                    dl {
                        (detail("Owner(s)", &form.owner_names))
                        (detail("Phone", &form.owner_phone_primary))
                        (detail("Email", &form.owner_email))
                    }
                }))
            }

            (card("Pricing snapshot", html! {
                dl class="grid" {
                    (detail("Suggested range", &form.suggested_range()))
                    (detail("Pricing strategy", label_for(PRICING_STRATEGIES, &form.pricing_strategy)))
                    (detail("Vendor expectation", &form.vendor_expectation()))
                }
            }))

            div class="jump" {
                strong { "Jump back to edit: " }
                button type="submit" name="action" value="goto:1" { "Overview" }
                button type="submit" name="action" value="goto:3" { "Interior" }
                button type="submit" name="action" value="goto:4" { "Exterior" }
                button type="submit" name="action" value="goto:6" { "Motivation & goals" }
                button type="submit" name="action" value="goto:7" { "Pricing" }
            }
        }
    }
}
