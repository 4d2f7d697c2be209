use super::{area, date, flag, select, text};
use crate::domain::form::{FormState, OccupancyType};
use crate::domain::vocab::{OCCUPANCY_TYPES, RENT_FREQUENCIES};
use crate::templates::components::fields::select_submitting;
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Owner & occupancy" }

            div class="grid" {
                (text(form, "ownerNames", "Owner name(s)", ""))
                (text(form, "ownerPhonePrimary", "Primary phone", ""))
                (text(form, "ownerPhoneSecondary", "Secondary phone", ""))
                (text(form, "ownerEmail", "Email", ""))
            }
            (text(form, "postalAddress", "Postal address", ""))
            (flag(form, "sameAsProperty", "Same as property address"))

            h3 { "Occupancy" }
            (select_submitting("Occupancy", "f.occupancyType", OCCUPANCY_TYPES, form.occupancy_type.code()))

            @if form.occupancy_type == OccupancyType::Tenant {
                div class="grid" {
                    (text(form, "tenantName", "Tenant name", ""))
                    (date(form, "leaseExpiry", "Lease expiry"))
                    (text(form, "currentRent", "Current rent ($)", ""))
                    (select(form, "rentFrequency", "Frequency", RENT_FREQUENCIES))
                }
                (area(form, "tenantNotes", "Tenant notes", "Notice periods, tenant cooperation, access..."))
            }

            h3 { "Owner situation" }
            div class="grid" {
                (text(form, "ownerHowLong", "How long have they owned?", ""))
                (text(form, "ownerNextMove", "Where are they moving next?", ""))
            }
            div class="grid" {
                (text(form, "decisionMakers", "Decision makers", "Both owners, executor, family..."))
                (area(form, "decisionNotes", "Decision notes", ""))
            }
        }
    }
}
