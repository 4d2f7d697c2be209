use crate::domain::form::{FormState, GoalKey, OccupancyType};
use crate::domain::listing::{format_date, format_date_str};
use crate::domain::vocab::{
    label_for, EXPECTATION_SOURCES, PRICING_STRATEGIES, PRIMARY_REASONS, PROPERTY_TYPES,
    TIMEFRAMES,
};
use crate::domain::Appraisal;
use crate::templates::components::fields::detail;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SummaryVm<'a> {
    pub record: &'a Appraisal,
    /// The record's document, already merged with its columns.
    pub form: &'a FormState,
    pub agency_name: &'a str,
}

fn date_or_dash(raw: &str) -> String {
    if raw.is_empty() {
        "—".to_string()
    } else {
        format_date_str(raw)
    }
}

fn land_area(form: &FormState) -> String {
    if form.land_area.is_empty() {
        return String::new();
    }
    let unit = if form.land_area_unit == "sqm" {
        "m²"
    } else {
        form.land_area_unit.as_str()
    };
    format!("{} {}", form.land_area, unit)
}

fn phones(form: &FormState) -> String {
    match (
        form.owner_phone_primary.as_str(),
        form.owner_phone_secondary.as_str(),
    ) {
        (primary, "") => primary.to_string(),
        ("", secondary) => format!("— / {secondary}"),
        (primary, secondary) => format!("{primary} / {secondary}"),
    }
}

fn rent_and_lease(form: &FormState) -> String {
    let mut out = if form.current_rent.is_empty() {
        "—".to_string()
    } else {
        let per = if form.rent_frequency == "pm" {
            "per month"
        } else {
            "per week"
        };
        format!("{} {per}", form.current_rent)
    };
    if !form.lease_expiry.is_empty() {
        out.push_str(&format!(" · Lease to {}", format_date_str(&form.lease_expiry)));
    }
    out
}

pub fn summary_page(vm: &SummaryVm<'_>) -> Markup {
    let form = vm.form;
    let record = vm.record;
    let heading = [form.appraisal_title.as_str(), form.street_address.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Appraisal #{}", record.id));
    let address = form.full_address();

    desktop_layout(
        &format!("Summary · {heading}"),
        html! {
            main class="container summary" {
                div class="card-head no-print" {
                    div {
                        h1 { "Appraisal summary" }
                        p { "Internal appraisal snapshot for " strong { (heading) } "." }
                    }
                    button type="button" onclick="window.print()" { "Print / Save as PDF" }
                    a href=(format!("/appraisals/{}/edit", record.id)) { "← Back to appraisal" }
                }

                div class="card band" {
                    div {
                        div { (vm.agency_name.to_uppercase()) " · APPRAISAL REPORT" }
                        div { strong { (address) } }
                        div { "Appraisal date: " (date_or_dash(&form.appraisal_date)) }
                    }
                }

                section class="card" {
                    h2 { "Property snapshot" }
                    dl class="grid" {
                        (detail("Address", &address))
                        (detail("Property type", label_for(PROPERTY_TYPES, &form.property_type)))
                        (detail("Beds", &form.bedrooms))
                        (detail("Baths", &form.bathrooms))
                        (detail("WCs", &form.wcs))
                        (detail("Parking", &form.car_spaces))
                        (detail("Land area", &land_area(form)))
                        (detail("Status", record.status.as_str()))
                        (detail("Last updated", &format_date(&record.updated_at)))
                    }
                }

                section class="card" {
                    h2 { "Owner & occupancy" }
                    dl class="grid" {
                        (detail("Owner(s)", &form.owner_names))
                        (detail("Phone", &phones(form)))
                        (detail("Email", &form.owner_email))
                        (detail("Occupancy", form.occupancy_type.label()))
                        @if form.occupancy_type == OccupancyType::Tenant {
                            (detail("Tenant", &form.tenant_name))
                            (detail("Rent & lease", &rent_and_lease(form)))
                        }
                    }
                }

                section class="card" {
                    h2 { "Motivation & timing" }
                    dl class="grid" {
                        (detail("Primary reason for moving", label_for(PRIMARY_REASONS, &form.primary_reason)))
                        (detail("Ideal timeframe", label_for(TIMEFRAMES, &form.ideal_timeframe)))
                        (detail("Dates to avoid", &form.dates_to_avoid))
                        (detail("Notes about their situation", &form.motivation_detail))
                    }
                }

                section class="card" {
                    h2 { "Pricing snapshot" }
                    dl class="grid" {
                        (detail("Suggested price range", &form.suggested_range()))
                        (detail("Pricing strategy", label_for(PRICING_STRATEGIES, &form.pricing_strategy)))
                        (detail("Vendor price expectations", &form.vendor_expectation()))
                        @if form.has_price_expectation {
                            (detail("Expectation source", label_for(EXPECTATION_SOURCES, &form.expectation_source)))
                        }
                    }
                }

                section class="card" {
                    h2 { "Non-price goals (1–5)" }
                    dl class="grid" {
                        @for key in GoalKey::ALL {
                            (detail(key.label(), &form.non_price_goals.get(key).to_string()))
                        }
                    }
                }

                section class="card" {
                    h2 { "Preparation & next steps" }
                    dl class="grid" {
                        (detail("Must do before photography / launch", &form.must_do_prep))
                        (detail("Nice to have if possible", &form.nice_to_have_prep))
                        (detail("Follow-up date", &date_or_dash(&form.follow_up_date)))
                        (detail("Next steps & reminders", &form.follow_up_actions))
                    }
                }
            }
        },
    )
}
