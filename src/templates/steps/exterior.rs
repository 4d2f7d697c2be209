use super::area;
use super::interior::feature_inputs;
use crate::domain::form::{ExteriorArea, FormState};
use crate::domain::vocab::EXTERIOR_TYPES;
use crate::templates::components::fields::{select_submitting, text_field, textarea_field};
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Exterior & structures" }

            (area(form, "landscapeSummary", "Landscape & exterior summary",
                "Overall exterior condition, gardens, fencing, driveway, outlook, important notes..."))

            h3 { "Structures & outdoor areas" }
            @if form.exterior_areas.is_empty() {
                p { "No structures added yet." }
            }
            @for item in &form.exterior_areas {
                (area_card(item))
            }
            button type="submit" name="action" value="add-area" { "+ Add structure / area" }
        }
    }
}

fn area_card(item: &ExteriorArea) -> Markup {
    let name = |key: &str| format!("area.{}.{key}", item.id);
    let value = |key: &str| item.field(key).unwrap_or_default().to_string();

    html! {
        div class="card" id=(format!("area-{}", item.id)) {
            div class="card-head" {
                strong { @if item.label.is_empty() { "Structure" } @else { (item.label) } }
                " "
                button type="submit" name="action" value=(format!("delete-area:{}", item.id)) { "Remove" }
            }
            div class="grid" {
                (text_field("Label", &name("label"), &item.label, "Patio, Shed, Garage..."))
                (select_submitting("Type", &name("type"), EXTERIOR_TYPES, item.features.type_code()))
                (text_field("Length (m)", &name("lengthMetres"), &item.length_metres, ""))
                (text_field("Width (m)", &name("widthMetres"), &item.width_metres, ""))
                (text_field("Height (m)", &name("heightMetres"), &item.height_metres, ""))
            }
            div class="grid" {
                (text_field("Condition (1–5)", &name("conditionRating"), &item.condition_rating, ""))
                (text_field("Construction", &name("construction"), &item.construction, "Colorbond, brick, timber..."))
            }
            (textarea_field("Special features", &name("specialFeatures"), &item.special_features, "", 2))
            (feature_inputs(item.features.fields(), |id| name(id), |id| value(id)))
        }
    }
}
