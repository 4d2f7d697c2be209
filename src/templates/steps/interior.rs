use super::{area, select, text};
use crate::domain::features::FeatureField;
use crate::domain::form::{FormState, Room};
use crate::domain::vocab::{OVERALL_CONDITIONS, ROOM_TYPES};
use crate::templates::components::fields::{select_submitting, text_field, textarea_field};
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Interior rooms" }

            div class="grid" {
                (select(form, "overallCondition", "Overall condition", OVERALL_CONDITIONS))
                (text(form, "styleTheme", "Style / theme", "Modern, country, 1970s original..."))
            }
            (area(form, "interiorNotes", "Interior notes",
                "Overall comment on interior – presentation, key updates, wear-and-tear, things to mention in copy..."))

            h3 { "Rooms" }
            @if form.rooms.is_empty() {
                p { "No rooms added yet." }
            }
            @for room in &form.rooms {
                (room_card(room))
            }
            button type="submit" name="action" value="add-room" { "+ Add room" }
        }
    }
}

fn room_card(room: &Room) -> Markup {
    let name = |key: &str| format!("room.{}.{key}", room.id);
    let value = |key: &str| room.field(key).unwrap_or_default().to_string();

    html! {
        div class="card" id=(format!("room-{}", room.id)) {
            div class="card-head" {
                strong { @if room.label.is_empty() { "Room" } @else { (room.label) } }
                " "
                button type="submit" name="action" value=(format!("delete-room:{}", room.id)) { "Remove" }
            }
            div class="grid" {
                (text_field("Room label", &name("label"), &room.label, "Bedroom 1, Lounge, Family..."))
                (select_submitting("Type", &name("type"), ROOM_TYPES, room.features.type_code()))
                (text_field("Length (m)", &name("lengthMetres"), &room.length_metres, ""))
                (text_field("Width (m)", &name("widthMetres"), &room.width_metres, ""))
                (text_field("Condition (1–5)", &name("conditionRating"), &room.condition_rating, ""))
            }
            div class="grid" {
                (text_field("Flooring", &name("flooring"), &room.flooring, "Carpet, timber, tiles..."))
                (text_field("Heating / cooling", &name("heatingCooling"), &room.heating_cooling, "Split system, ducted, fan..."))
            }
            (textarea_field("Special features", &name("specialFeatures"), &room.special_features, "", 2))
            (feature_inputs(room.features.fields(), |id| name(id), |id| value(id)))
        }
    }
}

/// Type-specific inputs, shared with the exterior step.
pub(crate) fn feature_inputs(
    fields: &[FeatureField],
    name: impl Fn(&str) -> String,
    value: impl Fn(&str) -> String,
) -> Markup {
    html! {
        div class="grid features" {
            @for field in fields {
                (text_field(field.label, &name(field.id), &value(field.id), field.placeholder))
            }
        }
    }
}
