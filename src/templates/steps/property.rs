use super::{select, text};
use crate::domain::form::{FormState, ListField};
use crate::domain::vocab::{
    BLOCK_SHAPES, LAND_AREA_UNITS, OUTDOOR_FEATURES, PROPERTY_TYPES, SERVICES, SLOPES,
};
use crate::templates::components::fields::chip_toggles;
use maud::{html, Markup};

pub fn render(form: &FormState) -> Markup {
    html! {
        section {
            h2 { "Property basics & site" }

            div class="grid" {
                (select(form, "propertyType", "Property type", PROPERTY_TYPES))
                (text(form, "yearBuilt", "Year built (approx.)", ""))
                (text(form, "construction", "Construction", "Brick & tile, weatherboard, etc."))
            }

            div class="grid" {
                (text(form, "landArea", "Land area", ""))
                (select(form, "landAreaUnit", "Unit", LAND_AREA_UNITS))
                (text(form, "zoning", "Zoning", ""))
                (select(form, "blockShape", "Block shape", BLOCK_SHAPES))
                (select(form, "slope", "Slope", SLOPES))
            }

            (text(form, "outlook", "Outlook / views", "Valley outlook, treetop views, etc."))

            div class="grid" {
                (text(form, "bedrooms", "Bedrooms", ""))
                (text(form, "bathrooms", "Bathrooms", ""))
                (text(form, "wcs", "WCs", ""))
                (text(form, "carSpaces", "Car spaces", "e.g. 2 garage + 1 carport"))
            }

            h3 { "Services" }
            (chip_toggles(ListField::Services.key(), SERVICES, &form.services))

            h3 { "Outdoor features" }
            (chip_toggles(ListField::OutdoorFeatures.key(), OUTDOOR_FEATURES, &form.outdoor_features))
        }
    }
}
