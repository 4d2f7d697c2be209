// src/domain/form.rs

//! The capture form document.
//!
//! `FormState` is exactly what gets stored (inside the versioned envelope) in
//! an appraisal's `data` column. Field names on the wire are camelCase and
//! match documents written by earlier versions of the tool.

use crate::domain::features::{ExteriorFeatures, RoomFeatures};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Misuse of the form model: unknown keys, bad values, stale item ids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("no item with id {0}")]
    UnknownItem(i64),

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

// ----- Steps -----

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 9;

/// One of the nine linear sections of the form. Always within 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(FIRST_STEP);
    pub const LAST: Step = Step(LAST_STEP);

    pub fn new(n: u8) -> Self {
        Step(n.clamp(FIRST_STEP, LAST_STEP))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Step::new(self.0.saturating_add(1))
    }

    pub fn prev(self) -> Self {
        Step::new(self.0.saturating_sub(1))
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Appraisal overview",
            2 => "Property basics & site",
            3 => "Interior rooms",
            4 => "Exterior & structures",
            5 => "Owner & occupancy",
            6 => "Motivation & expectations",
            7 => "Pricing & strategy",
            8 => "Presentation, marketing & follow-up",
            _ => "Review",
        }
    }

    /// Short name for the step navigation pills.
    pub fn pill(self) -> &'static str {
        match self.0 {
            1 => "Overview",
            2 => "Property",
            3 => "Interior",
            4 => "Exterior",
            5 => "Owner & occupancy",
            6 => "Motivation",
            7 => "Pricing",
            8 => "Presentation",
            _ => "Review",
        }
    }

    pub fn all() -> impl Iterator<Item = Step> {
        (FIRST_STEP..=LAST_STEP).map(Step)
    }
}

impl From<u8> for Step {
    fn from(n: u8) -> Self {
        Step::new(n)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

// ----- Enumerated fields -----

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccupancyType {
    #[default]
    Owner,
    Tenant,
    Vacant,
    Holiday,
}

impl OccupancyType {
    pub fn code(self) -> &'static str {
        match self {
            OccupancyType::Owner => "OWNER",
            OccupancyType::Tenant => "TENANT",
            OccupancyType::Vacant => "VACANT",
            OccupancyType::Holiday => "HOLIDAY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OccupancyType::Owner => "Owner occupied",
            OccupancyType::Tenant => "Tenanted",
            OccupancyType::Vacant => "Vacant",
            OccupancyType::Holiday => "Holiday home",
        }
    }
}

impl FromStr for OccupancyType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNER" => Ok(OccupancyType::Owner),
            "TENANT" => Ok(OccupancyType::Tenant),
            "VACANT" => Ok(OccupancyType::Vacant),
            "HOLIDAY" => Ok(OccupancyType::Holiday),
            other => Err(FormError::InvalidValue {
                field: "occupancyType".into(),
                value: other.into(),
            }),
        }
    }
}

/// The string-set fields that support membership toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Services,
    OutdoorFeatures,
    MarketingChannels,
}

impl ListField {
    pub fn key(self) -> &'static str {
        match self {
            ListField::Services => "services",
            ListField::OutdoorFeatures => "outdoorFeatures",
            ListField::MarketingChannels => "marketingChannels",
        }
    }
}

impl FromStr for ListField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "services" => Ok(ListField::Services),
            "outdoorFeatures" => Ok(ListField::OutdoorFeatures),
            "marketingChannels" => Ok(ListField::MarketingChannels),
            other => Err(FormError::UnknownField(other.into())),
        }
    }
}

// ----- Non-price goals -----

pub const DEFAULT_GOAL_RATING: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NonPriceGoals {
    pub best_price: u8,
    pub speed: u8,
    pub minimal_disruption: u8,
    pub privacy: u8,
    pub long_settlement: u8,
}

impl Default for NonPriceGoals {
    fn default() -> Self {
        Self {
            best_price: DEFAULT_GOAL_RATING,
            speed: DEFAULT_GOAL_RATING,
            minimal_disruption: DEFAULT_GOAL_RATING,
            privacy: DEFAULT_GOAL_RATING,
            long_settlement: DEFAULT_GOAL_RATING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKey {
    BestPrice,
    Speed,
    MinimalDisruption,
    Privacy,
    LongSettlement,
}

impl GoalKey {
    pub const ALL: [GoalKey; 5] = [
        GoalKey::BestPrice,
        GoalKey::Speed,
        GoalKey::MinimalDisruption,
        GoalKey::Privacy,
        GoalKey::LongSettlement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            GoalKey::BestPrice => "bestPrice",
            GoalKey::Speed => "speed",
            GoalKey::MinimalDisruption => "minimalDisruption",
            GoalKey::Privacy => "privacy",
            GoalKey::LongSettlement => "longSettlement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalKey::BestPrice => "Best possible price",
            GoalKey::Speed => "Speed of sale",
            GoalKey::MinimalDisruption => "Minimal disruption",
            GoalKey::Privacy => "Privacy / low profile",
            GoalKey::LongSettlement => "Long settlement / rent-back",
        }
    }
}

impl FromStr for GoalKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalKey::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.into()))
    }
}

impl NonPriceGoals {
    pub fn get(&self, key: GoalKey) -> u8 {
        match key {
            GoalKey::BestPrice => self.best_price,
            GoalKey::Speed => self.speed,
            GoalKey::MinimalDisruption => self.minimal_disruption,
            GoalKey::Privacy => self.privacy,
            GoalKey::LongSettlement => self.long_settlement,
        }
    }

    pub fn set(&mut self, key: GoalKey, rating: i64) -> Result<(), FormError> {
        if !(1..=5).contains(&rating) {
            return Err(FormError::RatingOutOfRange(rating));
        }
        let rating = rating as u8;
        match key {
            GoalKey::BestPrice => self.best_price = rating,
            GoalKey::Speed => self.speed = rating,
            GoalKey::MinimalDisruption => self.minimal_disruption = rating,
            GoalKey::Privacy => self.privacy = rating,
            GoalKey::LongSettlement => self.long_settlement = rating,
        }
        Ok(())
    }
}

// ----- Rooms and exterior areas -----

/// An interior room. `features` is the typed replacement for the old
/// `type` + `extraFields` pair, which is still what goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoomWire", into = "RoomWire")]
pub struct Room {
    pub id: i64,
    pub label: String,
    pub length_metres: String,
    pub width_metres: String,
    pub condition_rating: String,
    pub flooring: String,
    pub heating_cooling: String,
    pub special_features: String,
    pub features: RoomFeatures,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RoomWire {
    id: i64,
    label: String,
    #[serde(rename = "type")]
    kind: String,
    length_metres: String,
    width_metres: String,
    condition_rating: String,
    flooring: String,
    heating_cooling: String,
    special_features: String,
    extra_fields: BTreeMap<String, String>,
}

impl Default for RoomWire {
    fn default() -> Self {
        Self {
            id: 0,
            label: String::new(),
            kind: "other".into(),
            length_metres: String::new(),
            width_metres: String::new(),
            condition_rating: String::new(),
            flooring: String::new(),
            heating_cooling: String::new(),
            special_features: String::new(),
            extra_fields: BTreeMap::new(),
        }
    }
}

impl From<RoomWire> for Room {
    fn from(w: RoomWire) -> Self {
        Room {
            features: RoomFeatures::from_parts(&w.kind, &w.extra_fields),
            id: w.id,
            label: w.label,
            length_metres: w.length_metres,
            width_metres: w.width_metres,
            condition_rating: w.condition_rating,
            flooring: w.flooring,
            heating_cooling: w.heating_cooling,
            special_features: w.special_features,
        }
    }
}

impl From<Room> for RoomWire {
    fn from(r: Room) -> Self {
        RoomWire {
            kind: r.features.type_code().to_string(),
            extra_fields: r.features.to_map(),
            id: r.id,
            label: r.label,
            length_metres: r.length_metres,
            width_metres: r.width_metres,
            condition_rating: r.condition_rating,
            flooring: r.flooring,
            heating_cooling: r.heating_cooling,
            special_features: r.special_features,
        }
    }
}

pub const DEFAULT_ROOM_TYPE: &str = "bedroom";

impl Room {
    pub fn new(id: i64, label: String) -> Self {
        Room {
            id,
            label,
            length_metres: String::new(),
            width_metres: String::new(),
            condition_rating: String::new(),
            flooring: String::new(),
            heating_cooling: String::new(),
            special_features: String::new(),
            features: RoomFeatures::for_type(DEFAULT_ROOM_TYPE),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "label" => Some(&self.label),
            "type" => Some(self.features.type_code()),
            "lengthMetres" => Some(&self.length_metres),
            "widthMetres" => Some(&self.width_metres),
            "conditionRating" => Some(&self.condition_rating),
            "flooring" => Some(&self.flooring),
            "heatingCooling" => Some(&self.heating_cooling),
            "specialFeatures" => Some(&self.special_features),
            other => self.features.get(other),
        }
    }

    /// Sets a core field by key, or a detail field of the current type.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let slot = match key {
            "type" => {
                if value != self.features.type_code() {
                    self.features = self.features.retype(value);
                }
                return Ok(());
            }
            "label" => &mut self.label,
            "lengthMetres" => &mut self.length_metres,
            "widthMetres" => &mut self.width_metres,
            "conditionRating" => &mut self.condition_rating,
            "flooring" => &mut self.flooring,
            "heatingCooling" => &mut self.heating_cooling,
            "specialFeatures" => &mut self.special_features,
            other => {
                return if self.features.set(other, value.to_string()) {
                    Ok(())
                } else {
                    Err(FormError::UnknownField(other.to_string()))
                };
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}

/// An exterior area or structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExteriorAreaWire", into = "ExteriorAreaWire")]
pub struct ExteriorArea {
    pub id: i64,
    pub label: String,
    pub length_metres: String,
    pub width_metres: String,
    pub height_metres: String,
    pub condition_rating: String,
    pub construction: String,
    pub special_features: String,
    pub features: ExteriorFeatures,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ExteriorAreaWire {
    id: i64,
    label: String,
    #[serde(rename = "type")]
    kind: String,
    length_metres: String,
    width_metres: String,
    height_metres: String,
    condition_rating: String,
    construction: String,
    special_features: String,
    extra_fields: BTreeMap<String, String>,
}

impl Default for ExteriorAreaWire {
    fn default() -> Self {
        Self {
            id: 0,
            label: String::new(),
            kind: "other".into(),
            length_metres: String::new(),
            width_metres: String::new(),
            height_metres: String::new(),
            condition_rating: String::new(),
            construction: String::new(),
            special_features: String::new(),
            extra_fields: BTreeMap::new(),
        }
    }
}

impl From<ExteriorAreaWire> for ExteriorArea {
    fn from(w: ExteriorAreaWire) -> Self {
        ExteriorArea {
            features: ExteriorFeatures::from_parts(&w.kind, &w.extra_fields),
            id: w.id,
            label: w.label,
            length_metres: w.length_metres,
            width_metres: w.width_metres,
            height_metres: w.height_metres,
            condition_rating: w.condition_rating,
            construction: w.construction,
            special_features: w.special_features,
        }
    }
}

impl From<ExteriorArea> for ExteriorAreaWire {
    fn from(a: ExteriorArea) -> Self {
        ExteriorAreaWire {
            kind: a.features.type_code().to_string(),
            extra_fields: a.features.to_map(),
            id: a.id,
            label: a.label,
            length_metres: a.length_metres,
            width_metres: a.width_metres,
            height_metres: a.height_metres,
            condition_rating: a.condition_rating,
            construction: a.construction,
            special_features: a.special_features,
        }
    }
}

pub const DEFAULT_EXTERIOR_TYPE: &str = "patio";

impl ExteriorArea {
    pub fn new(id: i64, label: String) -> Self {
        ExteriorArea {
            id,
            label,
            length_metres: String::new(),
            width_metres: String::new(),
            height_metres: String::new(),
            condition_rating: String::new(),
            construction: String::new(),
            special_features: String::new(),
            features: ExteriorFeatures::for_type(DEFAULT_EXTERIOR_TYPE),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "label" => Some(&self.label),
            "type" => Some(self.features.type_code()),
            "lengthMetres" => Some(&self.length_metres),
            "widthMetres" => Some(&self.width_metres),
            "heightMetres" => Some(&self.height_metres),
            "conditionRating" => Some(&self.condition_rating),
            "construction" => Some(&self.construction),
            "specialFeatures" => Some(&self.special_features),
            other => self.features.get(other),
        }
    }

    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let slot = match key {
            "type" => {
                if value != self.features.type_code() {
                    self.features = self.features.retype(value);
                }
                return Ok(());
            }
            "label" => &mut self.label,
            "lengthMetres" => &mut self.length_metres,
            "widthMetres" => &mut self.width_metres,
            "heightMetres" => &mut self.height_metres,
            "conditionRating" => &mut self.condition_rating,
            "construction" => &mut self.construction,
            "specialFeatures" => &mut self.special_features,
            other => {
                return if self.features.set(other, value.to_string()) {
                    Ok(())
                } else {
                    Err(FormError::UnknownField(other.to_string()))
                };
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}

// ----- The document -----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    // Step 1 – overview
    pub appraisal_title: String,
    pub street_address: String,
    pub suburb: String,
    pub postcode: String,
    pub state: String,
    pub appraisal_date: String,
    pub source_of_enquiry: String,
    pub first_contact_notes: String,

    // Step 2 – property basics
    pub property_type: String,
    pub year_built: String,
    pub construction: String,
    pub land_area: String,
    pub land_area_unit: String,
    pub zoning: String,
    pub block_shape: String,
    pub slope: String,
    pub outlook: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub wcs: String,
    pub car_spaces: String,
    pub services: Vec<String>,
    pub outdoor_features: Vec<String>,

    // Step 3 – interior
    pub overall_condition: String,
    pub style_theme: String,
    pub interior_notes: String,
    pub rooms: Vec<Room>,

    // Step 4 – exterior
    pub exterior_areas: Vec<ExteriorArea>,
    pub landscape_summary: String,

    // Step 5 – owner & occupancy
    pub owner_names: String,
    pub owner_phone_primary: String,
    pub owner_phone_secondary: String,
    pub owner_email: String,
    pub postal_address: String,
    pub same_as_property: bool,
    pub occupancy_type: OccupancyType,
    pub tenant_name: String,
    pub lease_expiry: String,
    pub current_rent: String,
    pub rent_frequency: String,
    pub tenant_notes: String,
    pub owner_how_long: String,
    pub owner_next_move: String,
    pub decision_makers: String,
    pub decision_notes: String,

    // Step 6 – motivation & expectations
    pub primary_reason: String,
    pub motivation_detail: String,
    pub ideal_timeframe: String,
    pub dates_to_avoid: String,
    pub has_price_expectation: bool,
    pub expectation_min: String,
    pub expectation_max: String,
    pub expectation_source: String,
    pub expectation_comments: String,
    pub non_price_goals: NonPriceGoals,
    pub other_goal_notes: String,

    // Step 7 – pricing & strategy
    pub suggested_range_min: String,
    pub suggested_range_max: String,
    pub pricing_strategy: String,
    pub comparables_notes: String,
    pub must_do_prep: String,
    pub nice_to_have_prep: String,
    pub fees_discussed: bool,
    pub proposed_fee: String,
    pub agreement_likelihood: String,

    // Step 8 – presentation, marketing & follow-up
    pub presentation_score: String,
    pub presentation_summary: String,
    pub target_buyer_profile: String,
    pub headline_ideas: String,
    pub marketing_channels: Vec<String>,
    pub follow_up_actions: String,
    pub follow_up_date: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            appraisal_title: String::new(),
            street_address: String::new(),
            suburb: String::new(),
            postcode: String::new(),
            state: DEFAULT_STATE.to_string(),
            appraisal_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            source_of_enquiry: String::new(),
            first_contact_notes: String::new(),

            property_type: "house".to_string(),
            year_built: String::new(),
            construction: String::new(),
            land_area: String::new(),
            land_area_unit: "sqm".to_string(),
            zoning: String::new(),
            block_shape: String::new(),
            slope: String::new(),
            outlook: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            wcs: String::new(),
            car_spaces: String::new(),
            services: Vec::new(),
            outdoor_features: Vec::new(),

            overall_condition: String::new(),
            style_theme: String::new(),
            interior_notes: String::new(),
            rooms: Vec::new(),

            exterior_areas: Vec::new(),
            landscape_summary: String::new(),

            owner_names: String::new(),
            owner_phone_primary: String::new(),
            owner_phone_secondary: String::new(),
            owner_email: String::new(),
            postal_address: String::new(),
            same_as_property: false,
            occupancy_type: OccupancyType::Owner,
            tenant_name: String::new(),
            lease_expiry: String::new(),
            current_rent: String::new(),
            rent_frequency: "pw".to_string(),
            tenant_notes: String::new(),
            owner_how_long: String::new(),
            owner_next_move: String::new(),
            decision_makers: String::new(),
            decision_notes: String::new(),

            primary_reason: String::new(),
            motivation_detail: String::new(),
            ideal_timeframe: String::new(),
            dates_to_avoid: String::new(),
            has_price_expectation: false,
            expectation_min: String::new(),
            expectation_max: String::new(),
            expectation_source: String::new(),
            expectation_comments: String::new(),
            non_price_goals: NonPriceGoals::default(),
            other_goal_notes: String::new(),

            suggested_range_min: String::new(),
            suggested_range_max: String::new(),
            pricing_strategy: String::new(),
            comparables_notes: String::new(),
            must_do_prep: String::new(),
            nice_to_have_prep: String::new(),
            fees_discussed: false,
            proposed_fee: String::new(),
            agreement_likelihood: String::new(),

            presentation_score: "5".to_string(),
            presentation_summary: String::new(),
            target_buyer_profile: String::new(),
            headline_ideas: String::new(),
            marketing_channels: Vec::new(),
            follow_up_actions: String::new(),
            follow_up_date: String::new(),
        }
    }
}

/// State used when none is given.
pub const DEFAULT_STATE: &str = "WA";

/// Generates the key-addressed accessors for plain text fields.
macro_rules! text_fields {
    ($($field:ident => $key:literal,)+) => {
        impl FormState {
            pub fn text(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            fn text_mut(&mut self, key: &str) -> Option<&mut String> {
                match key {
                    $($key => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

text_fields! {
    appraisal_title => "appraisalTitle",
    street_address => "streetAddress",
    suburb => "suburb",
    postcode => "postcode",
    state => "state",
    appraisal_date => "appraisalDate",
    source_of_enquiry => "sourceOfEnquiry",
    first_contact_notes => "firstContactNotes",
    property_type => "propertyType",
    year_built => "yearBuilt",
    construction => "construction",
    land_area => "landArea",
    land_area_unit => "landAreaUnit",
    zoning => "zoning",
    block_shape => "blockShape",
    slope => "slope",
    outlook => "outlook",
    bedrooms => "bedrooms",
    bathrooms => "bathrooms",
    wcs => "wcs",
    car_spaces => "carSpaces",
    overall_condition => "overallCondition",
    style_theme => "styleTheme",
    interior_notes => "interiorNotes",
    landscape_summary => "landscapeSummary",
    owner_names => "ownerNames",
    owner_phone_primary => "ownerPhonePrimary",
    owner_phone_secondary => "ownerPhoneSecondary",
    owner_email => "ownerEmail",
    postal_address => "postalAddress",
    tenant_name => "tenantName",
    lease_expiry => "leaseExpiry",
    current_rent => "currentRent",
    rent_frequency => "rentFrequency",
    tenant_notes => "tenantNotes",
    owner_how_long => "ownerHowLong",
    owner_next_move => "ownerNextMove",
    decision_makers => "decisionMakers",
    decision_notes => "decisionNotes",
    primary_reason => "primaryReason",
    motivation_detail => "motivationDetail",
    ideal_timeframe => "idealTimeframe",
    dates_to_avoid => "datesToAvoid",
    expectation_min => "expectationMin",
    expectation_max => "expectationMax",
    expectation_source => "expectationSource",
    expectation_comments => "expectationComments",
    other_goal_notes => "otherGoalNotes",
    suggested_range_min => "suggestedRangeMin",
    suggested_range_max => "suggestedRangeMax",
    pricing_strategy => "pricingStrategy",
    comparables_notes => "comparablesNotes",
    must_do_prep => "mustDoPrep",
    nice_to_have_prep => "niceToHavePrep",
    proposed_fee => "proposedFee",
    agreement_likelihood => "agreementLikelihood",
    presentation_score => "presentationScore",
    presentation_summary => "presentationSummary",
    target_buyer_profile => "targetBuyerProfile",
    headline_ideas => "headlineIdeas",
    follow_up_actions => "followUpActions",
    follow_up_date => "followUpDate",
}

impl FormState {
    pub fn flag(&self, key: &str) -> Option<bool> {
        match key {
            "sameAsProperty" => Some(self.same_as_property),
            "hasPriceExpectation" => Some(self.has_price_expectation),
            "feesDiscussed" => Some(self.fees_discussed),
            _ => None,
        }
    }

    fn flag_mut(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "sameAsProperty" => Some(&mut self.same_as_property),
            "hasPriceExpectation" => Some(&mut self.has_price_expectation),
            "feesDiscussed" => Some(&mut self.fees_discussed),
            _ => None,
        }
    }

    /// Replaces one scalar field. Only the value's type is checked.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        if let Some(slot) = self.text_mut(key) {
            *slot = value.to_string();
            return Ok(());
        }
        if let Some(slot) = self.flag_mut(key) {
            *slot = parse_flag(key, value)?;
            return Ok(());
        }
        if key == "occupancyType" {
            self.occupancy_type = value.parse()?;
            return Ok(());
        }
        Err(FormError::UnknownField(key.to_string()))
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Services => &self.services,
            ListField::OutdoorFeatures => &self.outdoor_features,
            ListField::MarketingChannels => &self.marketing_channels,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Services => &mut self.services,
            ListField::OutdoorFeatures => &mut self.outdoor_features,
            ListField::MarketingChannels => &mut self.marketing_channels,
        }
    }

    /// `"{street}, {suburb} {postcode} {state}"`, as copied into the postal address.
    pub fn composed_address(&self) -> String {
        format!(
            "{}, {} {} {}",
            self.street_address, self.suburb, self.postcode, self.state
        )
    }

    /// Address line used by the review step and the printed summary.
    pub fn full_address(&self) -> String {
        compose_address(&self.street_address, &self.suburb, &self.postcode, &self.state)
    }

    pub fn suggested_range(&self) -> String {
        range_or_dash(&self.suggested_range_min, &self.suggested_range_max)
    }

    pub fn vendor_expectation(&self) -> String {
        if self.has_price_expectation {
            format!(
                "{} – {}",
                or_question(&self.expectation_min),
                or_question(&self.expectation_max)
            )
        } else {
            "Not specifically stated".to_string()
        }
    }

    pub fn missing_required(&self) -> bool {
        self.street_address.is_empty() || self.suburb.is_empty() || self.postcode.is_empty()
    }
}

/// Joins address parts the way the list, review and summary screens show them.
pub fn compose_address(street: &str, suburb: &str, postcode: &str, state: &str) -> String {
    let locality = format!("{suburb} {postcode} {state}");
    let locality = locality.trim_end();
    if !street.is_empty() {
        if suburb.is_empty() {
            street.to_string()
        } else {
            format!("{street}, {locality}")
        }
    } else if !suburb.is_empty() {
        locality.to_string()
    } else {
        "—".to_string()
    }
}

fn range_or_dash(min: &str, max: &str) -> String {
    if min.is_empty() && max.is_empty() {
        "—".to_string()
    } else {
        format!("{} – {}", or_question(min), or_question(max))
    }
}

fn or_question(s: &str) -> &str {
    if s.is_empty() {
        "?"
    } else {
        s
    }
}

pub fn parse_flag(field: &str, value: &str) -> Result<bool, FormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" | "" => Ok(false),
        _ => Err(FormError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {} · {}", self.0, LAST_STEP, self.label())
    }
}
