//! Option lists used by the capture form. Stored values are the first element
//! of each pair; the second is what the agent sees.

pub type Choice = (&'static str, &'static str);

pub const SERVICES: &[&str] = &[
    "Scheme water",
    "Bore",
    "Rainwater tank",
    "Septic / Sewer",
    "Mains gas",
    "Bottled gas",
    "NBN",
    "Fixed wireless",
];

pub const OUTDOOR_FEATURES: &[&str] = &[
    "Patio / deck",
    "Alfresco",
    "Pool",
    "Spa",
    "Powered workshop",
    "Shed",
    "Carport",
    "Fencing",
    "Electric gate",
    "Paddocks",
    "Arena / round yard",
    "Reticulation",
];

pub const MARKETING_CHANNELS: &[&str] = &[
    "realestate.com.au",
    "Domain",
    "Social (FB / IG)",
    "Database / buyer match",
    "Signboard only",
    "Letterbox / local area",
];

pub const SOURCE_OF_ENQUIRY: &[Choice] = &[
    ("repeat_client", "Repeat client"),
    ("referral", "Referral"),
    ("portal", "Portal lead"),
    ("website", "Website form"),
    ("letterbox", "Letterbox / flyer"),
    ("cold_call", "Cold call / door knock"),
    ("other", "Other"),
];

pub const PROPERTY_TYPES: &[Choice] = &[
    ("house", "House"),
    ("unit", "Unit / Apartment"),
    ("townhouse", "Townhouse"),
    ("villa", "Villa"),
    ("rural", "Rural / Lifestyle"),
    ("land", "Vacant land"),
];

pub const LAND_AREA_UNITS: &[Choice] = &[("sqm", "m²"), ("ha", "ha"), ("acres", "acres")];

pub const BLOCK_SHAPES: &[Choice] = &[
    ("regular", "Regular"),
    ("corner", "Corner"),
    ("battleaxe", "Battle-axe"),
    ("irregular", "Irregular"),
];

pub const SLOPES: &[Choice] = &[
    ("level", "Level"),
    ("gentle", "Gentle slope"),
    ("steep", "Steep"),
];

pub const OVERALL_CONDITIONS: &[Choice] = &[
    ("tired", "Tired"),
    ("fair", "Fair"),
    ("presentable", "Presentable"),
    ("well_maintained", "Well maintained"),
    ("renovated", "Renovated"),
];

pub const ROOM_TYPES: &[Choice] = &[
    ("bedroom", "Bedroom"),
    ("bathroom", "Bathroom"),
    ("ensuite", "Ensuite"),
    ("kitchen", "Kitchen"),
    ("meals", "Meals"),
    ("family", "Family"),
    ("lounge", "Lounge"),
    ("theatre", "Theatre"),
    ("study", "Study"),
    ("laundry", "Laundry"),
    ("alfresco", "Alfresco"),
    ("other", "Other"),
];

pub const EXTERIOR_TYPES: &[Choice] = &[
    ("patio", "Patio"),
    ("alfresco", "Alfresco"),
    ("deck", "Deck"),
    ("shed", "Shed"),
    ("workshop", "Workshop"),
    ("garage", "Garage"),
    ("carport", "Carport"),
    ("pool", "Pool"),
    ("spa", "Spa"),
    ("tank", "Rainwater tank"),
    ("stable", "Stable"),
    ("arena", "Arena"),
    ("driveway", "Driveway"),
    ("other", "Other"),
];

pub const OCCUPANCY_TYPES: &[Choice] = &[
    ("OWNER", "Owner occupied"),
    ("TENANT", "Tenanted"),
    ("VACANT", "Vacant"),
    ("HOLIDAY", "Holiday home"),
];

pub const RENT_FREQUENCIES: &[Choice] = &[("pw", "Per week"), ("pm", "Per month")];

pub const PRIMARY_REASONS: &[Choice] = &[
    ("upsizing", "Upsizing"),
    ("downsizing", "Downsizing"),
    ("relocation", "Job relocation"),
    ("financial", "Financial / mortgage stress"),
    ("deceased", "Deceased estate"),
    ("separation", "Divorce / separation"),
    ("testing", "Testing the market"),
    ("other", "Other"),
];

pub const TIMEFRAMES: &[Choice] = &[
    ("asap", "As soon as possible"),
    ("0-3", "0–3 months"),
    ("3-6", "3–6 months"),
    ("6plus", "6+ months"),
    ("flexible", "Open / flexible"),
];

pub const EXPECTATION_SOURCES: &[Choice] = &[
    ("other_agent", "Other agent"),
    ("online_estimate", "Online estimate"),
    ("recent_sales", "Recent sales they know of"),
    ("bank_broker", "Bank / broker"),
    ("own_research", "Own research / gut feel"),
];

pub const PRICING_STRATEGIES: &[Choice] = &[
    ("from", "From / Offers above $X"),
    ("offers_in", "Offers in the (e.g. high $800s)"),
    ("set_price", "Set price"),
    ("auction", "Auction"),
    ("set_date", "Set date sale"),
    ("eoi", "EOI"),
];

pub const AGREEMENT_LIKELIHOOD: &[Choice] = &[
    ("very_likely", "Very likely"),
    ("likely", "Likely"),
    ("unsure", "Unsure"),
    ("unlikely", "Unlikely"),
];

/// Display label for a stored code, falling back to the code itself.
pub fn label_for<'a>(choices: &[Choice], code: &'a str) -> &'a str {
    choices
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}
