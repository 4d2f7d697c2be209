// src/domain/features.rs

//! Type-specific detail fields for interior rooms and exterior structures.
//!
//! Every room or structure type owns a fixed field set. Types without a
//! dedicated set (including `other` and anything unrecognised from older
//! documents) fall back to a single free-text note. On the wire a variant is
//! written as its `type` code plus a flat `extraFields` map keyed by field id.

use std::collections::BTreeMap;

/// Static description of one detail input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureField {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Declares a field set: a struct of strings plus its id/label/placeholder table.
macro_rules! feature_set {
    ($name:ident { $($field:ident => $id:literal, $label:literal, $placeholder:literal;)+ }) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            pub const FIELDS: &'static [FeatureField] = &[
                $(FeatureField { id: $id, label: $label, placeholder: $placeholder },)+
            ];

            fn from_map(map: &BTreeMap<String, String>) -> Self {
                Self {
                    $($field: map.get($id).cloned().unwrap_or_default(),)+
                }
            }

            fn write_into(&self, map: &mut BTreeMap<String, String>) {
                $(
                    if !self.$field.is_empty() {
                        map.insert($id.to_string(), self.$field.clone());
                    }
                )+
            }

            fn get(&self, id: &str) -> Option<&str> {
                match id {
                    $($id => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            fn set(&mut self, id: &str, value: String) -> bool {
                match id {
                    $($id => {
                        self.$field = value;
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

/// Declares the closed set of types for one kind of item, with the `Other` fallback.
macro_rules! feature_kinds {
    ($enum:ident, notes = $notes:ident; $($variant:ident($set:ident) => $code:literal,)+) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $enum {
            $($variant($set),)+
            /// Any type without a dedicated field set. `kind` keeps the
            /// original type code so it survives a save.
            Other { kind: String, notes: $notes },
        }

        impl $enum {
            /// Fresh, empty field set for a type code.
            pub fn for_type(kind: &str) -> Self {
                Self::from_parts(kind, &BTreeMap::new())
            }

            pub fn from_parts(kind: &str, extra: &BTreeMap<String, String>) -> Self {
                match kind {
                    $($code => Self::$variant($set::from_map(extra)),)+
                    _ => Self::Other {
                        kind: if kind.trim().is_empty() {
                            "other".to_string()
                        } else {
                            kind.to_string()
                        },
                        notes: $notes::from_map(extra),
                    },
                }
            }

            pub fn type_code(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $code,)+
                    Self::Other { kind, .. } => kind.as_str(),
                }
            }

            pub fn fields(&self) -> &'static [FeatureField] {
                match self {
                    $(Self::$variant(_) => $set::FIELDS,)+
                    Self::Other { .. } => $notes::FIELDS,
                }
            }

            pub fn get(&self, id: &str) -> Option<&str> {
                match self {
                    $(Self::$variant(set) => set.get(id),)+
                    Self::Other { notes, .. } => notes.get(id),
                }
            }

            /// Returns false when `id` is not part of this type's field set.
            pub fn set(&mut self, id: &str, value: String) -> bool {
                match self {
                    $(Self::$variant(set) => set.set(id, value),)+
                    Self::Other { notes, .. } => notes.set(id, value),
                }
            }

            pub fn to_map(&self) -> BTreeMap<String, String> {
                let mut map = BTreeMap::new();
                match self {
                    $(Self::$variant(set) => set.write_into(&mut map),)+
                    Self::Other { notes, .. } => notes.write_into(&mut map),
                }
                map
            }

            /// Switches to another type. Values whose field id exists in both
            /// sets carry over; the rest are dropped.
            pub fn retype(&self, kind: &str) -> Self {
                Self::from_parts(kind, &self.to_map())
            }
        }
    };
}

// ----- Interior rooms -----

feature_set!(KitchenFeatures {
    cooktop_oven => "cooktopOven", "Cooktop / oven", "Gas, electric, induction, 900mm, freestanding, etc.";
    benchtops => "benchtops", "Benchtops", "Stone, laminate, timber...";
    sink => "sink", "Sink", "Single, double, deep, undermount...";
    dishwasher => "dishwasher", "Dishwasher", "Yes / brand / integrated...";
    pantry => "pantry", "Pantry", "Built-in, walk-in, corner, etc.";
});

feature_set!(BedroomFeatures {
    robe => "robe", "Robe", "Built-in, walk-in, none...";
    ceiling_fan => "ceilingFan", "Ceiling fan", "Yes / no / type...";
    window_treatment => "windowTreatment", "Window treatments", "Blinds, curtains, shutters...";
});

feature_set!(BathroomFeatures {
    shower_bath => "showerBath", "Shower / bath", "Shower only, shower over bath, separate bath...";
    vanity => "vanity", "Vanity", "Single / double, storage, condition...";
    toilet => "toilet", "Toilet", "In room / separate, condition...";
    tiles => "tiles", "Tiling", "Floor to ceiling, half height, updated, original...";
});

feature_set!(EnsuiteFeatures {
    layout => "ensuiteLayout", "Layout / fixtures", "Shower, vanity, WC, etc.";
    condition => "ensuiteCondition", "Condition", "Original, updated, renovated...";
});

feature_set!(FamilyFeatures {
    features => "familyFeatures", "Key features", "Open plan, fireplace, outlook, etc.";
});

feature_set!(LoungeFeatures {
    features => "loungeFeatures", "Key features", "Formal, airy, fireplace, outlook, etc.";
});

feature_set!(TheatreFeatures {
    features => "theatreFeatures", "Theatre details", "Darkened room, speakers, projector wiring...";
});

feature_set!(StudyFeatures {
    features => "studyFeatures", "Study setup", "Built-in desk, storage, nook, etc.";
});

feature_set!(LaundryFeatures {
    storage => "laundryStorage", "Storage / bench", "Overhead cupboards, linen, bench space...";
    access => "laundryAccess", "External access", "Direct to yard / drying area...";
});

feature_set!(MealsFeatures {
    features => "mealsFeatures", "Meals area", "Open to kitchen, outlook, size notes...";
});

feature_set!(RoomNotes {
    notes => "otherNotes", "Room notes", "Use, key features, flexibility, etc.";
});

feature_kinds!(RoomFeatures, notes = RoomNotes;
    Bedroom(BedroomFeatures) => "bedroom",
    Bathroom(BathroomFeatures) => "bathroom",
    Ensuite(EnsuiteFeatures) => "ensuite",
    Kitchen(KitchenFeatures) => "kitchen",
    Meals(MealsFeatures) => "meals",
    Family(FamilyFeatures) => "family",
    Lounge(LoungeFeatures) => "lounge",
    Theatre(TheatreFeatures) => "theatre",
    Study(StudyFeatures) => "study",
    Laundry(LaundryFeatures) => "laundry",
);

// ----- Exterior structures -----

feature_set!(PatioFeatures {
    roof_type => "roofType", "Roof type", "Gable, flat, insulated...";
    paving => "paving", "Floor / paving", "Pavers, concrete, composite deck...";
    power_lighting => "powerLighting", "Power / lighting", "GPOs, lights, fans, heaters...";
});

feature_set!(AlfrescoFeatures {
    finish => "alfrescoFinish", "Finish", "Under main roof, tiled, paved...";
    connection => "alfrescoConnection", "Connection to house", "Stacker doors, bifolds, off kitchen...";
});

feature_set!(DeckFeatures {
    material => "deckMaterial", "Deck material", "Timber, composite, condition...";
});

feature_set!(ShedFeatures {
    power => "shedPower", "Power", "Powered / lights / 3-phase...";
    access => "shedAccess", "Access", "Roller door, vehicle access...";
});

feature_set!(WorkshopFeatures {
    power => "workshopPower", "Power", "Single / 3-phase, circuits...";
    fitout => "workshopFitout", "Fit-out", "Benches, storage, mezzanine...";
});

feature_set!(GarageFeatures {
    doors => "garageDoors", "Doors", "Auto door(s), extra height...";
    access => "garageAccess", "Access", "Shoppers entry, rear roller door...";
});

feature_set!(CarportFeatures {
    cover => "carportCover", "Cover / height", "Extra height, caravan suitable...";
});

feature_set!(PoolFeatures {
    pool_type => "poolType", "Pool type", "Concrete, fibreglass, above-ground...";
    heating => "poolHeating", "Heating", "Solar, electric, gas...";
    compliance => "poolCompliance", "Fencing / compliance", "Compliant fencing, condition...";
});

feature_set!(SpaFeatures {
    spa_type => "spaType", "Spa type", "Standalone, built-in, heated...";
});

feature_set!(TankFeatures {
    capacity => "tankCapacity", "Capacity & use", "Size, plumbed to house or garden...";
});

feature_set!(StableFeatures {
    setup => "stableSetup", "Stable setup", "Number of stalls, flooring, water...";
});

feature_set!(ArenaFeatures {
    surface => "arenaSurface", "Surface", "Sand, grass, purpose-built...";
    size => "arenaSize", "Approx size", "20x40, 20x60, round yard, etc.";
});

feature_set!(DrivewayFeatures {
    material => "drivewayMaterial", "Material", "Concrete, asphalt, gravel...";
});

feature_set!(ExteriorNotes {
    notes => "otherExteriorNotes", "Other notes", "Describe the structure or feature...";
});

feature_kinds!(ExteriorFeatures, notes = ExteriorNotes;
    Patio(PatioFeatures) => "patio",
    Alfresco(AlfrescoFeatures) => "alfresco",
    Deck(DeckFeatures) => "deck",
    Shed(ShedFeatures) => "shed",
    Workshop(WorkshopFeatures) => "workshop",
    Garage(GarageFeatures) => "garage",
    Carport(CarportFeatures) => "carport",
    Pool(PoolFeatures) => "pool",
    Spa(SpaFeatures) => "spa",
    Tank(TankFeatures) => "tank",
    Stable(StableFeatures) => "stable",
    Arena(ArenaFeatures) => "arena",
    Driveway(DrivewayFeatures) => "driveway",
);
