//! Trip Type Policy
//!
//! Keeps the conditional family category in sync with the trip type
//! selector.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ConditionalChange};
use crate::entity::CatalogResult;
use crate::seed;

/// Trip type selected on the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Solo,
    Family,
}

impl TripType {
    pub const ALL: [TripType; 2] = [TripType::Solo, TripType::Family];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Solo => "solo",
            TripType::Family => "family",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Solo => "🧍 Solo Trip",
            TripType::Family => "👨‍👩‍👧‍👦 Family Trip",
        }
    }
}

/// Add the family category for family trips, remove it otherwise
pub fn apply_trip_type(catalog: &mut Catalog, trip_type: TripType) -> CatalogResult<ConditionalChange> {
    catalog.set_conditional_category(trip_type == TripType::Family, &seed::family_template())
}
