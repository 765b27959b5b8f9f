//! Small closed enumerations shared across the workspace.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Phone filter accepted by the `allPeople` query.
///
/// Serialized as `YES` / `NO` to match the external `YesNo` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "bindings/")]
pub enum PhoneFilter {
    /// Only people that have a phone number.
    Yes,
    /// Only people without a phone number.
    No,
}

impl PhoneFilter {
    /// Whether a record with the given phone presence passes this filter.
    pub const fn accepts(self, has_phone: bool) -> bool {
        match self {
            Self::Yes => has_phone,
            Self::No => !has_phone,
        }
    }
}

/// Whether a phone number must be supplied when a person is created.
///
/// Each backend declares a default; deployments may override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonePolicy {
    /// `phone` may be omitted.
    #[default]
    Optional,
    /// `phone` must be present.
    Required,
}

impl PhonePolicy {
    /// Whether the policy demands a phone number.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}
