use crate::Timestamp;
use central_derive::api_model;

/// Organizational unit, as embedded in records that reference one.
///
/// Backends may expand more unit fields than listed here; unknown keys are
/// ignored on decode and are not carried through a round trip.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Unit {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub area_id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub r#type: Option<String>,
    #[serde(deserialize_with = "crate::number::optional_whole")]
    pub order: Option<i64>,

    pub creator_id: Option<String>,
    pub create_date: Option<Timestamp>,
    pub modifier_id: Option<String>,
    pub modified_date: Option<Timestamp>,
}
