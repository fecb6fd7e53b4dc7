use super::{Account, Unit};
use crate::Timestamp;
use central_derive::api_model;

/// A rank (grade) within an organizational unit, with audit metadata.
///
/// Every field is independently optional; [`Rank::default`] is the all-absent record.
///
/// The relations come in pairs: `unit_id`/`unit`, `creator_id`/`creator` and
/// `modifier_id`/`modifier`. The `..._id` field is authoritative. The embedded
/// record is filled only when the producer expanded the relation, may be stale,
/// and may be present with or without its id.
#[api_model]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Rank {
    /// Assigned by the owning store; absent until the record is created.
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub unit_id: Option<String>,
    pub unit: Option<Unit>,
    /// Sort position among the unit's ranks. Direction is up to the consumer.
    #[serde(deserialize_with = "crate::number::optional_whole")]
    pub order: Option<i64>,

    pub creator_id: Option<String>,
    pub create_date: Option<Timestamp>,
    pub creator: Option<Account>,
    pub modifier_id: Option<String>,
    pub modified_date: Option<Timestamp>,
    pub modifier: Option<Account>,
}

/// Write-side payload for creating or updating a rank.
///
/// `id` is absent for inserts and identifies the target on updates. Audit
/// fields are stamped by the store and relations are referenced by id only.
#[api_model]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RankInput {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub unit_id: Option<String>,
    #[serde(deserialize_with = "crate::number::optional_whole")]
    pub order: Option<i64>,
}

impl From<&Rank> for RankInput {
    fn from(rank: &Rank) -> Self {
        Self {
            id: rank.id.clone(),
            code: rank.code.clone(),
            name: rank.name.clone(),
            unit_id: rank.unit_id.clone(),
            order: rank.order,
        }
    }
}

impl From<Rank> for RankInput {
    fn from(rank: Rank) -> Self {
        Self { id: rank.id, code: rank.code, name: rank.name, unit_id: rank.unit_id, order: rank.order }
    }
}
