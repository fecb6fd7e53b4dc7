use crate::Timestamp;
use central_derive::api_model;

/// User account, as embedded in audit metadata (`creator` / `modifier`).
///
/// Like [`Unit`](super::Unit), unknown keys are ignored on decode.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub admin: Option<bool>,
    pub supervisor: Option<bool>,
    pub enabled: Option<bool>,
    pub deleted: Option<bool>,

    pub creator_id: Option<String>,
    pub create_date: Option<Timestamp>,
    pub modifier_id: Option<String>,
    pub modified_date: Option<Timestamp>,
}
