use central_domain::Timestamp;
use central_domain::organization::{Account, Rank, Unit};
use serde_json::{Value, json};

fn account(id: &str, name: &str) -> Account {
    Account {
        id: Some(id.to_owned()),
        username: Some(name.to_lowercase()),
        name: Some(name.to_owned()),
        admin: Some(false),
        enabled: Some(true),
        create_date: Some(Timestamp::from_millis(1_600_000_000_000)),
        ..Account::default()
    }
}

fn full_rank() -> Rank {
    Rank {
        id: Some("r-100".to_owned()),
        code: Some("G7".to_owned()),
        name: Some("Senior Engineer".to_owned()),
        unit_id: Some("u-1".to_owned()),
        unit: Some(Unit {
            id: Some("u-1".to_owned()),
            parent_id: Some("u-0".to_owned()),
            code: Some("RND".to_owned()),
            name: Some("Research".to_owned()),
            r#type: Some("0".to_owned()),
            order: Some(2),
            ..Unit::default()
        }),
        order: Some(7),
        creator_id: Some("a-1".to_owned()),
        create_date: Some(Timestamp::from_millis(1_665_014_400_000)),
        creator: Some(account("a-1", "Alan")),
        modifier_id: Some("a-2".to_owned()),
        modified_date: Some(Timestamp::from_millis(1_665_100_800_000)),
        modifier: Some(account("a-2", "Grace")),
    }
}

#[test]
fn empty_object_is_a_valid_rank() {
    let rank: Rank = serde_json::from_value(json!({})).expect("deserialize");
    assert_eq!(rank, Rank::default());
}

#[test]
fn empty_rank_serializes_to_empty_object() {
    let value = serde_json::to_value(Rank::default()).expect("serialize");
    assert_eq!(value, json!({}));
}

#[test]
fn fully_populated_rank_uses_wire_names() {
    let value = serde_json::to_value(full_rank()).expect("serialize");
    let Value::Object(map) = &value else { panic!("expected an object") };

    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "code",
            "createDate",
            "creator",
            "creatorId",
            "id",
            "modifiedDate",
            "modifier",
            "modifierId",
            "name",
            "order",
            "unit",
            "unitId",
        ]
    );
    assert_eq!(value["createDate"], json!(1_665_014_400_000_i64));
    assert_eq!(value["unit"]["parentId"], json!("u-0"));
    assert_eq!(value["unit"]["type"], json!("0"));
    assert_eq!(value["creator"]["username"], json!("alan"));
}

#[test]
fn fully_populated_rank_round_trips() {
    let rank = full_rank();
    let text = serde_json::to_string(&rank).expect("serialize");
    let back: Rank = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, rank);
}

#[test]
fn foreign_key_and_embed_are_independent() {
    let only_id: Rank = serde_json::from_value(json!({ "unitId": "u-1" })).expect("deserialize");
    assert_eq!(only_id.unit_id.as_deref(), Some("u-1"));
    assert!(only_id.unit.is_none());

    let only_embed: Rank =
        serde_json::from_value(json!({ "unit": { "id": "u-1" } })).expect("deserialize");
    assert!(only_embed.unit_id.is_none());
    assert_eq!(only_embed.unit.and_then(|u| u.id).as_deref(), Some("u-1"));
}

#[test]
fn creator_and_modifier_are_independent() {
    let rank: Rank = serde_json::from_value(json!({
        "creatorId": "a-1",
        "modifier": { "id": "a-2", "name": "Grace" }
    }))
    .expect("deserialize");

    assert_eq!(rank.creator_id.as_deref(), Some("a-1"));
    assert!(rank.creator.is_none());
    assert!(rank.modifier_id.is_none());
    assert_eq!(rank.modifier.and_then(|m| m.name).as_deref(), Some("Grace"));
}

#[test]
fn field_types_are_enforced() {
    assert!(serde_json::from_value::<Rank>(json!({ "order": "first" })).is_err());
    assert!(serde_json::from_value::<Rank>(json!({ "createDate": "2022-10-06" })).is_err());
    assert!(serde_json::from_value::<Rank>(json!({ "code": 7 })).is_err());
    assert!(serde_json::from_value::<Rank>(json!({ "unitId": 1 })).is_err());

    let rank: Rank =
        serde_json::from_value(json!({ "order": -1, "modifiedDate": 0 })).expect("deserialize");
    assert_eq!(rank.order, Some(-1));
    assert_eq!(rank.modified_date, Some(Timestamp::from_millis(0)));
}

#[test]
fn numbers_from_double_only_producers_are_read() {
    let rank: Rank = serde_json::from_str(
        r#"{ "order": 2.0, "createDate": 1665014400000.0, "unit": { "order": 4.0 } }"#,
    )
    .expect("integral floats");
    assert_eq!(rank.order, Some(2));
    assert_eq!(rank.create_date, Some(Timestamp::from_millis(1_665_014_400_000)));
    assert_eq!(rank.unit.and_then(|u| u.order), Some(4));

    let wide: Rank = serde_json::from_str(r#"{ "order": 3000000000 }"#).expect("beyond i32");
    assert_eq!(wide.order, Some(3_000_000_000));
    assert_eq!(serde_json::to_string(&wide).expect("encode"), r#"{"order":3000000000}"#);

    let err = serde_json::from_str::<Rank>(r#"{ "order": 1.5 }"#).expect_err("fractional");
    assert!(err.to_string().contains("a whole number"));
    assert!(serde_json::from_str::<Rank>(r#"{ "modifiedDate": 0.25 }"#).is_err());
}

#[test]
fn unknown_rank_fields_are_rejected() {
    let err = serde_json::from_value::<Rank>(json!({ "id": "r", "grade": 3 }))
        .expect_err("unknown field");
    assert!(err.to_string().contains("grade"));
}

#[test]
fn embedded_records_tolerate_extra_fields() {
    let rank: Rank = serde_json::from_value(json!({
        "unit": { "id": "u-1", "departments": [] },
        "creator": { "id": "a-1", "roles": [] }
    }))
    .expect("deserialize");

    assert_eq!(rank.unit_ref(), Some("u-1"));
    assert_eq!(rank.creator_ref(), Some("a-1"));
}

#[test]
fn nulls_are_read_as_absent_and_not_written_back() {
    let rank: Rank = serde_json::from_value(json!({ "id": "r-1", "name": null, "unit": null }))
        .expect("deserialize");
    assert_eq!(serde_json::to_value(&rank).expect("serialize"), json!({ "id": "r-1" }));
}
