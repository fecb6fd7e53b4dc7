use central_derive::api_model;

#[api_model]
#[derive(Clone, Default, PartialEq)]
pub struct Grade {
    pub id: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "rank")]
    pub order: Option<i32>,
    pub tags: Vec<String>,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false, skip_absent = false)]
pub struct Loose {
    pub legacy_code: Option<String>,
}

fn main() {
    let _ = Grade::default().clone() == Grade::default();
    let _ = Loose { legacy_code: None };
}
