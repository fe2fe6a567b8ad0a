mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_member_types_are_seeded() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state);

    let query = r#"
        query {
            memberTypes {
                id
                discount
                postsLimitPerMonth
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(
        response.errors.is_empty(),
        "memberTypes should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let member_types = data["memberTypes"].as_array().unwrap();
    let ids: Vec<&str> = member_types
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["basic", "business"]);
}

#[tokio::test]
async fn test_member_type_by_id() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state);

    let query = r#"
        query MemberType($id: MemberTypeId!) {
            memberType(id: $id) {
                id
                discount
                postsLimitPerMonth
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "id": "business" }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["memberType"]["id"], "business");
    assert_eq!(data["memberType"]["discount"], 7.7);
    assert_eq!(data["memberType"]["postsLimitPerMonth"], 100);
}
