mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use infra::MemberTypeId;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_profile_and_resolve_member_type() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());

    let user_id = create_test_user(&app_state, &unique("profiled")).await;

    let variables = Variables::from_json(json!({
        "dto": {
            "isMale": false,
            "yearOfBirth": 1985,
            "memberTypeId": "business",
            "userId": user_id
        }
    }));
    let response = execute_graphql(
        &schema,
        r#"
        mutation CreateProfile($dto: CreateProfileInput!) {
            createProfile(dto: $dto) {
                id
                isMale
                yearOfBirth
                userId
                memberType { id postsLimitPerMonth }
            }
        }
        "#,
        Some(variables),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let profile = &data["createProfile"];
    assert_eq!(profile["isMale"], false);
    assert_eq!(profile["yearOfBirth"], 1985);
    assert_eq!(profile["userId"], user_id.to_string());
    assert_eq!(profile["memberType"]["id"], "business");
    assert_eq!(profile["memberType"]["postsLimitPerMonth"], 100);
}

#[tokio::test]
async fn test_second_profile_for_same_user_conflicts() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());

    let user_id = create_test_user(&app_state, &unique("single")).await;
    create_test_profile(&app_state, user_id, MemberTypeId::Basic).await;

    let variables = Variables::from_json(json!({
        "dto": {
            "isMale": true,
            "yearOfBirth": 2000,
            "memberTypeId": "basic",
            "userId": user_id
        }
    }));
    let response = execute_graphql(
        &schema,
        "mutation ($dto: CreateProfileInput!) { createProfile(dto: $dto) { id } }",
        Some(variables),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("CONFLICT"));
}

#[tokio::test]
async fn test_profile_by_id_and_unknown_id() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());

    let user_id = create_test_user(&app_state, &unique("lookup")).await;
    let profile_id = create_test_profile(&app_state, user_id, MemberTypeId::Basic).await;

    let query = "query ($id: UUID!) { profile(id: $id) { id memberTypeId } }";

    let found = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "id": profile_id }))),
    )
    .await;
    assert!(found.errors.is_empty(), "{:?}", found.errors);
    let data = found.data.into_json().unwrap();
    assert_eq!(data["profile"]["id"], profile_id.to_string());
    assert_eq!(data["profile"]["memberTypeId"], "basic");

    let missing = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "id": Uuid::new_v4() }))),
    )
    .await;
    assert!(missing.errors.is_empty(), "{:?}", missing.errors);
    assert!(missing.data.into_json().unwrap()["profile"].is_null());
}

#[tokio::test]
async fn test_change_profile_updates_only_given_fields() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());

    let user_id = create_test_user(&app_state, &unique("upgrade")).await;
    let profile_id = create_test_profile(&app_state, user_id, MemberTypeId::Basic).await;

    let variables = Variables::from_json(json!({
        "id": profile_id,
        "dto": { "memberTypeId": "business" }
    }));
    let response = execute_graphql(
        &schema,
        r#"
        mutation ($id: UUID!, $dto: ChangeProfileInput!) {
            changeProfile(id: $id, dto: $dto) { id yearOfBirth memberTypeId }
        }
        "#,
        Some(variables),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["changeProfile"]["memberTypeId"], "business");
    assert_eq!(data["changeProfile"]["yearOfBirth"], 1990);
}

#[tokio::test]
async fn test_change_unknown_profile_is_not_found() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state);

    let missing_id = Uuid::new_v4();
    let variables = Variables::from_json(json!({
        "id": missing_id,
        "dto": { "yearOfBirth": 1970 }
    }));
    let response = execute_graphql(
        &schema,
        "mutation ($id: UUID!, $dto: ChangeProfileInput!) { changeProfile(id: $id, dto: $dto) { id } }",
        Some(variables),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("NOT_FOUND"));
    assert!(response.errors[0]
        .message
        .contains(&missing_id.to_string()));
}

#[tokio::test]
async fn test_delete_profile() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());

    let user_id = create_test_user(&app_state, &unique("unprofiled")).await;
    let profile_id = create_test_profile(&app_state, user_id, MemberTypeId::Basic).await;

    let delete = "mutation ($id: UUID!) { deleteProfile(id: $id) }";
    let response = execute_graphql(
        &schema,
        delete,
        Some(Variables::from_json(json!({ "id": profile_id }))),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(response.data.into_json().unwrap()["deleteProfile"], true);

    let again = execute_graphql(
        &schema,
        delete,
        Some(Variables::from_json(json!({ "id": profile_id }))),
    )
    .await;
    assert_eq!(again.data.into_json().unwrap()["deleteProfile"], false);
}
