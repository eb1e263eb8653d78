//! Live checks for the API's error responses

use super::common::TestContext;
use todo_blackbird::http::StatusCode;
use todo_blackbird::{Expectation, ToDoItem};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
#[ignore]
async fn real_world_negative_get_missing_todo() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .get(&ctx.fixtures.missing_id)
        .await?;
    Expectation::status(StatusCode::NOT_FOUND)
        .because("the API should return 404 when the item does not exist")
        .verify(&response)?;

    println!("✅ 404: {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_negative_create_without_name() -> TestResult {
    let ctx = TestContext::from_env()?;

    let item = ToDoItem::builder()
        .description("Descripción sin nombre")
        .build()?;
    let response = ctx.client.todos().with_raw_response().create(&item).await?;
    Expectation::status(StatusCode::BAD_REQUEST)
        .because("the API should return 400 when the item has no name")
        .verify(&response)?;

    println!("✅ 400: {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_negative_update_missing_todo() -> TestResult {
    let ctx = TestContext::from_env()?;

    let item = ToDoItem::new("Tarea Actualizada", "Descripción Actualizada")
        .with_id(ctx.fixtures.missing_id.clone());
    let response = ctx.client.todos().with_raw_response().update(&item).await?;
    Expectation::status(StatusCode::NOT_FOUND)
        .because("the API should return 404 when the item does not exist")
        .verify(&response)?;

    println!("✅ 404: {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_negative_soft_delete_missing_todo() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .soft_delete(&ctx.fixtures.missing_id)
        .await?;
    Expectation::status(StatusCode::NOT_FOUND)
        .because("the API should return 404 when the item does not exist")
        .verify(&response)?;

    println!("✅ 404: {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_negative_trigger_server_error() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .trigger_server_error()
        .await?;
    Expectation::status(StatusCode::INTERNAL_SERVER_ERROR)
        .because("the API should return 500 when an internal error occurs")
        .verify(&response)?;

    println!("✅ 500: {}", response.text_lossy());
    Ok(())
}
