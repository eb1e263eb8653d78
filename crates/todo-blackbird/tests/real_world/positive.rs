//! Live checks for the happy paths of every endpoint

use super::common::TestContext;
use todo_blackbird::{Expectation, StatusUpdate, ToDoItem};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
#[ignore]
async fn real_world_positive_get_all_todos() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx.client.todos().with_raw_response().list().await?;
    Expectation::ok_with_body().verify(&response)?;

    let items: Vec<ToDoItem> = response.json()?;
    println!("✅ {} active items", items.len());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_positive_get_all_deleted_todos() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx.client.todos().with_raw_response().list_deleted().await?;
    Expectation::ok_with_body().verify(&response)?;

    let items: Vec<ToDoItem> = response.json()?;
    println!("✅ {} deleted items", items.len());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_positive_get_todo_by_id() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .get(&ctx.fixtures.existing_id)
        .await?;
    Expectation::ok_with_body().verify(&response)?;

    println!("✅ {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_positive_create_todo() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .create(&ToDoItem::new("Test Task", "Test Description"))
        .await?;
    Expectation::created_with_body().verify(&response)?;

    println!("✅ {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_positive_update_todo() -> TestResult {
    let ctx = TestContext::from_env()?;

    let item = ToDoItem::new("Updated Test Task", "Updated Test Description")
        .with_id(ctx.fixtures.update_id.clone());
    let response = ctx.client.todos().with_raw_response().update(&item).await?;
    Expectation::ok_with_body().verify(&response)?;

    println!("✅ {}", response.text_lossy());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn real_world_positive_update_status() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .update_status(&ctx.fixtures.status_id, &StatusUpdate::new("2"))
        .await?;
    Expectation::ok_with_body().verify(&response)?;

    println!("✅ {}", response.text_lossy());
    Ok(())
}

/// Passes once per seeded record: the API answers 404 after the item is gone.
#[tokio::test]
#[ignore]
async fn real_world_positive_soft_delete() -> TestResult {
    let ctx = TestContext::from_env()?;

    let response = ctx
        .client
        .todos()
        .with_raw_response()
        .soft_delete(&ctx.fixtures.delete_id)
        .await?;
    Expectation::no_content().verify(&response)?;

    println!("✅ soft-deleted {}", ctx.fixtures.delete_id);
    Ok(())
}
