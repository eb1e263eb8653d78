//! Live test utilities
//!
//! Configuration comes from the same `TODO_API_*` variables the library
//! reads, with `.env` support.

use todo_blackbird::{Client, Fixtures};

/// Client and fixture ids for one test
pub struct TestContext {
    pub client: Client,
    pub fixtures: Fixtures,
}

impl TestContext {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        todo_blackbird::observability::init_tracing();

        let client = Client::from_env()?;
        let fixtures = Fixtures::from_env();
        println!("\n🌐 Target: {}", client.base_url());

        Ok(Self { client, fixtures })
    }
}
