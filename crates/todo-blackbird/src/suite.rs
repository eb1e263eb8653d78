//! The contract case catalogue and its runner
//!
//! [`Suite::standard`] lists every request the API contract covers, each with
//! the [`Expectation`] its response must meet. [`Suite::run`] sends them one
//! at a time, without retries, and collects a [`SuiteReport`].
//!
//! ```rust,no_run
//! use todo_blackbird::{Client, Fixtures, suite::Suite};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://todo-blackbird-3.onrender.com/api/")?;
//! let report = Suite::standard(&Fixtures::default()).run(&client).await;
//!
//! for outcome in report.failures() {
//!     eprintln!("{}: {}", outcome.name, outcome.failure().unwrap_or_default());
//! }
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use crate::{
    client::{Client, encode_segments},
    config::Fixtures,
    contract::Expectation,
    error::{Error, Result},
    http::{Method, Response, StatusCode},
    observability::{RequestTimer, log_case_outcome, log_suite_summary},
    resources::todos::{routes, with_id},
    types::{StatusUpdate, ToDoItem},
};

/// Whether a case exercises the success path or an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Expects a 2xx status.
    Positive,
    /// Expects a 4xx/5xx status.
    Negative,
}

/// One API call a case makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// List active items.
    List,
    /// List soft-deleted items.
    ListDeleted,
    /// Fetch one item.
    Get(String),
    /// Create an item.
    Create(ToDoItem),
    /// Update the item identified by its own id.
    Update(ToDoItem),
    /// Update only the status of an item.
    UpdateStatus(String, StatusUpdate),
    /// Soft-delete an item.
    SoftDelete(String),
    /// Hit the fault-trigger endpoint.
    TriggerServerError,
}

impl Call {
    /// Send the request and return the response, whatever its status.
    pub async fn send(&self, client: &Client) -> Result<Response> {
        let todos = client.todos().with_raw_response();
        match self {
            Call::List => todos.list().await,
            Call::ListDeleted => todos.list_deleted().await,
            Call::Get(id) => todos.get(id).await,
            Call::Create(item) => todos.create(item).await,
            Call::Update(item) => todos.update(item).await,
            Call::UpdateStatus(id, update) => todos.update_status(id, update).await,
            Call::SoftDelete(id) => todos.soft_delete(id).await,
            Call::TriggerServerError => todos.trigger_server_error().await,
        }
    }

    /// HTTP method used by this call.
    pub fn method(&self) -> Method {
        match self {
            Call::List | Call::ListDeleted | Call::Get(_) | Call::TriggerServerError => {
                Method::GET
            }
            Call::Create(_) => Method::POST,
            Call::Update(_) | Call::UpdateStatus(..) => Method::PUT,
            Call::SoftDelete(_) => Method::DELETE,
        }
    }

    /// Path relative to the base URL, e.g. `ToDo/GetToDoById/abc`.
    ///
    /// Ids are percent-encoded exactly as they are sent. An update whose item
    /// has no id shows `{id}` in its place.
    pub fn path(&self) -> String {
        match self {
            Call::List => encode_segments(&routes::LIST),
            Call::ListDeleted => encode_segments(&routes::LIST_DELETED),
            Call::Get(id) => encode_segments(&with_id(routes::GET, id)),
            Call::Create(_) => encode_segments(&routes::CREATE),
            Call::Update(item) => match item.id.as_deref().filter(|id| !id.trim().is_empty()) {
                Some(id) => encode_segments(&with_id(routes::UPDATE, id)),
                None => format!("{}/{{id}}", encode_segments(&routes::UPDATE)),
            },
            Call::UpdateStatus(id, _) => encode_segments(&with_id(routes::UPDATE_STATUS, id)),
            Call::SoftDelete(id) => encode_segments(&with_id(routes::SOFT_DELETE, id)),
            Call::TriggerServerError => encode_segments(&routes::TRIGGER_SERVER_ERROR),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// A request plus the expectation its response must meet.
#[derive(Debug, Clone)]
pub struct ContractCase {
    /// Case name, e.g. `get_todo_by_id_returns_not_found_when_missing`
    pub name: String,
    /// Success path or error path
    pub polarity: Polarity,
    /// Request to send
    pub call: Call,
    /// What the response must look like
    pub expectation: Expectation,
}

impl ContractCase {
    /// Create a case.
    pub fn new(
        name: impl Into<String>,
        polarity: Polarity,
        call: Call,
        expectation: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            polarity,
            call,
            expectation,
        }
    }

    /// Send the request and check the response.
    ///
    /// Transport failures are returned as-is; a mismatch is an
    /// [`Error::UnexpectedStatus`] or [`Error::UnexpectedBody`].
    pub async fn check(&self, client: &Client) -> Result<Response> {
        let response = self.call.send(client).await?;
        self.expectation.verify(&response)?;
        Ok(response)
    }
}

/// An ordered collection of contract cases.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    cases: Vec<ContractCase>,
}

impl Suite {
    /// Build a suite from explicit cases.
    pub fn new(cases: Vec<ContractCase>) -> Self {
        Self { cases }
    }

    /// Every case of the ToDo API contract.
    ///
    /// Positive cases come first, then negative ones. Ids come from
    /// `fixtures`; nothing here depends on another case's side effects.
    pub fn standard(fixtures: &Fixtures) -> Self {
        use Polarity::{Negative, Positive};

        let cases = vec![
            ContractCase::new(
                "get_all_todos_returns_ok",
                Positive,
                Call::List,
                Expectation::ok_with_body(),
            ),
            ContractCase::new(
                "get_all_deleted_todos_returns_ok",
                Positive,
                Call::ListDeleted,
                Expectation::ok_with_body(),
            ),
            ContractCase::new(
                "get_todo_by_id_returns_ok_when_exists",
                Positive,
                Call::Get(fixtures.existing_id.clone()),
                Expectation::ok_with_body(),
            ),
            ContractCase::new(
                "create_todo_returns_created",
                Positive,
                Call::Create(ToDoItem::new("Test Task", "Test Description")),
                Expectation::created_with_body(),
            ),
            ContractCase::new(
                "update_todo_returns_ok_when_exists",
                Positive,
                Call::Update(
                    ToDoItem::new("Updated Test Task", "Updated Test Description")
                        .with_id(fixtures.update_id.clone()),
                ),
                Expectation::ok_with_body(),
            ),
            ContractCase::new(
                "update_status_returns_ok",
                Positive,
                Call::UpdateStatus(fixtures.status_id.clone(), StatusUpdate::new("2")),
                Expectation::ok_with_body(),
            ),
            ContractCase::new(
                "soft_delete_returns_no_content_when_exists",
                Positive,
                Call::SoftDelete(fixtures.delete_id.clone()),
                Expectation::no_content(),
            ),
            ContractCase::new(
                "get_todo_by_id_returns_not_found_when_missing",
                Negative,
                Call::Get(fixtures.missing_id.clone()),
                Expectation::status(StatusCode::NOT_FOUND)
                    .because("the API should return 404 when the item does not exist"),
            ),
            ContractCase::new(
                "create_todo_returns_bad_request_without_name",
                Negative,
                Call::Create(ToDoItem {
                    description: Some("Descripción sin nombre".to_string()),
                    ..Default::default()
                }),
                Expectation::status(StatusCode::BAD_REQUEST)
                    .because("the API should return 400 when the item has no name"),
            ),
            ContractCase::new(
                "update_todo_returns_not_found_when_missing",
                Negative,
                Call::Update(
                    ToDoItem::new("Tarea Actualizada", "Descripción Actualizada")
                        .with_id(fixtures.missing_id.clone()),
                ),
                Expectation::status(StatusCode::NOT_FOUND)
                    .because("the API should return 404 when the item does not exist"),
            ),
            ContractCase::new(
                "soft_delete_returns_not_found_when_missing",
                Negative,
                Call::SoftDelete(fixtures.missing_id.clone()),
                Expectation::status(StatusCode::NOT_FOUND)
                    .because("the API should return 404 when the item does not exist"),
            ),
            ContractCase::new(
                "trigger_server_error_returns_internal_server_error",
                Negative,
                Call::TriggerServerError,
                Expectation::status(StatusCode::INTERNAL_SERVER_ERROR)
                    .because("the API should return 500 when an internal error occurs"),
            ),
        ];

        Self { cases }
    }

    /// Only the cases of the given polarity.
    pub fn filter(self, polarity: Polarity) -> Self {
        Self {
            cases: self
                .cases
                .into_iter()
                .filter(|case| case.polarity == polarity)
                .collect(),
        }
    }

    /// Positive cases of the standard suite.
    pub fn positive(fixtures: &Fixtures) -> Self {
        Self::standard(fixtures).filter(Polarity::Positive)
    }

    /// Negative cases of the standard suite.
    pub fn negative(fixtures: &Fixtures) -> Self {
        Self::standard(fixtures).filter(Polarity::Negative)
    }

    /// The cases, in run order.
    pub fn cases(&self) -> &[ContractCase] {
        &self.cases
    }

    /// Look a case up by name.
    pub fn case(&self, name: &str) -> Option<&ContractCase> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every case in order, one request at a time.
    ///
    /// A failing case never stops the run; a transport failure is recorded
    /// as that case's failure.
    pub async fn run(&self, client: &Client) -> SuiteReport {
        let suite_timer = RequestTimer::start();
        let mut outcomes = Vec::with_capacity(self.cases.len());

        for case in &self.cases {
            let timer = RequestTimer::start();
            let (status, result) = match case.call.send(client).await {
                Ok(response) => (
                    Some(response.status().as_u16()),
                    case.expectation.verify(&response),
                ),
                Err(err) => (None, Err(err)),
            };
            let elapsed = timer.elapsed();

            let failure = result.as_ref().err().map(ToString::to_string);
            log_case_outcome(&case.name, status, elapsed, failure.as_deref());

            outcomes.push(CaseOutcome {
                name: case.name.clone(),
                polarity: case.polarity,
                status,
                elapsed,
                result,
            });
        }

        let report = SuiteReport {
            outcomes,
            elapsed: suite_timer.elapsed(),
        };
        log_suite_summary(report.passed(), report.failed(), report.elapsed);
        report
    }
}

/// Result of running one case.
#[derive(Debug)]
pub struct CaseOutcome {
    /// Case name
    pub name: String,
    /// Success path or error path
    pub polarity: Polarity,
    /// Status returned, if a response arrived
    pub status: Option<u16>,
    /// Time spent on the case
    pub elapsed: Duration,
    /// `Ok` when the response met the expectation
    pub result: Result<()>,
}

impl CaseOutcome {
    /// Whether the case passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Failure message, if the case failed.
    pub fn failure(&self) -> Option<String> {
        self.result.as_ref().err().map(ToString::to_string)
    }

    /// The error, if the case failed.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Outcomes of a suite run.
#[derive(Debug)]
pub struct SuiteReport {
    outcomes: Vec<CaseOutcome>,
    elapsed: Duration,
}

impl SuiteReport {
    /// All outcomes, in run order.
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    /// Outcome of the named case.
    pub fn outcome(&self, name: &str) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    /// Failed outcomes only.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    /// Number of passing cases.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    /// Number of failing cases.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every case passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Total wall time of the run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} passed, {} failed in {:?}",
            self.passed(),
            self.failed(),
            self.elapsed
        )?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "  ok    {}", outcome.name)?,
                Err(err) => writeln!(f, "  FAIL  {}: {}", outcome.name, err)?,
            }
        }
        Ok(())
    }
}
