//! Integration tests for the assessment pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. SubmitAssessmentHandler validates, predicts, persists, and counts
//! 2. Gateway failures fall back to the deterministic engine silently
//! 3. GetHistoryHandler pages the stored submissions newest first
//! 4. GetTrendHandler derives the trend from the two newest classifications
//!
//! Uses in-memory implementations to test the pipeline without external
//! dependencies.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use mindguard::adapters::predictor::{EnginePredictor, FailoverPredictor, MockPredictor};
use mindguard::application::handlers::{
    GetHistoryHandler, GetHistoryQuery, GetTrendHandler, GetTrendQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use mindguard::domain::assessment::{
    AssessmentError, Confidence, FactorInput, Provenance, RiskAssessment, RiskLevel, Submission,
    Trend,
};
use mindguard::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use mindguard::ports::{
    PageRequest, PredictorError, SubmissionCounter, SubmissionPage, SubmissionStore,
    SubmissionView,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory submission store for testing.
///
/// Keeps submissions in insertion order and serves history pages newest
/// first, the same contract the PostgreSQL adapter honors.
struct TestStore {
    submissions: Mutex<Vec<Submission>>,
    fail_writes: bool,
}

impl TestStore {
    fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    fn stored_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStore for TestStore {
    async fn record(&self, submission: &Submission) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Insert failed",
            ));
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<SubmissionPage, DomainError> {
        let submissions = self.submissions.lock().unwrap();
        // Reverse insertion order stands in for ORDER BY created_at DESC.
        let owned: Vec<&Submission> = submissions
            .iter()
            .rev()
            .filter(|s| s.user_id() == user_id)
            .collect();

        let items: Vec<SubmissionView> = owned
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|s| SubmissionView::from(*s))
            .collect();

        Ok(SubmissionPage {
            items,
            page: page.page(),
            limit: page.limit(),
            total: owned.len() as u64,
        })
    }
}

/// In-memory per-user counter for testing.
#[derive(Default)]
struct TestCounter {
    counts: Mutex<HashMap<String, u32>>,
    increments: AtomicU32,
}

impl TestCounter {
    fn count_for(&self, user_id: &UserId) -> u32 {
        self.counts
            .lock()
            .unwrap()
            .get(user_id.as_str())
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SubmissionCounter for TestCounter {
    async fn increment(&self, user_id: &UserId) -> Result<(), DomainError> {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(user_id.as_str().to_string())
            .or_insert(0) += 1;
        self.increments.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn user() -> UserId {
    UserId::new("user-1").unwrap()
}

/// The worked questionnaire example: scores 91.5 on the local engine.
fn high_risk_input() -> FactorInput {
    FactorInput {
        sleep_hours: Some(5),
        anxiety_level: Some(8),
        stress_frequency: Some(7),
        financial_stress: Some(6),
        social_support: Some(3),
        work_life_balance: Some(4),
        physical_activity: Some(3),
        substance_use: Some(2),
        mood_changes: Some(6),
        suicidal_thoughts: Some(1),
    }
}

/// A calm questionnaire: scores 0 on the local engine.
fn low_risk_input() -> FactorInput {
    FactorInput {
        sleep_hours: Some(7),
        anxiety_level: Some(1),
        stress_frequency: Some(1),
        financial_stress: Some(1),
        social_support: Some(10),
        work_life_balance: Some(10),
        physical_activity: Some(10),
        substance_use: Some(1),
        mood_changes: Some(1),
        suicidal_thoughts: Some(1),
    }
}

fn command(factors: FactorInput) -> SubmitAssessmentCommand {
    SubmitAssessmentCommand {
        user_id: user(),
        factors,
        provenance: Provenance::new(Some("198.51.100.4".to_string()), Some("web".to_string())),
    }
}

fn remote_assessment(level: RiskLevel) -> RiskAssessment {
    RiskAssessment::from_parts(
        level,
        Confidence::try_new(0.93).unwrap(),
        vec!["Remote guidance".to_string()],
        Timestamp::now(),
    )
    .unwrap()
}

fn submit_handler(
    predictor: MockPredictor,
    store: Arc<TestStore>,
    counter: Arc<TestCounter>,
) -> SubmitAssessmentHandler {
    SubmitAssessmentHandler::new(
        Arc::new(FailoverPredictor::new(predictor, EnginePredictor::new())),
        store,
        counter,
    )
}

// =============================================================================
// Submit path
// =============================================================================

#[tokio::test]
async fn submission_persists_and_counts_exactly_once() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(
        MockPredictor::new().with_success(remote_assessment(RiskLevel::Low)),
        store.clone(),
        counter.clone(),
    );

    let result = handler.handle(command(high_risk_input())).await.unwrap();

    assert_eq!(store.stored_count(), 1);
    assert_eq!(counter.count_for(&user()), 1);
    assert_eq!(result.assessment.risk_level(), RiskLevel::Low);
    assert_eq!(result.assessment.confidence().value(), 0.93);
}

#[tokio::test]
async fn each_gateway_failure_mode_resolves_through_the_engine() {
    let failures = [
        PredictorError::Timeout { timeout_secs: 10 },
        PredictorError::Network("connection refused".to_string()),
        PredictorError::Status(502),
        PredictorError::MalformedResponse("missing prediction".to_string()),
    ];

    for failure in failures {
        let store = Arc::new(TestStore::new());
        let counter = Arc::new(TestCounter::default());
        let handler = submit_handler(
            MockPredictor::new().with_error(failure),
            store.clone(),
            counter.clone(),
        );

        let result = handler.handle(command(high_risk_input())).await.unwrap();

        // The engine scores the worked example 91.5: High, 0.82, set C.
        assert_eq!(result.assessment.risk_level(), RiskLevel::High);
        assert_eq!(result.assessment.confidence().value(), 0.82);
        assert_eq!(
            result.assessment.recommendations(),
            RiskLevel::High
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .as_slice()
        );
        assert_eq!(store.stored_count(), 1);
        assert_eq!(counter.count_for(&user()), 1);
    }
}

#[tokio::test]
async fn rejected_payload_produces_no_side_effect() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(
        MockPredictor::new().with_success(remote_assessment(RiskLevel::Low)),
        store.clone(),
        counter.clone(),
    );

    let mut input = high_risk_input();
    input.sleep_hours = Some(13);
    input.anxiety_level = None;
    input.suicidal_thoughts = Some(0);

    let err = handler.handle(command(input)).await.unwrap_err();

    match err {
        AssessmentError::Validation(violations) => {
            let fields: Vec<&str> = violations
                .violations()
                .iter()
                .map(|v| v.field.as_str())
                .collect();
            assert_eq!(fields, vec!["sleepHours", "anxietyLevel", "suicidalThoughts"]);
        }
        other => panic!("Expected validation rejection, got {:?}", other),
    }
    assert_eq!(store.stored_count(), 0);
    assert_eq!(counter.count_for(&user()), 0);
}

#[tokio::test]
async fn persistence_failure_reports_no_assessment() {
    let store = Arc::new(TestStore::failing());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(
        MockPredictor::new().with_success(remote_assessment(RiskLevel::Low)),
        store,
        counter.clone(),
    );

    let err = handler.handle(command(high_risk_input())).await.unwrap_err();

    assert!(matches!(err, AssessmentError::Storage(_)));
    assert_eq!(counter.count_for(&user()), 0);
}

// =============================================================================
// History and trend over the same store
// =============================================================================

#[tokio::test]
async fn history_pages_twenty_five_submissions_as_three_pages() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(
        // Empty script: every predict call fails over to the engine.
        MockPredictor::new(),
        store.clone(),
        counter.clone(),
    );

    for _ in 0..25 {
        handler.handle(command(low_risk_input())).await.unwrap();
    }
    assert_eq!(counter.count_for(&user()), 25);

    let history = GetHistoryHandler::new(store);
    let page = history
        .handle(GetHistoryQuery {
            user_id: user(),
            page: Some(2),
            limit: Some(10),
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.pages(), 3);
}

#[tokio::test]
async fn history_orders_newest_first() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(MockPredictor::new(), store.clone(), counter);

    handler.handle(command(low_risk_input())).await.unwrap();
    handler.handle(command(high_risk_input())).await.unwrap();

    let history = GetHistoryHandler::new(store);
    let page = history
        .handle(GetHistoryQuery::first_page(user()))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].assessment.risk_level(), RiskLevel::High);
    assert_eq!(page.items[1].assessment.risk_level(), RiskLevel::Low);
    assert!(!page.items[0].created_at.is_before(&page.items[1].created_at));
}

#[tokio::test]
async fn trend_tracks_the_two_newest_submissions() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(MockPredictor::new(), store.clone(), counter);
    let trend = GetTrendHandler::new(store);
    let query = || GetTrendQuery { user_id: user() };

    assert_eq!(trend.handle(query()).await.unwrap(), None);

    handler.handle(command(high_risk_input())).await.unwrap();
    assert_eq!(trend.handle(query()).await.unwrap(), None);

    // High then Low: the newest classification fell below the previous one.
    handler.handle(command(low_risk_input())).await.unwrap();
    assert_eq!(trend.handle(query()).await.unwrap(), Some(Trend::Improving));

    handler.handle(command(low_risk_input())).await.unwrap();
    assert_eq!(trend.handle(query()).await.unwrap(), Some(Trend::Stable));

    handler.handle(command(high_risk_input())).await.unwrap();
    assert_eq!(trend.handle(query()).await.unwrap(), Some(Trend::Worsening));
}

#[tokio::test]
async fn history_is_scoped_to_the_requesting_user() {
    let store = Arc::new(TestStore::new());
    let counter = Arc::new(TestCounter::default());
    let handler = submit_handler(MockPredictor::new(), store.clone(), counter);

    handler.handle(command(low_risk_input())).await.unwrap();
    handler
        .handle(SubmitAssessmentCommand {
            user_id: UserId::new("user-2").unwrap(),
            factors: high_risk_input(),
            provenance: Provenance::default(),
        })
        .await
        .unwrap();

    let history = GetHistoryHandler::new(store);
    let page = history
        .handle(GetHistoryQuery::first_page(user()))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].assessment.risk_level(), RiskLevel::Low);
}
