//! Data shapes exchanged with the test generator.
//!
//! These mirror the JSON the generator model produces and the executor
//! consumes; wire names keep the generator's casing.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single proposed test scenario produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestProposal {
    /// Functional grouping the proposal belongs to.
    pub category: String,
    /// Human readable identifier for the proposal.
    #[serde(rename = "test-name")]
    pub test_name: String,
    /// Narrative explanation of what the test covers.
    pub description: String,
    /// Code areas, features, or tags the test is expected to exercise.
    pub cover: Vec<String>,
}

/// Everything required to execute a generated test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Identifier the executor uses for the test.
    pub name: String,
    pub description: String,
    /// Outcome that determines if the test passes.
    pub expected_result: String,
    /// Preparation steps before the test runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    /// Cleanup steps after the test finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teardown: Option<String>,
}

/// Generated proposals plus optional metadata about the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestGenerationResult {
    pub proposals: Vec<TestProposal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// ISO-8601 UTC time the generation ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Wraps raw proposals with default metadata, stamping the generation time.
pub fn to_generation_result(proposals: Vec<TestProposal>) -> TestGenerationResult {
    TestGenerationResult {
        proposals,
        summary: None,
        timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}
