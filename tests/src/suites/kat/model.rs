//! Pure data model for known-answer vectors

use std::collections::HashMap;

use serde::Deserialize;

/// One test case; every field other than the id and verdict is a hex or
/// text input keyed by name (`key`, `iv`, `pt`, `ct`, `msg`, `md`, ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default = "default_expected_result")]
    pub expected_result: String,
    #[serde(flatten)]
    pub inputs: HashMap<String, String>,
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    /// Whether the engine is expected to reject this case
    pub fn expects_failure(&self) -> bool {
        self.expected_result != "valid"
    }
}

/// Cases sharing a test type, a direction and default inputs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub test_type: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    pub tests: Vec<TestCase>,
}

/// A whole vector file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    #[serde(rename = "vsId")]
    pub suite_id: u64,
    pub algorithm: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}
