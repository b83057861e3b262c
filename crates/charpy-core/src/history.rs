use serde::Serialize;

use crate::result::TestResult;

/// Append-only list of completed test results.
///
/// Owned by the surrounding application; the simulation core hands it one
/// finished `TestResult` per completed run and never reads it back. The
/// chart/report and analysis collaborators consume it whole, via `as_slice`
/// or the JSON export.
#[derive(Debug, Default, Serialize)]
pub struct TestHistory {
    entries: Vec<TestResult>,
}

impl TestHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed result. Results are stored in completion order.
    pub fn push(&mut self, result: TestResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TestResult> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestResult> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[TestResult] {
        &self.entries
    }

    /// Serialize the full history for the report and analysis consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TestResult;
    use crate::test_helpers::test_material;

    fn sample_result(absorbed: f64) -> TestResult {
        TestResult::new(test_material(absorbed), 250.0, absorbed, 60.0, true)
    }

    #[test]
    fn push_preserves_completion_order() {
        let mut history = TestHistory::new();
        history.push(sample_result(10.0));
        history.push(sample_result(20.0));
        history.push(sample_result(30.0));

        let absorbed: Vec<f64> = history.iter().map(|r| r.absorbed_energy_j).collect();
        assert_eq!(absorbed, vec![10.0, 20.0, 30.0]);
        assert_eq!(history.last().unwrap().absorbed_energy_j, 30.0);
    }

    #[test]
    fn empty_history() {
        let history = TestHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn json_export_contains_material_id() {
        let mut history = TestHistory::new();
        history.push(sample_result(10.0));
        let json = history.to_json().unwrap();
        assert!(json.contains("\"test\""), "JSON should name the material id");
        assert!(json.contains("absorbed_energy_j"));
    }
}
