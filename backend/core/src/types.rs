use serde::{Deserialize, Serialize};

/// Outcome of one analysis run: the recognised problem text and the
/// filtered construction commands generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ocr_result: String,
    pub commands: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = AnalysisResult {
            ocr_result: "text".into(),
            commands: "A = Point({0, 0})".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["ocrResult"], "text");
        assert_eq!(json["commands"], "A = Point({0, 0})");
    }
}
