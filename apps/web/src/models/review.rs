use serde::{Deserialize, Serialize};

/// Structured analysis result returned by the analysis backend for one resume.
/// Only ever built by decoding a successful backend response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub score: u8, // 0 – 10
    pub summary: String,
    pub recommendations: Vec<String>,
    pub job_fit: String,
    pub verdict: Verdict,
    pub grammar_issues: u32,
    pub highlighted_projects: Vec<String>,
    pub tech_stack_strengths: Vec<String>,
}

/// Overall assessment attached to a review.
///
/// The backend contract names three values. Anything else is kept verbatim in
/// `Unrecognized` so the page still renders with a neutral badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    StrongCandidate,
    Pass,
    NeedsImprovement,
    Unrecognized(String),
}

impl Verdict {
    pub fn label(&self) -> &str {
        match self {
            Verdict::StrongCandidate => "strong candidate",
            Verdict::Pass => "pass",
            Verdict::NeedsImprovement => "needs improvement",
            Verdict::Unrecognized(raw) => raw,
        }
    }

    /// CSS class for the verdict badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Verdict::StrongCandidate => "badge-strong",
            Verdict::Pass => "badge-pass",
            Verdict::NeedsImprovement => "badge-improve",
            Verdict::Unrecognized(_) => "badge-neutral",
        }
    }
}

impl From<String> for Verdict {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "strong candidate" => Verdict::StrongCandidate,
            "pass" => Verdict::Pass,
            "needs improvement" => Verdict::NeedsImprovement,
            _ => Verdict::Unrecognized(raw),
        }
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        verdict.label().to_string()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
pub(crate) fn sample_review() -> Review {
    Review {
        pros: vec![
            "Clear focus on backend development.".to_string(),
            "Demonstrated teamwork through hackathon wins.".to_string(),
        ],
        cons: vec![
            "Lacks quantifiable achievements.".to_string(),
            "No work experience listed.".to_string(),
            "Inconsistent formatting.".to_string(),
        ],
        score: 6,
        summary: "A backend developer with a passion for distributed systems.".to_string(),
        recommendations: vec![
            "Quantify achievements in project descriptions.".to_string(),
            "Provide month/year dates for education entries.".to_string(),
        ],
        job_fit: "Junior Backend Developer".to_string(),
        verdict: Verdict::NeedsImprovement,
        grammar_issues: 3,
        highlighted_projects: vec!["Interview platform - hackathon winner".to_string()],
        tech_stack_strengths: vec!["Rust".to_string(), "PostgreSQL".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_from_backend_shape() {
        let json = serde_json::json!({
            "pros": ["Strong Rust skills", "Good OSS record"],
            "cons": ["No metrics"],
            "score": 8,
            "summary": "Solid systems engineer.",
            "recommendations": ["Add numbers"],
            "job_fit": "Backend Engineer",
            "verdict": "strong candidate",
            "grammar_issues": 0,
            "highlighted_projects": ["Async runtime"],
            "tech_stack_strengths": ["Rust", "Tokio"]
        });

        let review: Review = serde_json::from_value(json).unwrap();

        assert_eq!(review.score, 8);
        assert_eq!(review.verdict, Verdict::StrongCandidate);
        assert_eq!(review.pros, vec!["Strong Rust skills", "Good OSS record"]);
        assert_eq!(review.tech_stack_strengths, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_review_requires_every_field() {
        let json = r#"{
            "pros": [],
            "cons": [],
            "score": 5,
            "summary": "x",
            "recommendations": [],
            "job_fit": "x",
            "verdict": "pass",
            "grammar_issues": 0,
            "highlighted_projects": []
        }"#;
        let result: Result<Review, _> = serde_json::from_str(json);
        assert!(
            result.is_err(),
            "Review without tech_stack_strengths must fail deserialization"
        );
    }

    #[test]
    fn test_review_rejects_negative_grammar_issues() {
        let mut json = serde_json::to_value(sample_review()).unwrap();
        json["grammar_issues"] = serde_json::json!(-1);
        assert!(serde_json::from_value::<Review>(json).is_err());
    }

    #[test]
    fn test_verdict_known_values() {
        assert_eq!(Verdict::from("strong candidate".to_string()), Verdict::StrongCandidate);
        assert_eq!(Verdict::from("pass".to_string()), Verdict::Pass);
        assert_eq!(
            Verdict::from("needs improvement".to_string()),
            Verdict::NeedsImprovement
        );
    }

    #[test]
    fn test_unrecognized_verdict_is_kept_verbatim() {
        let verdict: Verdict = serde_json::from_str("\"maybe later\"").unwrap();
        assert_eq!(verdict, Verdict::Unrecognized("maybe later".to_string()));
        assert_eq!(verdict.label(), "maybe later");
        assert_eq!(verdict.badge_class(), "badge-neutral");
    }

    #[test]
    fn test_verdict_serializes_to_wire_label() {
        let json = serde_json::to_string(&Verdict::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs improvement\"");
    }

    #[test]
    fn test_each_known_verdict_has_distinct_badge() {
        let classes = [
            Verdict::StrongCandidate.badge_class(),
            Verdict::Pass.badge_class(),
            Verdict::NeedsImprovement.badge_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
        assert!(!classes.contains(&"badge-neutral"));
    }

    #[test]
    fn test_sequence_order_survives_decoding() {
        let review = sample_review();
        let json = serde_json::to_string(&review).unwrap();
        let recovered: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.cons, review.cons);
        assert_eq!(recovered.recommendations, review.recommendations);
    }
}
