//! Core data model types for manuscore.
//!
//! These are the fundamental types the entire manuscore system uses to
//! represent questions, frameworks, document types, and persisted
//! evaluation records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{resolver, scoring};

/// Lowest answer on the evaluation scale.
pub const MIN_ANSWER: u8 = 1;
/// Highest answer on the evaluation scale.
pub const MAX_ANSWER: u8 = 5;

/// A single entry in the static question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier, e.g. `q14`.
    pub id: &'static str,
    /// The prompt shown to the evaluator.
    pub text: &'static str,
}

/// How the set of applicable frameworks is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Every framework in the catalog is in play.
    Full,
    /// Frameworks are determined by the manuscript's document type.
    Auto,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Full => write!(f, "full"),
            EvaluationMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for EvaluationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(EvaluationMode::Full),
            "auto" => Ok(EvaluationMode::Auto),
            other => Err(format!("unknown evaluation mode: {other}")),
        }
    }
}

/// A research-reporting framework (checklist standard).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    Consort,
    Prisma,
    Strobe,
    Care,
    Srqr,
    Squire,
    Grade,
    Casp,
    Mmat,
    Robis,
    Equator,
    Cope,
    Scite,
    Altmetrics,
    Semantic,
}

impl Framework {
    /// Every framework, in catalog order.
    pub const ALL: [Framework; 15] = [
        Framework::Consort,
        Framework::Prisma,
        Framework::Strobe,
        Framework::Care,
        Framework::Srqr,
        Framework::Squire,
        Framework::Grade,
        Framework::Casp,
        Framework::Mmat,
        Framework::Robis,
        Framework::Equator,
        Framework::Cope,
        Framework::Scite,
        Framework::Altmetrics,
        Framework::Semantic,
    ];

    /// Canonical upper-case name, matching the persisted key.
    pub fn name(&self) -> &'static str {
        match self {
            Framework::Consort => "CONSORT",
            Framework::Prisma => "PRISMA",
            Framework::Strobe => "STROBE",
            Framework::Care => "CARE",
            Framework::Srqr => "SRQR",
            Framework::Squire => "SQUIRE",
            Framework::Grade => "GRADE",
            Framework::Casp => "CASP",
            Framework::Mmat => "MMAT",
            Framework::Robis => "ROBIS",
            Framework::Equator => "EQUATOR",
            Framework::Cope => "COPE",
            Framework::Scite => "SCITE",
            Framework::Altmetrics => "ALTMETRICS",
            Framework::Semantic => "SEMANTIC",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Framework::ALL
            .iter()
            .find(|fw| fw.name() == upper)
            .copied()
            .ok_or_else(|| format!("unknown framework: {s}"))
    }
}

/// A manuscript category used in auto mode to select frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Article,
    Review,
    #[serde(rename = "Conference Paper")]
    ConferencePaper,
    #[serde(rename = "Case Report")]
    CaseReport,
    #[serde(rename = "Qualitative Study")]
    QualitativeStudy,
    #[serde(rename = "Editorial Material")]
    EditorialMaterial,
    Letter,
    #[serde(rename = "Short Survey")]
    ShortSurvey,
    #[serde(rename = "Data Paper")]
    DataPaper,
    #[serde(rename = "Software Review")]
    SoftwareReview,
    #[serde(rename = "Book Review")]
    BookReview,
    Guideline,
    #[serde(rename = "Meeting Abstract")]
    MeetingAbstract,
}

impl DocumentType {
    /// Every document type, in catalog order.
    pub const ALL: [DocumentType; 13] = [
        DocumentType::Article,
        DocumentType::Review,
        DocumentType::ConferencePaper,
        DocumentType::CaseReport,
        DocumentType::QualitativeStudy,
        DocumentType::EditorialMaterial,
        DocumentType::Letter,
        DocumentType::ShortSurvey,
        DocumentType::DataPaper,
        DocumentType::SoftwareReview,
        DocumentType::BookReview,
        DocumentType::Guideline,
        DocumentType::MeetingAbstract,
    ];

    /// Human-readable label, matching the persisted value.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Article => "Article",
            DocumentType::Review => "Review",
            DocumentType::ConferencePaper => "Conference Paper",
            DocumentType::CaseReport => "Case Report",
            DocumentType::QualitativeStudy => "Qualitative Study",
            DocumentType::EditorialMaterial => "Editorial Material",
            DocumentType::Letter => "Letter",
            DocumentType::ShortSurvey => "Short Survey",
            DocumentType::DataPaper => "Data Paper",
            DocumentType::SoftwareReview => "Software Review",
            DocumentType::BookReview => "Book Review",
            DocumentType::Guideline => "Guideline",
            DocumentType::MeetingAbstract => "Meeting Abstract",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentType::ALL
            .iter()
            .find(|dt| dt.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("unknown document type: {s}"))
    }
}

/// Answers keyed by question id; values are scores in `1..=5`.
pub type AnswerSet = BTreeMap<String, u8>;

/// Per-framework rounded average scores.
pub type FrameworkScores = BTreeMap<Framework, f64>;

/// One persisted evaluation of a manuscript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier derived from the creation instant; stable across edits.
    pub id: i64,
    /// Manuscript title.
    pub paper_title: String,
    /// Digital object identifier, if any.
    #[serde(default)]
    pub doi: String,
    /// Free-text evaluator notes.
    #[serde(default)]
    pub notes: String,
    /// Evaluation mode used at save time.
    pub mode: EvaluationMode,
    /// Document type; absent when mode is Full.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// The answers given at save time.
    #[serde(default)]
    pub answers: AnswerSet,
    /// Per-framework scores computed at save time.
    #[serde(default)]
    pub framework_scores: FrameworkScores,
    /// Creation-or-last-update instant.
    pub timestamp: DateTime<Utc>,
}

/// The evaluator-supplied fields of a record, before identity and scoring
/// are attached.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub paper_title: String,
    pub doi: String,
    pub notes: String,
    pub mode: EvaluationMode,
    pub document_type: Option<DocumentType>,
    pub answers: AnswerSet,
}

impl RecordDraft {
    /// Validate, score, and stamp this draft into a persistable record.
    ///
    /// Answers for questions outside the visible set of `mode` /
    /// `document_type` are dropped (with a diagnostic) before validation, so
    /// a record only ever holds currently-visible, currently-answered
    /// questions. The document type is discarded in Full mode.
    pub fn into_record(self, id: i64, timestamp: DateTime<Utc>) -> Result<Record, Error> {
        for (qid, value) in &self.answers {
            if !(MIN_ANSWER..=MAX_ANSWER).contains(value) {
                return Err(Error::InvalidAnswer {
                    id: qid.clone(),
                    value: *value,
                });
            }
        }

        let frameworks = resolver::resolve_frameworks(self.mode, self.document_type)?;
        let visible = resolver::resolve_questions(&frameworks);

        let mut answers = self.answers;
        answers.retain(|qid, _| {
            let keep = visible.contains(&qid.as_str());
            if !keep {
                tracing::warn!("dropping answer for {qid}: not in the visible question set");
            }
            keep
        });
        if answers.is_empty() {
            return Err(Error::NoAnswersProvided);
        }

        let framework_scores = scoring::score(&answers, &frameworks);

        Ok(Record {
            id,
            paper_title: self.paper_title.trim().to_string(),
            doi: self.doi.trim().to_string(),
            notes: self.notes.trim().to_string(),
            mode: self.mode,
            document_type: match self.mode {
                EvaluationMode::Auto => self.document_type,
                EvaluationMode::Full => None,
            },
            answers,
            framework_scores,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(mode: EvaluationMode, document_type: Option<DocumentType>) -> RecordDraft {
        RecordDraft {
            paper_title: "  A Study  ".into(),
            doi: " 10.1000/x ".into(),
            notes: String::new(),
            mode,
            document_type,
            answers: AnswerSet::from([("q1".to_string(), 4u8)]),
        }
    }

    #[test]
    fn mode_display_and_parse() {
        assert_eq!(EvaluationMode::Full.to_string(), "full");
        assert_eq!("auto".parse::<EvaluationMode>().unwrap(), EvaluationMode::Auto);
        assert_eq!("FULL".parse::<EvaluationMode>().unwrap(), EvaluationMode::Full);
        assert!("semi".parse::<EvaluationMode>().is_err());
    }

    #[test]
    fn framework_display_and_parse() {
        assert_eq!(Framework::Consort.to_string(), "CONSORT");
        assert_eq!("prisma".parse::<Framework>().unwrap(), Framework::Prisma);
        assert!("APA".parse::<Framework>().is_err());
    }

    #[test]
    fn document_type_label_and_parse() {
        assert_eq!(DocumentType::CaseReport.label(), "Case Report");
        assert_eq!(
            "case report".parse::<DocumentType>().unwrap(),
            DocumentType::CaseReport
        );
        assert!("Novel".parse::<DocumentType>().is_err());
    }

    #[test]
    fn draft_trims_free_text() {
        let record = draft(EvaluationMode::Full, None)
            .into_record(1, Utc::now())
            .unwrap();
        assert_eq!(record.paper_title, "A Study");
        assert_eq!(record.doi, "10.1000/x");
    }

    #[test]
    fn draft_auto_requires_document_type() {
        let err = draft(EvaluationMode::Auto, None)
            .into_record(1, Utc::now())
            .unwrap_err();
        assert!(matches!(err, Error::MissingDocumentType));
    }

    #[test]
    fn draft_full_mode_discards_document_type() {
        let record = draft(EvaluationMode::Full, Some(DocumentType::Review))
            .into_record(1, Utc::now())
            .unwrap();
        assert!(record.document_type.is_none());
    }

    #[test]
    fn draft_rejects_out_of_range_answer() {
        let mut d = draft(EvaluationMode::Full, None);
        d.answers.insert("q2".into(), 6);
        let err = d.into_record(1, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::InvalidAnswer { value: 6, .. }));
    }

    #[test]
    fn draft_without_answers_is_rejected() {
        let mut d = draft(EvaluationMode::Full, None);
        d.answers.clear();
        let err = d.into_record(1, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::NoAnswersProvided));
    }

    #[test]
    fn draft_drops_answers_outside_visible_set() {
        // COPE + CARE questions are visible for a Case Report; q23 is not.
        let mut d = draft(EvaluationMode::Auto, Some(DocumentType::CaseReport));
        d.answers.insert("q23".into(), 3);
        let record = d.into_record(1, Utc::now()).unwrap();
        assert!(!record.answers.contains_key("q23"));
        assert!(record.answers.contains_key("q1"));
    }

    #[test]
    fn record_serde_uses_original_field_names() {
        let record = draft(EvaluationMode::Auto, Some(DocumentType::CaseReport))
            .into_record(1700000000000, Utc::now())
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("paperTitle").is_some());
        assert!(json.get("frameworkScores").is_some());
        assert_eq!(json["documentType"], "Case Report");
        assert_eq!(json["mode"], "auto");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, 1700000000000);
        assert_eq!(back.document_type, Some(DocumentType::CaseReport));
    }
}
