//! Selection resolution: mode and document type to frameworks to questions.
//!
//! Pure functions over the static catalogs. Identical inputs always yield
//! identical ordered output.

use std::collections::HashSet;

use crate::catalog;
use crate::error::Error;
use crate::model::{DocumentType, EvaluationMode, Framework};

/// Resolve the set of frameworks in play for a mode and document type.
///
/// Full mode puts every catalog framework in play and ignores the document
/// type. Auto mode requires a document type and returns its policy set; an
/// empty result means "no questions available", not an error.
pub fn resolve_frameworks(
    mode: EvaluationMode,
    document_type: Option<DocumentType>,
) -> Result<Vec<Framework>, Error> {
    match mode {
        EvaluationMode::Full => Ok(Framework::ALL.to_vec()),
        EvaluationMode::Auto => {
            let document_type = document_type.ok_or(Error::MissingDocumentType)?;
            Ok(catalog::frameworks_for(document_type).to_vec())
        }
    }
}

/// Resolve the deduplicated question list for a set of frameworks.
///
/// Order is first-seen across the frameworks in the order given; each
/// question id appears at most once.
pub fn resolve_questions(frameworks: &[Framework]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut questions = Vec::new();
    for framework in frameworks {
        for &qid in catalog::framework_questions(*framework) {
            if seen.insert(qid) {
                questions.push(qid);
            }
        }
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mode_returns_every_framework() {
        let frameworks = resolve_frameworks(EvaluationMode::Full, None).unwrap();
        assert_eq!(frameworks, Framework::ALL.to_vec());

        // Document type is ignored entirely.
        let with_type =
            resolve_frameworks(EvaluationMode::Full, Some(DocumentType::Letter)).unwrap();
        assert_eq!(with_type, frameworks);
    }

    #[test]
    fn auto_mode_without_document_type_is_an_error() {
        let err = resolve_frameworks(EvaluationMode::Auto, None).unwrap_err();
        assert!(matches!(err, Error::MissingDocumentType));
    }

    #[test]
    fn auto_mode_uses_the_document_type_policy() {
        let frameworks =
            resolve_frameworks(EvaluationMode::Auto, Some(DocumentType::Review)).unwrap();
        assert_eq!(
            frameworks,
            vec![Framework::Prisma, Framework::Robis, Framework::Grade]
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve_questions(&resolve_frameworks(EvaluationMode::Full, None).unwrap());
        let b = resolve_questions(&resolve_frameworks(EvaluationMode::Full, None).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn overlapping_frameworks_are_deduplicated() {
        // CONSORT and CASP both require q1, q2, q5, q14, q17.
        let questions = resolve_questions(&[Framework::Consort, Framework::Casp]);
        let unique: std::collections::HashSet<_> = questions.iter().collect();
        assert_eq!(unique.len(), questions.len());
        assert_eq!(questions.iter().filter(|q| **q == "q1").count(), 1);
    }

    #[test]
    fn full_mode_covers_every_catalog_question_reference() {
        let questions =
            resolve_questions(&resolve_frameworks(EvaluationMode::Full, None).unwrap());
        for fw in Framework::ALL {
            for qid in crate::catalog::framework_questions(fw) {
                assert!(questions.contains(qid), "{fw} question {qid} missing");
            }
        }
    }

    #[test]
    fn case_report_question_order_is_first_seen() {
        let frameworks =
            resolve_frameworks(EvaluationMode::Auto, Some(DocumentType::CaseReport)).unwrap();
        let questions = resolve_questions(&frameworks);
        assert_eq!(
            questions,
            vec!["q1", "q5", "q28", "q14", "q17", "q6", "q19", "q20", "q34", "q35"]
        );
    }
}
