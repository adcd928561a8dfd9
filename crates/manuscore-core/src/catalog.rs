//! The authoritative question, framework, and document-type catalogs.
//!
//! Every consumer resolves question ids and framework sets through this
//! module; the tables are never redefined elsewhere. All three tables are
//! static and immutable for the process lifetime.

use crate::model::{DocumentType, Framework, Question};

/// The fixed bank of evaluable questions.
pub const QUESTIONS: &[Question] = &[
    Question { id: "q1", text: "Are the research objectives clearly stated?" },
    Question { id: "q2", text: "Is the study design appropriate for the objectives?" },
    Question { id: "q3", text: "Are key variables well defined?" },
    Question { id: "q4", text: "Is the sampling method adequately described?" },
    Question { id: "q5", text: "Is the data collection process clearly explained?" },
    Question { id: "q6", text: "Are ethical issues addressed (e.g., consent, approval)?" },
    Question { id: "q7", text: "Is the statistical analysis method appropriate?" },
    Question { id: "q8", text: "Are limitations of the study acknowledged?" },
    Question { id: "q9", text: "Is there a clear abstract summarizing key findings?" },
    Question { id: "q10", text: "Does the title accurately reflect the paper content?" },
    Question { id: "q11", text: "Are references relevant and current?" },
    Question { id: "q12", text: "Is the introduction logically structured?" },
    Question { id: "q13", text: "Are inclusion/exclusion criteria well specified?" },
    Question { id: "q14", text: "Are results presented clearly and completely?" },
    Question { id: "q15", text: "Are figures/tables appropriate and labeled?" },
    Question { id: "q16", text: "Is the discussion linked to existing literature?" },
    Question { id: "q17", text: "Are conclusions justified by the data?" },
    Question { id: "q18", text: "Is the methodology reproducible by others?" },
    Question { id: "q19", text: "Are conflicts of interest disclosed?" },
    Question { id: "q20", text: "Are funding sources transparently reported?" },
    Question { id: "q21", text: "Is the review protocol registered (if applicable)?" },
    Question { id: "q22", text: "Is the search strategy adequately reported?" },
    Question { id: "q23", text: "Is the selection process for studies transparent?" },
    Question { id: "q24", text: "Are bias risks assessed systematically?" },
    Question { id: "q25", text: "Are findings synthesized appropriately?" },
    Question { id: "q26", text: "Is there evidence of methodological triangulation?" },
    Question { id: "q27", text: "Are qualitative data analyzed rigorously?" },
    Question { id: "q28", text: "Is the case context described in detail?" },
    Question { id: "q29", text: "Are citations critically engaged (not just listed)?" },
    Question { id: "q30", text: "Is the contribution to theory or practice clear?" },
    Question { id: "q31", text: "Are altmetric impacts discussed or tracked?" },
    Question { id: "q32", text: "Are semantic keywords present in abstract and title?" },
    Question { id: "q33", text: "Are citation contexts (supportive/critical) analyzed?" },
    Question { id: "q34", text: "Does the paper follow ethical publishing norms?" },
    Question { id: "q35", text: "Are author contributions clearly stated?" },
    Question { id: "q36", text: "Are software/data/code publicly accessible?" },
    Question { id: "q37", text: "Are evaluation tools/frameworks declared?" },
    Question { id: "q38", text: "Are open peer review processes followed?" },
    Question { id: "q39", text: "Are methods/tools reusable by others?" },
    Question { id: "q40", text: "Is the paper suitable for informing policy/practice?" },
];

/// Look up the prompt text for a question id.
pub fn question_text(id: &str) -> Option<&'static str> {
    QUESTIONS.iter().find(|q| q.id == id).map(|q| q.text)
}

/// The ordered question-id list a framework requires.
pub fn framework_questions(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::Consort => &["q1", "q2", "q4", "q5", "q7", "q14", "q17", "q18"],
        Framework::Prisma => &["q1", "q21", "q22", "q23", "q25", "q24"],
        Framework::Strobe => &["q1", "q3", "q4", "q7", "q8", "q13"],
        Framework::Care => &["q1", "q5", "q28", "q14", "q17"],
        Framework::Srqr => &["q1", "q26", "q27", "q14", "q30"],
        Framework::Squire => &["q1", "q2", "q30", "q17", "q40"],
        Framework::Grade => &["q8", "q17", "q24", "q25"],
        Framework::Casp => &["q1", "q2", "q3", "q5", "q8", "q14", "q17"],
        Framework::Mmat => &["q1", "q2", "q3", "q14", "q26"],
        Framework::Robis => &["q23", "q24", "q25"],
        Framework::Equator => &["q1", "q2", "q6", "q18", "q34"],
        Framework::Cope => &["q6", "q19", "q20", "q34", "q35"],
        Framework::Scite => &["q29", "q33"],
        Framework::Altmetrics => &["q31", "q40"],
        Framework::Semantic => &["q10", "q32", "q36"],
    }
}

/// The frameworks applicable to a document type in auto mode.
pub fn frameworks_for(document_type: DocumentType) -> &'static [Framework] {
    match document_type {
        DocumentType::Article => &[Framework::Casp, Framework::Strobe, Framework::Equator],
        DocumentType::Review => &[Framework::Prisma, Framework::Robis, Framework::Grade],
        DocumentType::ConferencePaper => &[Framework::Mmat, Framework::Casp],
        DocumentType::CaseReport => &[Framework::Care, Framework::Cope],
        DocumentType::QualitativeStudy => &[Framework::Srqr, Framework::Casp],
        DocumentType::EditorialMaterial => &[Framework::Cope],
        DocumentType::Letter => &[Framework::Cope, Framework::Equator],
        DocumentType::ShortSurvey => &[Framework::Scite, Framework::Altmetrics],
        DocumentType::DataPaper => &[Framework::Semantic, Framework::Equator],
        DocumentType::SoftwareReview => &[Framework::Semantic, Framework::Equator],
        DocumentType::BookReview => &[Framework::Scite, Framework::Altmetrics],
        DocumentType::Guideline => &[Framework::Grade, Framework::Cope],
        DocumentType::MeetingAbstract => &[Framework::Cope],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn question_ids_are_unique() {
        let mut seen = HashSet::new();
        for q in QUESTIONS {
            assert!(seen.insert(q.id), "duplicate question id: {}", q.id);
        }
        assert_eq!(QUESTIONS.len(), 40);
    }

    #[test]
    fn question_text_lookup() {
        assert_eq!(
            question_text("q1"),
            Some("Are the research objectives clearly stated?")
        );
        assert!(question_text("q99").is_none());
    }

    #[test]
    fn framework_lists_are_non_empty() {
        for fw in Framework::ALL {
            assert!(
                !framework_questions(fw).is_empty(),
                "{fw} requires no questions"
            );
        }
    }

    #[test]
    fn framework_lists_have_no_dangling_question_ids() {
        for fw in Framework::ALL {
            for qid in framework_questions(fw) {
                assert!(
                    question_text(qid).is_some(),
                    "{fw} references unknown question {qid}"
                );
            }
        }
    }

    #[test]
    fn every_document_type_maps_to_known_frameworks() {
        for dt in DocumentType::ALL {
            assert!(
                !frameworks_for(dt).is_empty(),
                "{dt} has no applicable frameworks"
            );
        }
    }

    #[test]
    fn case_report_maps_to_care_and_cope() {
        assert_eq!(
            frameworks_for(DocumentType::CaseReport),
            &[Framework::Care, Framework::Cope]
        );
    }
}
