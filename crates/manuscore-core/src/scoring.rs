//! Per-framework score aggregation.
//!
//! A framework's score is the arithmetic mean of the answers actually
//! provided for its required questions, rounded to two decimal places.
//! A framework whose required questions received no answers yields no
//! entry at all: absence means "not assessable", never zero.

use crate::catalog;
use crate::model::{AnswerSet, Framework, FrameworkScores};

/// Compute one average score per framework from the given answers.
///
/// Pure function of its inputs; unanswered questions are skipped.
pub fn score(answers: &AnswerSet, frameworks: &[Framework]) -> FrameworkScores {
    let mut scores = FrameworkScores::new();
    for &framework in frameworks {
        let collected: Vec<u8> = catalog::framework_questions(framework)
            .iter()
            .filter_map(|qid| answers.get(*qid).copied())
            .collect();
        if collected.is_empty() {
            continue;
        }
        let sum: u32 = collected.iter().map(|&v| u32::from(v)).sum();
        let average = f64::from(sum) / collected.len() as f64;
        scores.insert(framework, round2(average));
    }
    scores
}

/// Round to two decimal places, half-up.
///
/// `f64::round` rounds half away from zero, which is half-up for the
/// non-negative averages produced here.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, u8)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, v)| (id.to_string(), *v))
            .collect()
    }

    #[test]
    fn unanswered_framework_is_omitted() {
        // SCITE requires q29 and q33; neither is answered.
        let scores = score(&answers(&[("q1", 5)]), &[Framework::Scite]);
        assert!(!scores.contains_key(&Framework::Scite));
    }

    #[test]
    fn partial_answers_average_only_what_was_given() {
        // STROBE requires [q1, q3, q4, q7, q8, q13]; only q1 and q3 answered.
        let scores = score(&answers(&[("q1", 4), ("q3", 2)]), &[Framework::Strobe]);
        assert_eq!(scores[&Framework::Strobe], 3.0);
    }

    #[test]
    fn exact_average_is_unchanged() {
        // GRADE requires [q8, q17, q24, q25].
        let scores = score(
            &answers(&[("q8", 1), ("q17", 1), ("q24", 1), ("q25", 2)]),
            &[Framework::Grade],
        );
        assert_eq!(scores[&Framework::Grade], 1.25);
    }

    #[test]
    fn thirds_round_to_two_decimals() {
        // ROBIS requires [q23, q24, q25]; mean 14/3 = 4.666...
        let scores = score(
            &answers(&[("q23", 4), ("q24", 5), ("q25", 5)]),
            &[Framework::Robis],
        );
        assert_eq!(scores[&Framework::Robis], 4.67);
    }

    #[test]
    fn midpoint_rounds_up() {
        // CONSORT requires 8 questions; sum 13 over 8 answers = 1.625 exactly
        // (representable in binary), which must round half-up to 1.63.
        let scores = score(
            &answers(&[
                ("q1", 1),
                ("q2", 1),
                ("q4", 1),
                ("q5", 2),
                ("q7", 2),
                ("q14", 2),
                ("q17", 2),
                ("q18", 2),
            ]),
            &[Framework::Consort],
        );
        assert_eq!(scores[&Framework::Consort], 1.63);
    }

    #[test]
    fn scoring_is_pure_and_side_effect_free() {
        let input = answers(&[("q1", 3)]);
        let before = input.clone();
        let _ = score(&input, &Framework::ALL);
        assert_eq!(input, before);
    }

    #[test]
    fn all_fives_for_case_report_frameworks() {
        let all_fives = answers(&[
            ("q1", 5),
            ("q5", 5),
            ("q28", 5),
            ("q14", 5),
            ("q17", 5),
            ("q6", 5),
            ("q19", 5),
            ("q20", 5),
            ("q34", 5),
            ("q35", 5),
        ]);
        let scores = score(&all_fives, &[Framework::Care, Framework::Cope]);
        assert_eq!(scores[&Framework::Care], 5.0);
        assert_eq!(scores[&Framework::Cope], 5.0);
        assert_eq!(scores.len(), 2);
    }
}
