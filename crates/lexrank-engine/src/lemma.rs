// Exact-lemma ranking: order by primary form, trim unresolved tail, split weight

use lexrank_core::{Bounded, LemmaCandidate};

use crate::sink::OutputSink;

/// Order lemma candidates and drop the unresolved tail.
///
/// Candidates are stably sorted by primary form tag, which puts
/// `FormTag::UNKNOWN` last. Every trailing unknown-tagged candidate is then
/// removed, except that at least one candidate always survives: if all of
/// them are unknown, the first one in analyzer order is kept.
pub fn rank_lemmas(candidates: Bounded<LemmaCandidate>) -> Vec<LemmaCandidate> {
    let mut ranked = candidates.into_vec();
    ranked.sort_by_key(LemmaCandidate::primary);

    let keep = ranked
        .iter()
        .rposition(|c| !c.primary().is_unknown())
        .map_or(1, |last_resolved| last_resolved + 1);
    ranked.truncate(keep);
    ranked
}

/// Emit ranked lemmas, each carrying an equal share `1/N` of the weight.
///
/// Returns the number of lemmas emitted.
pub fn emit_lemmas(ranked: &[LemmaCandidate], sink: &mut dyn OutputSink) -> usize {
    if ranked.is_empty() {
        return 0;
    }
    let weight = 1.0 / ranked.len() as f32;
    for c in ranked {
        sink.add_lemma(c.lexeme_id, weight, &c.forms);
    }
    ranked.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CollectingSink, Emission};
    use lexrank_core::FormTag;

    const U: FormTag = FormTag::UNKNOWN;

    fn lemma(id: u32, forms: &[FormTag]) -> LemmaCandidate {
        LemmaCandidate::new(id, forms.to_vec())
    }

    fn bounded(items: Vec<LemmaCandidate>) -> Bounded<LemmaCandidate> {
        Bounded::clip(items, 32).0
    }

    fn ids(ranked: &[LemmaCandidate]) -> Vec<u32> {
        ranked.iter().map(|c| c.lexeme_id).collect()
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank_lemmas(Bounded::empty(32)).is_empty());
    }

    #[test]
    fn sorts_ascending_by_primary_tag() {
        let ranked = rank_lemmas(bounded(vec![
            lemma(1, &[FormTag(9)]),
            lemma(2, &[FormTag(2)]),
            lemma(3, &[FormTag(5)]),
        ]));
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_analyzer_order() {
        let ranked = rank_lemmas(bounded(vec![
            lemma(10, &[FormTag(4), FormTag(1)]),
            lemma(11, &[FormTag(2)]),
            lemma(12, &[FormTag(4), FormTag(0)]),
            lemma(13, &[FormTag(4)]),
        ]));
        assert_eq!(ids(&ranked), vec![11, 10, 12, 13]);
    }

    #[test]
    fn unknown_tail_is_dropped() {
        let ranked = rank_lemmas(bounded(vec![
            lemma(1, &[U]),
            lemma(2, &[FormTag(3)]),
            lemma(3, &[U, FormTag(1)]),
            lemma(4, &[FormTag(0)]),
        ]));
        assert_eq!(ids(&ranked), vec![4, 2]);
    }

    #[test]
    fn all_unknown_keeps_first() {
        let ranked = rank_lemmas(bounded(vec![lemma(5, &[U]), lemma(6, &[U]), lemma(7, &[])]));
        assert_eq!(ids(&ranked), vec![5]);
    }

    #[test]
    fn single_unknown_is_kept() {
        let ranked = rank_lemmas(bounded(vec![lemma(5, &[U])]));
        assert_eq!(ids(&ranked), vec![5]);
    }

    #[test]
    fn missing_tags_rank_as_unknown() {
        let ranked = rank_lemmas(bounded(vec![lemma(1, &[]), lemma(2, &[FormTag(0xFE)])]));
        assert_eq!(ids(&ranked), vec![2]);
    }

    #[test]
    fn tag_lists_are_not_reordered() {
        let ranked = rank_lemmas(bounded(vec![
            lemma(1, &[FormTag(8), FormTag(1), U]),
            lemma(2, &[FormTag(3), FormTag(9)]),
        ]));
        assert_eq!(ranked[1].forms, vec![FormTag(8), FormTag(1), U]);
    }

    #[test]
    fn emit_splits_weight_evenly() {
        let ranked = vec![
            lemma(1, &[FormTag(0)]),
            lemma(2, &[FormTag(1)]),
            lemma(3, &[FormTag(2)]),
        ];
        let mut sink = CollectingSink::new();
        assert_eq!(emit_lemmas(&ranked, &mut sink), 3);

        let total: f32 = sink.emissions().iter().map(Emission::weight).sum();
        assert!((total - 1.0).abs() < 1e-6);
        for e in sink.emissions() {
            assert_eq!(e.weight(), 1.0 / 3.0);
        }
    }

    #[test]
    fn emit_single_lemma_has_full_weight() {
        let mut sink = CollectingSink::new();
        emit_lemmas(&[lemma(42, &[FormTag(1), FormTag(2)])], &mut sink);
        assert_eq!(
            sink.emissions(),
            &[Emission::Lemma {
                lexeme_id: 42,
                weight: 1.0,
                forms: vec![FormTag(1), FormTag(2)],
            }]
        );
    }

    #[test]
    fn emit_nothing_for_empty() {
        let mut sink = CollectingSink::new();
        assert_eq!(emit_lemmas(&[], &mut sink), 0);
        assert!(sink.is_empty());
    }
}
