//! Ranking engine behaviour on a realistic snapshot.

mod support;

use bookflip::domain::pair::ScoreOutcome;
use bookflip::domain::ranking::{Page, RankedPair, Ranking, RankingOptions, DEFAULT_PAGE_SIZE};
use bookflip::domain::snapshot::Snapshot;

use support::fixture_snapshot;

fn ranking() -> Ranking {
    Ranking::build(&fixture_snapshot("bazaar.json"), &RankingOptions::default())
}

fn entry<'a>(ranking: &'a Ranking, family: &str) -> &'a RankedPair {
    ranking
        .iter()
        .find(|entry| entry.family() == family)
        .unwrap_or_else(|| panic!("{family} missing from ranking"))
}

#[test]
fn ranks_only_enchantment_books() {
    let ranking = ranking();
    assert_eq!(ranking.len(), 5);
    assert!(ranking
        .iter()
        .all(|entry| entry.family().starts_with("ENCHANTMENT_")));
}

#[test]
fn best_pair_comes_first() {
    let ranking = ranking();
    let best = ranking.get(1).expect("first entry");

    assert_eq!(best.display_name(), "Ultimate Wise");
    assert_eq!(best.pair().low_tier().unwrap().display_name(), "Ultimate Wise I");
    assert_eq!(best.pair().high_tier().unwrap().display_name(), "Ultimate Wise V");
    assert_eq!(best.pair().margin(), 200_000.0 - 1_000.0 * 16.0);
    assert!((best.score() - 0.114_691_819_359).abs() < 1e-9);
}

#[test]
fn scores_are_descending() {
    let scores: Vec<f64> = ranking().iter().map(RankedPair::score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
}

#[test]
fn half_populated_family_scores_zero() {
    let ranking = ranking();
    let telekinesis = entry(&ranking, "ENCHANTMENT_TELEKINESIS");

    assert!(telekinesis.pair().high_tier().is_none());
    assert_eq!(telekinesis.pair().evaluate(), ScoreOutcome::Illiquid);
    assert_eq!(telekinesis.score(), 0.0);
}

#[test]
fn negative_margin_family_scores_zero() {
    let ranking = ranking();
    let loss = entry(&ranking, "ENCHANTMENT_LOSS");

    assert!(loss.pair().margin() < 0.0);
    assert!(loss.pair().evaluate().is_degenerate());
    assert_eq!(loss.score(), 0.0);
    assert_eq!(ranking.outcome_counts().degenerate, 1);
}

#[test]
fn failed_snapshot_yields_empty_ranking() {
    let ranking = Ranking::build(
        &fixture_snapshot("bazaar_failed.json"),
        &RankingOptions::default(),
    );
    assert_eq!(ranking.len(), 0);
    assert!(ranking.is_empty());
    assert_eq!(ranking.chunks(DEFAULT_PAGE_SIZE).count(), 0);
}

#[test]
fn two_families_order_by_score() {
    // Same liquidity on both; BBB has the larger margin.
    let snapshot = Snapshot::from_json(
        r#"{ "success": true, "products": {
            "ENCHANTMENT_AAA_1": { "sell_summary": [{ "pricePerUnit": 100.0 }], "quick_status": { "sellMovingWeek": 1000 } },
            "ENCHANTMENT_AAA_5": { "buy_summary": [{ "pricePerUnit": 20000.0 }], "quick_status": { "buyMovingWeek": 1000 } },
            "ENCHANTMENT_BBB_1": { "sell_summary": [{ "pricePerUnit": 100.0 }], "quick_status": { "sellMovingWeek": 1000 } },
            "ENCHANTMENT_BBB_5": { "buy_summary": [{ "pricePerUnit": 90000.0 }], "quick_status": { "buyMovingWeek": 1000 } }
        } }"#,
    )
    .unwrap();

    let ranking = Ranking::build(&snapshot, &RankingOptions::default());
    let families: Vec<&str> = ranking.iter().map(RankedPair::family).collect();
    assert_eq!(families, vec!["ENCHANTMENT_BBB", "ENCHANTMENT_AAA"]);
    assert!(ranking.get(1).unwrap().score() > ranking.get(2).unwrap().score());
}

#[test]
fn chunks_split_into_pages() {
    let ranking = ranking();
    let pages: Vec<Page<'_>> = ranking.chunks(2).collect();

    let sizes: Vec<usize> = pages.iter().map(Page::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let paged: Vec<&str> = pages
        .iter()
        .flat_map(|page| page.entries.iter().map(RankedPair::family))
        .collect();
    let flat: Vec<&str> = ranking.iter().map(RankedPair::family).collect();
    assert_eq!(paged, flat);
}

#[test]
fn chunks_are_lazy() {
    let ranking = ranking();
    let mut pages = ranking.chunks(3);

    let first = pages.next().expect("first page");
    assert_eq!(first.first_rank, 1);
    assert_eq!(first.len(), 3);

    let second = pages.next().expect("second page");
    assert_eq!(second.first_rank, 4);
    assert_eq!(second.len(), 2);

    assert!(pages.next().is_none());
}

#[test]
fn rebuilding_is_deterministic() {
    let snapshot = fixture_snapshot("bazaar.json");
    let first = Ranking::build(&snapshot, &RankingOptions::default());
    let second = Ranking::build(&snapshot, &RankingOptions::default());

    let order = |r: &Ranking| -> Vec<(String, f64)> {
        r.iter()
            .map(|entry| (entry.family().to_string(), entry.score()))
            .collect()
    };
    assert_eq!(order(&first), order(&second));
}

#[test]
fn custom_category_prefix() {
    let options = RankingOptions {
        category_prefix: "ENCHANTMENT_SMITE".into(),
        ..RankingOptions::default()
    };
    let ranking = Ranking::build(&fixture_snapshot("bazaar.json"), &options);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.get(1).unwrap().family(), "ENCHANTMENT_SMITE");
}
