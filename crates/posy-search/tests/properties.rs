// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Property-based tests for the bouquet-day search.
//!
//! Every property compares the bisection against a brute force that tries
//! each distinct bloom day in increasing order.

use posy_model::{garden::Garden, request::BouquetRequest};
use posy_search::{
    bisection::{BisectionSearch, min_days},
    feasibility::{count_bouquets, feasible_by_day, harvest_spans},
    monitor::no_op::NoOpMonitor,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2_000,
        ..ProptestConfig::default()
    }
}

fn bloom_days() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..50, 1..40)
}

fn brute_force(days: &[i64], m: usize, k: usize) -> Option<i64> {
    let mut candidates = days.to_vec();
    candidates.sort_unstable();
    candidates.dedup();
    candidates
        .into_iter()
        .find(|&day| max_bouquets(days, day, k) >= m)
}

/// Largest number of disjoint runs of `k` bloomed plots, by dynamic programming
/// over prefixes, independent of the greedy scan.
fn max_bouquets(days: &[i64], day: i64, k: usize) -> usize {
    let n = days.len();
    let mut best = vec![0usize; n + 1];
    for end in 1..=n {
        best[end] = best[end - 1];
        if end >= k && days[end - k..end].iter().all(|&d| d <= day) {
            best[end] = best[end].max(best[end - k] + 1);
        }
    }
    best[n]
}

#[test]
fn test_greedy_scan_is_optimal() {
    proptest!(proptest_config(), |(days in bloom_days(), day in 0i64..50, k in 1usize..6)| {
        prop_assert_eq!(count_bouquets(&days, day, k), max_bouquets(&days, day, k));
    });
}

#[test]
fn test_min_days_matches_brute_force() {
    proptest!(proptest_config(), |(days in bloom_days(), m in 1usize..8, k in 1usize..6)| {
        let garden = Garden::from_slice(&days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        let expected = if m * k > days.len() { None } else { brute_force(&days, m, k) };
        prop_assert_eq!(min_days(&garden, &request), expected);
    });
}

#[test]
fn test_answer_is_minimal_and_monotone() {
    proptest!(proptest_config(), |(days in bloom_days(), m in 1usize..8, k in 1usize..6)| {
        let garden = Garden::from_slice(&days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        if let Some(answer) = min_days(&garden, &request) {
            prop_assert!(days.contains(&answer));
            prop_assert!(feasible_by_day(&days, answer, m, k));
            prop_assert!(!feasible_by_day(&days, answer - 1, m, k));
            for later in answer..=answer + 5 {
                prop_assert!(feasible_by_day(&days, later, m, k));
            }
        }
    });
}

#[test]
fn test_infeasible_when_row_too_short() {
    proptest!(proptest_config(), |(days in bloom_days(), extra in 1usize..5, k in 1usize..6)| {
        let m = days.len() / k + extra;
        let garden = Garden::from_slice(&days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        prop_assert_eq!(min_days(&garden, &request), None);
    });
}

#[test]
fn test_exact_fit_answer_is_latest_bloom() {
    proptest!(proptest_config(), |(m in 1usize..8, k in 1usize..6, seed in prop::collection::vec(0i64..50, 48))| {
        let days = &seed[..m * k];
        let garden = Garden::from_slice(days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        prop_assert_eq!(min_days(&garden, &request), days.iter().copied().max());
    });
}

#[test]
fn test_search_is_idempotent_and_input_preserved() {
    proptest!(proptest_config(), |(days in bloom_days(), m in 1usize..8, k in 1usize..6)| {
        let garden = Garden::from_slice(&days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        let first = min_days(&garden, &request);
        let second = min_days(&garden, &request);
        prop_assert_eq!(first, second);
        prop_assert_eq!(garden.bloom_days(), &days[..]);
    });
}

#[test]
fn test_engine_harvest_is_valid() {
    proptest!(proptest_config(), |(days in bloom_days(), m in 1usize..8, k in 1usize..6)| {
        let garden = Garden::from_slice(&days).unwrap();
        let request = BouquetRequest::new(m, k).unwrap();
        let mut monitor = NoOpMonitor::new();
        let outcome = BisectionSearch::new().solve(&garden, &request, &mut monitor);

        prop_assert_eq!(outcome.min_day(), min_days(&garden, &request));
        if let Some(harvest) = outcome.result().harvest() {
            prop_assert_eq!(harvest.validate(&garden, &request), Ok(()));
            prop_assert_eq!(
                Some(harvest.bouquets().to_vec()),
                harvest_spans(&days, harvest.day(), m, k)
            );
        }
    });
}
