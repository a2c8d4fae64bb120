use proptest::prelude::*;
use rankdex::core::types::UserId;
use rankdex::snapshot::builder::SnapshotBuilder;
use rankdex::snapshot::snapshot::LeaderboardSnapshot;

const RATING_MIN: i32 = 100;
const RATING_MAX: i32 = 5000;

fn check_invariants(snap: &LeaderboardSnapshot) {
    let levels = snap.rating_count.len();
    assert_eq!(snap.prefix_higher.len(), levels);
    assert_eq!(snap.users_by_rating.len(), levels);

    // Counts agree with the user map and the buckets
    let count_sum: u64 = snap.rating_count.iter().map(|&c| c as u64).sum();
    let bucket_sum: u64 = snap.users_by_rating.iter().map(|b| b.len() as u64).sum();
    assert_eq!(count_sum, snap.total_users() as u64);
    assert_eq!(bucket_sum, snap.total_users() as u64);

    // prefix_higher[r] counts distinct non-empty levels strictly above r
    let mut distinct_above = 0u32;
    for r in (0..levels).rev() {
        assert_eq!(
            snap.prefix_higher[r], distinct_above,
            "prefix_higher mismatch at rating {}",
            r
        );
        if snap.rating_count[r] > 0 {
            distinct_above += 1;
        }
    }

    // Buckets carry the right rating and are sorted by ascending id
    for (r, bucket) in snap.users_by_rating.iter().enumerate() {
        assert_eq!(bucket.len() as u32, snap.rating_count[r]);
        for summary in bucket {
            assert_eq!(summary.rating as usize, r);
        }
        for pair in bucket.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    // Ranks over non-empty ratings, walked high to low, are 1, 2, 3, ...
    let mut expected_rank = 1;
    for r in (0..levels).rev() {
        if snap.rating_count[r] > 0 {
            assert_eq!(snap.rank(r as i32), expected_rank);
            expected_rank += 1;
        }
    }
}

fn build(users: &[(u32, &str, i32)]) -> LeaderboardSnapshot {
    let mut builder = SnapshotBuilder::new(RATING_MIN, RATING_MAX);
    for (id, username, rating) in users {
        builder.add_user(UserId(*id), username.to_string(), *rating);
    }
    builder.build()
}

#[test]
fn dense_ranking_shares_rank_between_ties() {
    let snap = build(&[
        (1, "a", 5000),
        (2, "b", 5000),
        (3, "c", 5000),
        (4, "d", 5000),
        (5, "e", 5000),
        (6, "f", 4999),
        (7, "g", 4999),
        (8, "h", 4999),
        (9, "i", 4998),
    ]);

    assert_eq!(snap.prefix_higher[5000], 0);
    assert_eq!(snap.prefix_higher[4999], 1);
    assert_eq!(snap.prefix_higher[4998], 2);

    assert_eq!(snap.rank(5000), 1);
    assert_eq!(snap.rank(4999), 2);
    assert_eq!(snap.rank(4998), 3);

    check_invariants(&snap);
}

#[test]
fn buckets_are_sorted_by_ascending_id() {
    let snap = build(&[(42, "c", 3000), (7, "a", 3000), (19, "b", 3000)]);

    let ids: Vec<u32> = snap.users_at(3000).iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![7, 19, 42]);
}

#[test]
fn empty_snapshot_ranks_everything_first() {
    let snap = SnapshotBuilder::new(RATING_MIN, RATING_MAX).build();

    assert_eq!(snap.total_users(), 0);
    assert_eq!(snap.rank(5000), 1);
    assert_eq!(snap.rank(100), 1);
    assert_eq!(snap.rank(0), 1);
    assert_eq!(snap.rank(-37), 1);
    assert!(snap.users_at(3000).is_empty());

    check_invariants(&snap);
}

#[test]
fn out_of_range_ratings_clamp() {
    let snap = build(&[(1, "top", 9999), (2, "bottom", -250), (3, "mid", 3000)]);

    // Stored ratings land on the bounds
    assert_eq!(snap.user_rating(UserId(1)), Some(RATING_MAX));
    assert_eq!(snap.user_rating(UserId(2)), Some(RATING_MIN));

    // Rank queries clamp instead of failing
    assert_eq!(snap.rank(RATING_MAX + 100), snap.rank(RATING_MAX));
    assert_eq!(snap.rank(-5), snap.rank(0));

    check_invariants(&snap);
}

#[test]
fn all_users_at_one_rating_share_rank_one() {
    let snap = build(&[(1, "a", 2500), (2, "b", 2500), (3, "c", 2500)]);

    assert_eq!(snap.rank(2500), 1);
    assert_eq!(snap.users_at(2500).len(), 3);
    check_invariants(&snap);
}

#[test]
fn repeated_add_keeps_last_rating() {
    let mut builder = SnapshotBuilder::new(RATING_MIN, RATING_MAX);
    builder.add_user(UserId(1), "alice".to_string(), 1200);
    builder.add_user(UserId(1), "alice".to_string(), 4800);
    let snap = builder.build();

    assert_eq!(snap.total_users(), 1);
    assert_eq!(snap.user_rating(UserId(1)), Some(4800));
    assert!(snap.users_at(1200).is_empty());
    assert_eq!(snap.users_at(4800).len(), 1);
}

#[test]
fn rebuild_from_unchanged_input_is_identical() {
    let users = [
        (1, "alice", 3000),
        (2, "bob", 4200),
        (3, "carol", 3000),
        (4, "dave", 100),
        (5, "erin", 5000),
    ];

    let a = build(&users);
    let b = build(&users);

    assert_eq!(a.rating_count, b.rating_count);
    assert_eq!(a.prefix_higher, b.prefix_higher);
    assert_eq!(a.users_by_rating, b.users_by_rating);
    assert_eq!(a.user_ratings, b.user_ratings);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn invariants_hold_for_random_populations(
        entries in prop::collection::vec((1u32..500, -1000i32..7000), 0..200)
    ) {
        let mut builder = SnapshotBuilder::new(RATING_MIN, RATING_MAX);
        for (id, rating) in &entries {
            builder.add_user(UserId(*id), format!("user_{}", id), *rating);
        }
        let snap = builder.build();

        check_invariants(&snap);

        // Every stored rating sits inside the configured bounds
        for rating in snap.user_ratings.values() {
            prop_assert!(*rating >= RATING_MIN && *rating <= RATING_MAX);
        }
    }
}
