use std::collections::HashMap;
use crate::core::types::{User, UserId};
use crate::index::ngram::generate_ngrams;

/// Static n-gram inverted index over usernames.
///
/// Built once before any reader is admitted and never mutated afterwards,
/// so query threads read it without synchronisation. Each posting list
/// holds the distinct user ids whose lowercased username contains the gram,
/// sorted ascending for merge intersection.
pub struct SearchIndex {
    postings: HashMap<String, Vec<UserId>>,
    min_gram: usize,
    max_gram: usize,
}

impl SearchIndex {
    pub fn build<'a, I>(users: I, min_gram: usize, max_gram: usize) -> Self
    where
        I: IntoIterator<Item = &'a User>,
    {
        let mut postings: HashMap<String, Vec<UserId>> = HashMap::new();

        for user in users {
            let lowered = user.username.to_lowercase();
            // generate_ngrams dedups within one username, so a repeated gram
            // adds the user only once to that gram's list
            for gram in generate_ngrams(&lowered, min_gram, max_gram) {
                postings.entry(gram).or_insert_with(Vec::new).push(user.id);
            }
        }

        // Users may arrive in arbitrary order; intersection needs sorted
        // distinct ids
        for list in postings.values_mut() {
            list.sort();
            list.dedup();
        }

        SearchIndex {
            postings,
            min_gram,
            max_gram,
        }
    }

    /// Gram set for a lowercased query string. Empty for queries shorter
    /// than `min_gram`; the caller falls back to a linear scan.
    pub fn query_grams(&self, query: &str) -> Vec<String> {
        generate_ngrams(query, self.min_gram, self.max_gram)
    }

    pub fn posting_list(&self, gram: &str) -> Option<&[UserId]> {
        self.postings.get(gram).map(|list| list.as_slice())
    }

    pub fn gram_count(&self) -> usize {
        self.postings.len()
    }

    /// AND-intersect the posting lists of `grams`, seeding from the
    /// shortest list. The result is a superset of true substring matches
    /// (grams can co-occur without the full substring being contiguous);
    /// callers must re-check literal containment.
    pub fn candidates(&self, grams: &[String]) -> Vec<UserId> {
        if grams.is_empty() {
            return Vec::new();
        }

        let mut lists: Vec<&[UserId]> = Vec::with_capacity(grams.len());
        for gram in grams {
            match self.postings.get(gram) {
                Some(list) => lists.push(list),
                // A gram nobody's username contains: no candidate can match
                None => return Vec::new(),
            }
        }

        // Seed from the shortest list so each merge step shrinks fastest
        lists.sort_by_key(|list| list.len());

        let mut candidates: Vec<UserId> = lists[0].to_vec();
        for list in &lists[1..] {
            candidates = intersect_sorted(&candidates, list);
            if candidates.is_empty() {
                break;
            }
        }

        candidates
    }
}

/// Linear merge intersection of two ascending id lists.
fn intersect_sorted(a: &[UserId], b: &[UserId]) -> Vec<UserId> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            result.push(a[i]);
            i += 1;
            j += 1;
        }
    }

    result
}
