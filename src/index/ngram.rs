use std::collections::HashSet;

/// Generate the deduplicated n-gram set of `text` for gram lengths
/// `min_gram..=max_gram`, in first-occurrence order.
///
/// Text shorter than `min_gram` contributes no grams. Grams are produced
/// over characters, not bytes, so multi-byte usernames window correctly.
pub fn generate_ngrams(text: &str, min_gram: usize, max_gram: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < min_gram {
        return Vec::new();
    }

    let mut grams = Vec::new();
    let mut seen = HashSet::new();

    for n in min_gram..=max_gram.min(chars.len()) {
        for i in 0..=chars.len() - n {
            let gram: String = chars[i..i + n].iter().collect();
            if seen.insert(gram.clone()) {
                grams.push(gram);
            }
        }
    }

    grams
}
