// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;

/// Space separated text of `num_words` words where roughly one word in
/// `marker_every` is picked from `markers`, punctuated at random.
///
/// Filler words are lowercase ASCII, 1 to `max_word_length` letters long
/// (at least one letter even when `max_word_length` is 0).
pub fn generate_text(
    rng: &mut impl Rng,
    num_words: usize,
    max_word_length: usize,
    markers: &[&str],
    marker_every: u32,
) -> String {
    let max_word_length = max_word_length.max(1);
    let mut text = String::new();
    for i in 0..num_words {
        if i > 0 {
            text.push(' ');
        }
        if !markers.is_empty() && rng.random_ratio(1, marker_every.max(1)) {
            text.push_str(markers[rng.random_range(0..markers.len())]);
        } else {
            let letters = rng.random_range(1..=max_word_length);
            text.extend((0..letters).map(|_| char::from(rng.random_range(b'a'..=b'z'))));
        }
        if rng.random_ratio(1, 10) {
            text.push(',');
        }
    }
    text
}
