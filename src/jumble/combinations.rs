//! Distinct letter combinations
//!
//! Enumerates every non-empty sub-multiset of a sorted letter sequence
//! exactly once, even when letters repeat.

/// Visit every distinct non-empty combination of `letters`
///
/// `letters` must be sorted so equal letters are adjacent. The combination is
/// built in `buffer` (appended to at the tail and popped on the way back), and
/// `visit` sees the buffer after every append. Once a letter has been tried at
/// a level, all of its consecutive copies are skipped at that level, which is
/// what keeps identical combinations from being produced twice.
///
/// Visiting order is depth-first: for "abc" it is
/// `a, ab, abc, ac, b, bc, c`.
///
/// # Errors
///
/// Stops at and returns the first error produced by `visit`.
pub fn for_each_combination<F, E>(
    letters: &[char],
    buffer: &mut Vec<char>,
    start: usize,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[char]) -> Result<(), E>,
{
    let mut i = start;

    while i < letters.len() {
        buffer.push(letters[i]);
        visit(buffer.as_slice())?;
        for_each_combination(letters, buffer, i + 1, visit)?;
        buffer.pop();

        // Skip every copy of the letter just tried
        let current = letters[i];
        while i < letters.len() && letters[i] == current {
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn collect(word: &str) -> Vec<String> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();

        let mut found = Vec::new();
        let mut buffer = Vec::new();
        for_each_combination(&letters, &mut buffer, 0, &mut |combination: &[char]| {
            found.push(combination.iter().collect::<String>());
            Ok::<(), Infallible>(())
        })
        .unwrap();

        assert!(buffer.is_empty(), "buffer must be restored");
        found
    }

    #[test]
    fn combinations_distinct_letters_in_order() {
        assert_eq!(
            collect("cba"),
            vec!["a", "ab", "abc", "ac", "b", "bc", "c"]
        );
    }

    #[test]
    fn combinations_empty_input() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn combinations_single_letter() {
        assert_eq!(collect("x"), vec!["x"]);
    }

    #[test]
    fn combinations_skip_repeated_letters() {
        assert_eq!(collect("aab"), vec!["a", "aa", "aab", "ab", "b"]);
    }

    #[test]
    fn combinations_all_same_letter() {
        assert_eq!(collect("aaa"), vec!["a", "aa", "aaa"]);
    }

    #[test]
    fn combinations_are_unique() {
        let found = collect("mississippi");
        let mut deduped = found.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(found.len(), deduped.len());

        // m:1 i:4 s:4 p:2 -> 2 * 5 * 5 * 3 - 1
        assert_eq!(found.len(), 149);
    }

    #[test]
    fn combinations_count_is_power_set_for_distinct_letters() {
        assert_eq!(collect("abcdef").len(), (1 << 6) - 1);
    }

    #[test]
    fn combinations_stop_on_error() {
        let letters = ['a', 'b', 'c'];
        let mut seen = 0;
        let result = for_each_combination(&letters, &mut Vec::new(), 0, &mut |_: &[char]| {
            seen += 1;
            if seen == 3 { Err("stop") } else { Ok(()) }
        });

        assert_eq!(result, Err("stop"));
        assert_eq!(seen, 3);
    }
}
