//! Distinct in-place permutations
//!
//! Swap, recurse, swap back. Each level remembers which letters it has
//! already placed at its position so repeated letters don't produce the same
//! ordering twice.

use rustc_hash::FxHashSet;

/// Visit every distinct ordering of `letters[start..]`
///
/// `letters[..start]` is left fixed. `visit` receives the whole buffer each
/// time the suffix is fully permuted. The buffer is back in its original
/// order when this returns `Ok`.
///
/// # Errors
///
/// Stops at and returns the first error produced by `visit`. The buffer may
/// be left permuted in that case.
pub fn for_each_permutation<F, E>(
    letters: &mut [char],
    start: usize,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&[char]) -> Result<(), E>,
{
    if start >= letters.len() {
        return visit(&*letters);
    }

    // Letters already tried at `start` in this frame
    let mut placed: FxHashSet<char> = FxHashSet::default();

    for i in start..letters.len() {
        if !placed.insert(letters[i]) {
            continue;
        }
        letters.swap(start, i);
        for_each_permutation(letters, start + 1, visit)?;
        letters.swap(start, i);
    }

    Ok(())
}
