//! Sampling of two related elements from a candidate list.

use rand::Rng;

/// Pick two elements of `candidates` that lie at most `max_distance`
/// positions apart (wrapping around the end of the slice).
///
/// The first element is chosen uniformly. The second sits at a random
/// non-zero offset from it, so the two indices differ whenever the slice
/// holds more than one element. A single candidate is returned twice and
/// an empty slice yields `None`.
pub fn choose_two<'a, T, R>(
    candidates: &'a [T],
    max_distance: usize,
    rng: &mut R,
) -> Option<(&'a T, &'a T)>
where
    R: Rng + ?Sized,
{
    let len = candidates.len();
    if len == 0 {
        return None;
    }

    let first = rng.gen_range(0..len);
    if len == 1 {
        return Some((&candidates[first], &candidates[first]));
    }

    // Offsets larger than len - 1 could wrap back onto `first`.
    let distance = max_distance.clamp(1, len - 1);
    let step = rng.gen_range(0..distance * 2);
    let offset = if step < distance {
        step as isize - distance as isize
    } else {
        (step - distance + 1) as isize
    };
    let second = (first as isize + offset).rem_euclid(len as isize) as usize;

    Some((&candidates[first], &candidates[second]))
}
