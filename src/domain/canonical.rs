// ============================================================================
// Canonical Form
// Ordered pipeline of pure transforms over a radix's digit triple
// ============================================================================
//
// Steps, in order:
// 1. strip leading zeros from the integer part
// 2. shrink the repeating part to its minimal period
// 3. fold copies (or a rotation) of the cycle out of the non-repeating tail
// 4. drop an all-zero cycle
// 5. replace a cycle of (base - 1) digits by a carry into the finite part
//
// Deciding whether the result is zero is left to the caller.

use crate::numeric::{carry_in, Digit};

/// Unsigned digits of a radix: integer, non-repeating and repeating parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    pub integer_part: Vec<Digit>,
    pub non_repeating_part: Vec<Digit>,
    pub repeating_part: Vec<Digit>,
}

impl Magnitude {
    pub fn new(
        integer_part: Vec<Digit>,
        non_repeating_part: Vec<Digit>,
        repeating_part: Vec<Digit>,
    ) -> Self {
        Self {
            integer_part,
            non_repeating_part,
            repeating_part,
        }
    }

    /// Whether every digit in every part is zero.
    pub fn is_zero(&self) -> bool {
        self.integer_part
            .iter()
            .chain(&self.non_repeating_part)
            .chain(&self.repeating_part)
            .all(|&d| d == 0)
    }
}

/// Run the full pipeline.
pub fn canonicalize(magnitude: Magnitude, base: u32) -> Magnitude {
    let Magnitude {
        integer_part,
        non_repeating_part,
        mut repeating_part,
    } = magnitude;

    let integer_part = strip_leading_zeros(integer_part);

    repeating_part.truncate(repeat_length(&repeating_part));
    let (non_repeating_part, repeating_part) =
        fold_overlap(non_repeating_part, repeating_part);

    let repeating_part = clear_zero_cycle(repeating_part);

    collapse_nines(
        Magnitude::new(integer_part, non_repeating_part, repeating_part),
        base,
    )
}

/// Remove leading zero digits; an all-zero integer part becomes empty.
pub fn strip_leading_zeros(mut integer_part: Vec<Digit>) -> Vec<Digit> {
    let zeros = integer_part.iter().take_while(|&&d| d == 0).count();
    integer_part.drain(..zeros);
    integer_part
}

/// Length of the minimal period of `part`.
///
/// A candidate period `p` must divide the length and tile `part` exactly
/// with copies of `part[..p]`. If none does, the period is the full length.
pub fn repeat_length(part: &[Digit]) -> usize {
    let len = part.len();
    let Some(&first) = part.first() else {
        return 0;
    };

    (1..=len / 2)
        .filter(|&p| part[p] == first && len % p == 0)
        .find(|&p| part.chunks(p).all(|chunk| chunk == &part[..p]))
        .unwrap_or(len)
}

/// Move any suffix of `non_repeating` that already belongs to the cycle
/// into a rotated `repeating`.
///
/// First whole copies of the cycle are stripped from the tail, stepping
/// back one cycle width at a time. Then the longest partial match between
/// the end of the cycle and the remaining tail is removed and the cycle is
/// rotated right by that many digits.
///
/// For `[6, 1, 2, 1, 2]` with `[1, 2]` the result is `[6]`, `[1, 2]`.
/// For `[6, 2, 1, 2]` with `[1, 2]` the result is `[6]`, `[2, 1]`.
pub fn fold_overlap(
    mut non_repeating: Vec<Digit>,
    mut repeating: Vec<Digit>,
) -> (Vec<Digit>, Vec<Digit>) {
    if repeating.is_empty() {
        return (non_repeating, repeating);
    }

    let width = repeating.len();
    let len = non_repeating.len();

    // The sequence of candidates always reaches a value below one cycle
    // width, and such a candidate cannot hold a whole copy.
    let end = (0..=len)
        .rev()
        .step_by(width)
        .find(|&i| i < width || non_repeating[i - width..i] != repeating[..])
        .expect("scan reaches a candidate shorter than one cycle");

    let shift = (1..=end.min(width - 1))
        .rev()
        .find(|&i| repeating[width - i..] == non_repeating[end - i..end])
        .unwrap_or(0);

    if end - shift != len {
        tracing::trace!(
            stripped = len - (end - shift),
            rotation = shift,
            "folded non-repeating tail into cycle"
        );
    }

    non_repeating.truncate(end - shift);
    repeating.rotate_right(shift);
    (non_repeating, repeating)
}

/// An all-zero cycle contributes nothing.
pub fn clear_zero_cycle(repeating: Vec<Digit>) -> Vec<Digit> {
    if repeating.iter().all(|&d| d == 0) {
        if !repeating.is_empty() {
            tracing::trace!(width = repeating.len(), "cleared zero cycle");
        }
        Vec::new()
    } else {
        repeating
    }
}

/// A cycle made only of `base - 1` digits equals a carry of one into the
/// last non-repeating place.
pub fn collapse_nines(magnitude: Magnitude, base: u32) -> Magnitude {
    let top = base - 1;
    let Magnitude {
        mut integer_part,
        non_repeating_part,
        repeating_part,
    } = magnitude;

    if repeating_part.is_empty() || repeating_part.iter().any(|&d| d != top) {
        return Magnitude::new(integer_part, non_repeating_part, repeating_part);
    }

    tracing::trace!(base, "collapsed trailing (base - 1) cycle into a carry");

    let (carry, non_repeating_part) = carry_in(&non_repeating_part, 1, base);
    if carry != 0 {
        let (carry, integer) = carry_in(&integer_part, carry, base);
        integer_part = integer;
        if carry != 0 {
            integer_part.insert(0, carry);
        }
    }

    Magnitude::new(integer_part, non_repeating_part, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros(vec![0, 0]), Vec::<Digit>::new());
        assert_eq!(strip_leading_zeros(vec![0, 1, 0]), vec![1, 0]);
        assert_eq!(strip_leading_zeros(vec![3]), vec![3]);
    }

    #[test]
    fn test_repeat_length() {
        assert_eq!(repeat_length(&[]), 0);
        assert_eq!(repeat_length(&[1, 2, 1, 2]), 2);
        assert_eq!(repeat_length(&[1, 2, 3]), 3);
        assert_eq!(repeat_length(&[7, 7, 7]), 1);
        assert_eq!(repeat_length(&[1, 2, 1]), 3);
        assert_eq!(repeat_length(&[1, 2, 1, 1, 2, 1]), 3);
        assert_eq!(repeat_length(&[1, 1, 2, 1, 1, 2]), 3);
    }

    #[test]
    fn test_fold_whole_copies() {
        assert_eq!(
            fold_overlap(vec![6, 1, 2, 1, 2], vec![1, 2]),
            (vec![6], vec![1, 2])
        );
        assert_eq!(
            fold_overlap(vec![1, 2, 1, 2], vec![1, 2]),
            (vec![], vec![1, 2])
        );
        assert_eq!(fold_overlap(vec![6, 1, 2], vec![1, 2]), (vec![6], vec![1, 2]));
    }

    #[test]
    fn test_fold_rotation() {
        assert_eq!(
            fold_overlap(vec![6, 2, 1, 2], vec![1, 2]),
            (vec![6], vec![2, 1])
        );
        // 0.0123(123) = 0.0(123)
        assert_eq!(
            fold_overlap(vec![0, 1, 2, 3], vec![1, 2, 3]),
            (vec![0], vec![1, 2, 3])
        );
        // 0.23(123) = 0.(231)
        assert_eq!(
            fold_overlap(vec![2, 3], vec![1, 2, 3]),
            (vec![], vec![2, 3, 1])
        );
    }

    #[test]
    fn test_fold_nothing_to_do() {
        assert_eq!(fold_overlap(vec![5, 4], vec![1, 2]), (vec![5, 4], vec![1, 2]));
        assert_eq!(fold_overlap(vec![], vec![1, 2]), (vec![], vec![1, 2]));
        assert_eq!(fold_overlap(vec![1, 2], vec![]), (vec![1, 2], vec![]));
    }

    #[test]
    fn test_clear_zero_cycle() {
        assert_eq!(clear_zero_cycle(vec![0, 0]), Vec::<Digit>::new());
        assert_eq!(clear_zero_cycle(vec![0, 1]), vec![0, 1]);
    }

    #[test]
    fn test_collapse_nines() {
        // 0.(9) = 1
        let m = collapse_nines(Magnitude::new(vec![], vec![], vec![9]), 10);
        assert_eq!(m, Magnitude::new(vec![1], vec![], vec![]));

        // 1.2(9) = 1.3
        let m = collapse_nines(Magnitude::new(vec![1], vec![2], vec![9]), 10);
        assert_eq!(m, Magnitude::new(vec![1], vec![3], vec![]));

        // 9.9(9) = 10.0
        let m = collapse_nines(Magnitude::new(vec![9], vec![9], vec![9]), 10);
        assert_eq!(m, Magnitude::new(vec![1, 0], vec![0], vec![]));

        // 0.(1) in base 2 = 1
        let m = collapse_nines(Magnitude::new(vec![], vec![], vec![1]), 2);
        assert_eq!(m, Magnitude::new(vec![1], vec![], vec![]));
    }

    #[test]
    fn test_canonicalize_pipeline() {
        let m = canonicalize(
            Magnitude::new(vec![0, 0], vec![9, 9], vec![9, 9, 9]),
            10,
        );
        assert_eq!(m, Magnitude::new(vec![1], vec![], vec![]));

        let m = canonicalize(
            Magnitude::new(vec![0, 4], vec![6, 2, 1, 2], vec![1, 2, 1, 2]),
            10,
        );
        assert_eq!(m, Magnitude::new(vec![4], vec![6], vec![2, 1]));

        let m = canonicalize(Magnitude::new(vec![], vec![5], vec![0, 0]), 10);
        assert_eq!(m, Magnitude::new(vec![], vec![5], vec![]));
    }

    #[test]
    fn test_magnitude_is_zero() {
        assert!(Magnitude::new(vec![], vec![0, 0], vec![]).is_zero());
        assert!(!Magnitude::new(vec![], vec![0, 1], vec![]).is_zero());
    }
}
