//! Diff module - set partitioning of two value sequences.


use crate::value::Value;

/// Difference holds the three-way partition of two value sequences.
///
/// No element is counted twice: `left.len() + intersection.len()` equals
/// the length of the left input, and every right-input value lands in
/// either `intersection` or `right`, with multiplicity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Difference {
    /// Values of the left sequence that are not in the right sequence.
    pub left: Vec<Value>,
    /// Values present in both sequences, matched one-for-one.
    pub intersection: Vec<Value>,
    /// Values of the right sequence that are not in the left sequence.
    pub right: Vec<Value>,
}

/// Partitions two sequences into left-only, intersection and right-only.
///
/// Each left value is searched in what remains of a working copy of the
/// right sequence; a hit moves into the intersection and consumes that one
/// occurrence, so duplicates match one-for-one rather than many-to-one.
/// What survives of the working copy becomes the right-only bucket,
/// renumbered from zero.
pub fn difference(left: &[Value], right: &[Value]) -> Difference {
    let mut result = Difference {
        right: right.to_vec(),
        ..Difference::default()
    };

    for item in left {
        match result.right.iter().position(|v| v == item) {
            Some(pos) => {
                result.intersection.push(item.clone());
                result.right.remove(pos);
            }
            None => result.left.push(item.clone()),
        }
    }

    result
}

/// Returns the values present in both sequences.
pub fn intersection(left: &[Value], right: &[Value]) -> Vec<Value> {
    difference(left, right).intersection
}

/// Returns the values of the left sequence that are not in the right one.
pub fn left_divergence(left: &[Value], right: &[Value]) -> Vec<Value> {
    difference(left, right).left
}

/// Returns the values of the right sequence that are not in the left one.
pub fn right_divergence(left: &[Value], right: &[Value]) -> Vec<Value> {
    difference(left, right).right
}
