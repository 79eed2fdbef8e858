use errors::*;

/// The `Combine` trait defines a function for merging the reduced outputs of two groups.
///
/// `combine` must be associative and commutative: the runner merges outputs one at a time as
/// groups finish, in whatever order the grouper produced them.
///
/// # Arguments
///
/// * `left`  - The result combined so far, taken by value so it can be extended in place.
/// * `right` - The output of the next group, borrowed from the runner which keeps it.
///
/// # Outputs
///
/// The merged result, or an error.
pub trait Combine<T> {
    fn combine(&self, left: T, right: &T) -> Result<T>;
}

/// A null implementation for `Combine` as this is an optional component.
/// It is only used as a type placeholder by dimensions without a combine stage.
pub struct NullCombiner;
impl<T> Combine<T> for NullCombiner {
    fn combine(&self, _left: T, _right: &T) -> Result<T> {
        Err("This code should never run".into())
    }
}
