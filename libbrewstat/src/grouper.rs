use std::collections::HashMap;
use std::hash::Hash;

use errors::*;
use intermediate::IntermediateInputKV;

/// The `Group` trait defines a function for grouping the output pairs of a `Map` by key.
///
/// Each key present in `pairs` must appear in exactly one output group. Neither the order of the
/// groups nor the order of values within a group is part of the contract; reducers and combiners
/// must give the same result for any order.
///
/// # Arguments
///
/// * `pairs` - Every key-value pair emitted by the mapper over the whole input.
///
/// # Outputs
///
/// A `Result<Vec<IntermediateInputKV>>`, one entry per distinct key.
pub trait Group<K, V> {
    fn group(&self, pairs: Vec<(K, V)>) -> Result<Vec<IntermediateInputKV<K, V>>>;
}

/// `HashGrouper` implements `Group` for any key that can be hashed.
///
/// Groups come out in the order their key was first seen and values keep their arrival order,
/// so the same input always produces the same groups.
pub struct HashGrouper;

impl<K, V> Group<K, V> for HashGrouper
where
    K: Hash + Eq + Clone,
{
    fn group(&self, pairs: Vec<(K, V)>) -> Result<Vec<IntermediateInputKV<K, V>>> {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<IntermediateInputKV<K, V>> = Vec::new();

        for (key, value) in pairs {
            if let Some(&position) = index.get(&key) {
                groups[position].values.push(value);
                continue;
            }
            index.insert(key.clone(), groups.len());
            groups.push(IntermediateInputKV::new(key, vec![value]));
        }

        Ok(groups)
    }
}

/// `GlobalGrouper` puts every value into a single group, for dimensions without a grouping key.
///
/// No group is produced when there are no pairs.
pub struct GlobalGrouper;

impl<V> Group<(), V> for GlobalGrouper {
    fn group(&self, pairs: Vec<((), V)>) -> Result<Vec<IntermediateInputKV<(), V>>> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }
        let values = pairs.into_iter().map(|(_, value)| value).collect();
        Ok(vec![IntermediateInputKV::new((), values)])
    }
}
