/// The `IntermediateInputKV` is a struct for passing one group of mapped values to a `Reduce`.
///
/// `IntermediateInputKV` is a thin wrapper around a `(Key, Vec<Value>)`,
/// used for creating a clearer API.
/// It can be constructed normally or using `IntermediateInputKV::new()`.
#[derive(Debug, Default, PartialEq)]
pub struct IntermediateInputKV<K, V> {
    pub key: K,
    pub values: Vec<V>,
}

impl<K, V> IntermediateInputKV<K, V> {
    pub fn new(key: K, values: Vec<V>) -> Self {
        IntermediateInputKV { key, values }
    }
}
