use emitter::EmitIntermediate;
use errors::*;
use record::BeerRecord;

/// The `Map` trait defines a function for performing a map operation on one input record.
///
/// The output types are decided by the implementation of this trait.
///
/// # Arguments
///
/// * `input` - The record to extract a key-value pair from.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the runner.
///
/// # Outputs
///
/// An empty result used for returning an error. The output pair of the map operation is sent out
/// through the `emitter`. A mapper emits at most one pair per record; a record it cannot make
/// sense of is skipped rather than reported as an error.
pub trait Map {
    type Key;
    type Value;
    fn map<E>(&self, input: &BeerRecord, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use emitter::IntermediateVecEmitter;

    struct TestMapper;
    impl Map for TestMapper {
        type Key = String;
        type Value = String;
        fn map<E>(&self, input: &BeerRecord, mut emitter: E) -> Result<()>
        where
            E: EmitIntermediate<Self::Key, Self::Value>,
        {
            emitter.emit(input.name.clone(), "test".to_owned())?;
            Ok(())
        }
    }

    #[test]
    fn test_mapper_test_interface() {
        let mut vec: Vec<(String, String)> = Vec::new();
        let record = BeerRecord {
            name: "Pliny".to_owned(),
            ..Default::default()
        };

        TestMapper
            .map(&record, IntermediateVecEmitter::new(&mut vec))
            .unwrap();

        assert_eq!("Pliny", vec[0].0);
        assert_eq!("test", vec[0].1);
    }

    #[test]
    fn test_mapper_with_associated_types() {
        let mut vec: Vec<(<TestMapper as Map>::Key, <TestMapper as Map>::Value)> = Vec::new();

        TestMapper
            .map(&BeerRecord::default(), IntermediateVecEmitter::new(&mut vec))
            .unwrap();

        assert_eq!("", vec[0].0);
        assert_eq!("test", vec[0].1);
    }
}
