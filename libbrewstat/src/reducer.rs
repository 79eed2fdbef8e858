use emitter::EmitFinal;
use errors::*;
use intermediate::IntermediateInputKV;

/// The `Reduce` trait defines a reduce operation as a fold over the values of one group.
///
/// Implementations provide `fold`, which adds one value to an accumulator, and `finish`, which
/// turns the accumulator into the output of the group. Since folding starts from
/// `Accumulator::default()`, an empty group still produces a well defined output.
///
/// `fold` must not depend on the order values arrive in.
pub trait Reduce<V> {
    type Accumulator: Default;
    type Output;

    fn fold(&self, acc: Self::Accumulator, value: V) -> Self::Accumulator;

    fn finish(&self, acc: Self::Accumulator) -> Self::Output;

    /// Reduces a whole group and sends exactly one output through `emitter`.
    ///
    /// # Arguments
    ///
    /// * `input` - A `IntermediateInputKV` containing the values of one group.
    /// * `emitter` - A struct implementing the `EmitFinal` trait, provided by the runner.
    fn reduce<K, E>(&self, input: IntermediateInputKV<K, V>, mut emitter: E) -> Result<()>
    where
        E: EmitFinal<Self::Output>,
    {
        let acc = input
            .values
            .into_iter()
            .fold(Default::default(), |acc, value| self.fold(acc, value));
        emitter.emit(self.finish(acc))?;
        Ok(())
    }
}
