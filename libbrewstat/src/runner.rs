use combiner::Combine;
use emitter::{FinalVecEmitter, IntermediateVecEmitter};
use errors::*;
use grouper::Group;
use intermediate::IntermediateInputKV;
use mapper::Map;
use record::BeerRecord;
use reducer::Reduce;
use registry::Dimension;

/// `DimensionOutput` holds the result of running one dimension over a record set.
#[derive(Debug, PartialEq)]
pub struct DimensionOutput<K, O> {
    /// The reduced output of every group, in the order the grouper produced them.
    pub groups: Vec<(K, O)>,
    /// The combined output of all groups. `None` if the dimension has no combiner or there were
    /// no groups.
    pub combined: Option<O>,
}

/// `run_dimension` runs map, group, reduce and combine over `records`.
///
/// Each group output is folded into the combined result as soon as it has been reduced, so the
/// combine stage never needs the complete set of group outputs at once. Only the first group
/// output is cloned, to seed the combined result; later ones are combined by reference.
pub fn run_dimension<M, G, R, C>(
    records: &[BeerRecord],
    dimension: &Dimension<M, G, R, C>,
) -> Result<DimensionOutput<M::Key, R::Output>>
where
    M: Map,
    G: Group<M::Key, M::Value>,
    R: Reduce<M::Value>,
    R::Output: Clone,
    C: Combine<R::Output>,
{
    let pairs = run_map(records, dimension.mapper)
        .chain_err(|| format!("Error running map for dimension {}.", dimension.name))?;
    debug!(
        "Dimension {}: {} of {} records mapped",
        dimension.name,
        pairs.len(),
        records.len()
    );

    let groups = dimension
        .grouper
        .group(pairs)
        .chain_err(|| format!("Error grouping pairs for dimension {}.", dimension.name))?;
    debug!("Dimension {}: {} groups", dimension.name, groups.len());

    let mut output = DimensionOutput {
        groups: Vec::with_capacity(groups.len()),
        combined: None,
    };

    for group in groups {
        let (key, reduced) = run_reduce(group, dimension.reducer)
            .chain_err(|| format!("Error running reduce for dimension {}.", dimension.name))?;

        if let Some(combiner) = dimension.combiner {
            output.combined = match output.combined.take() {
                None => Some(reduced.clone()),
                Some(acc) => Some(combiner.combine(acc, &reduced).chain_err(|| {
                    format!("Error running combine for dimension {}.", dimension.name)
                })?),
            };
        }

        output.groups.push((key, reduced));
    }

    Ok(output)
}

fn run_map<M: Map>(records: &[BeerRecord], mapper: &M) -> Result<Vec<(M::Key, M::Value)>> {
    let mut pairs: Vec<(M::Key, M::Value)> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let before = pairs.len();
        mapper
            .map(record, IntermediateVecEmitter::new(&mut pairs))
            .chain_err(|| format!("Error mapping record {}.", index + 1))?;
        if pairs.len() - before > 1 {
            return Err(format!(
                "Mapper emitted {} pairs for record {}, at most one is allowed",
                pairs.len() - before,
                index + 1
            ).into());
        }
    }

    Ok(pairs)
}

fn run_reduce<K, V, R>(group: IntermediateInputKV<K, V>, reducer: &R) -> Result<(K, R::Output)>
where
    R: Reduce<V>,
{
    let IntermediateInputKV { key, values } = group;
    let mut sink: Vec<R::Output> = Vec::with_capacity(1);

    reducer.reduce(
        IntermediateInputKV::new((), values),
        FinalVecEmitter::new(&mut sink),
    )?;

    if sink.len() != 1 {
        return Err(format!("Reducer emitted {} values for one group, expected one", sink.len()).into());
    }
    let reduced = sink.remove(0);

    Ok((key, reduced))
}
