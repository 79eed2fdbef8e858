use combiner::{Combine, NullCombiner};
use errors::*;
use grouper::Group;
use mapper::Map;
use reducer::Reduce;

/// `Dimension` tracks the implementations of Map, Group, Reduce and Combine making up one
/// summary statistic.
///
/// Use the `DimensionBuilder` to create this and then pass it in to `run_dimension`.
pub struct Dimension<'a, M, G, R, C>
where
    M: Map + 'a,
    G: Group<M::Key, M::Value> + 'a,
    R: Reduce<M::Value> + 'a,
    C: Combine<R::Output> + 'a,
{
    pub name: &'a str,
    pub mapper: &'a M,
    pub grouper: &'a G,
    pub reducer: &'a R,
    pub combiner: Option<&'a C>,
}

/// `DimensionBuilder` is used to create a `Dimension`.
pub struct DimensionBuilder<'a, M, G, R, C>
where
    M: Map + 'a,
    G: Group<M::Key, M::Value> + 'a,
    R: Reduce<M::Value> + 'a,
    C: Combine<R::Output> + 'a,
{
    name: &'a str,
    mapper: Option<&'a M>,
    grouper: Option<&'a G>,
    reducer: Option<&'a R>,
    combiner: Option<&'a C>,
}

impl<'a, M, G, R, C> Default for DimensionBuilder<'a, M, G, R, C>
where
    M: Map + 'a,
    G: Group<M::Key, M::Value> + 'a,
    R: Reduce<M::Value> + 'a,
    C: Combine<R::Output> + 'a,
{
    fn default() -> DimensionBuilder<'a, M, G, R, C> {
        DimensionBuilder {
            name: "unnamed",
            mapper: None,
            grouper: None,
            reducer: None,
            combiner: None,
        }
    }
}

impl<'a, M, G, R, C> DimensionBuilder<'a, M, G, R, C>
where
    M: Map + 'a,
    G: Group<M::Key, M::Value> + 'a,
    R: Reduce<M::Value> + 'a,
    C: Combine<R::Output> + 'a,
{
    pub fn new() -> DimensionBuilder<'a, M, G, R, C> {
        Default::default()
    }

    pub fn name(&mut self, name: &'a str) -> &mut DimensionBuilder<'a, M, G, R, C> {
        self.name = name;
        self
    }

    pub fn mapper(&mut self, mapper: &'a M) -> &mut DimensionBuilder<'a, M, G, R, C> {
        self.mapper = Some(mapper);
        self
    }

    pub fn grouper(&mut self, grouper: &'a G) -> &mut DimensionBuilder<'a, M, G, R, C> {
        self.grouper = Some(grouper);
        self
    }

    pub fn reducer(&mut self, reducer: &'a R) -> &mut DimensionBuilder<'a, M, G, R, C> {
        self.reducer = Some(reducer);
        self
    }

    pub fn combiner(&mut self, combiner: &'a C) -> &mut DimensionBuilder<'a, M, G, R, C> {
        self.combiner = Some(combiner);
        self
    }

    pub fn build(&self) -> Result<Dimension<'a, M, G, R, C>> {
        let mapper = self.mapper
            .chain_err(|| format!("Error building dimension {}: No Mapper provided", self.name))?;
        let grouper = self.grouper
            .chain_err(|| format!("Error building dimension {}: No Grouper provided", self.name))?;
        let reducer = self.reducer
            .chain_err(|| format!("Error building dimension {}: No Reducer provided", self.name))?;

        Ok(Dimension {
            name: self.name,
            mapper,
            grouper,
            reducer,
            combiner: self.combiner,
        })
    }
}

/// Construct a `DimensionBuilder` that does not need a `Combine` implementation
impl<'a, M, G, R> DimensionBuilder<'a, M, G, R, NullCombiner>
where
    M: Map + 'a,
    G: Group<M::Key, M::Value> + 'a,
    R: Reduce<M::Value> + 'a,
{
    pub fn new_no_combiner() -> DimensionBuilder<'a, M, G, R, NullCombiner> {
        Default::default()
    }
}
