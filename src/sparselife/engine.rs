use hashbrown::HashSet;
use tracing::{debug, trace};

use super::coord::Coord;
use super::counts::{NeighborCounts, count_neighbors, count_neighbors_sharded};

const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;

/// Errors raised while building an engine.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("failed to build neighbor-count thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for a SparseLife engine instance.
///
/// Use `SparseLifeConfig::default()` for a sequential-by-default engine that
/// shards counting only on large populations, or customise individual knobs
/// via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct SparseLifeConfig {
    /// Worker threads for sharded neighbor counting.
    /// `None` means rayon's default (available parallelism).
    pub thread_count: Option<usize>,
    /// Hard upper bound on threads regardless of `thread_count`.
    pub max_threads: Option<usize>,
    /// Population at or above which counting is sharded.
    /// `None` means 4096.
    pub parallel_threshold: Option<usize>,
}

impl SparseLifeConfig {
    /// Set an explicit thread count for sharded counting.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on threads.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }

    /// Population at which sharded counting kicks in. `0` always shards.
    pub fn parallel_threshold(mut self, population: usize) -> Self {
        self.parallel_threshold = Some(population);
        self
    }
}

/// Resolve the thread count from a config, falling back to rayon's default.
fn resolve_thread_count(config: &SparseLifeConfig) -> usize {
    let mut threads = config
        .thread_count
        .unwrap_or_else(rayon::current_num_threads);
    if let Some(cap) = config.max_threads {
        threads = threads.min(cap);
    }
    threads.max(1)
}

/// Conway's Game of Life (B3/S23) over a hashed set of live cells.
///
/// The grid is unbounded up to the `i64` range. Cells at the range edge have
/// no neighbors beyond it, so nothing is ever counted or born there.
pub struct SparseLife {
    live: HashSet<Coord>,
    generation: u64,
    /// Present only when more than one worker was configured.
    pool: Option<rayon::ThreadPool>,
    parallel_threshold: usize,
}

impl Default for SparseLife {
    fn default() -> Self {
        Self::new(std::iter::empty::<Coord>())
    }
}

impl<C: Into<Coord>> FromIterator<C> for SparseLife {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl SparseLife {
    /// Build a single-threaded engine. Duplicate coordinates collapse.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        Self {
            live: cells.into_iter().map(Into::into).collect(),
            generation: 0,
            pool: None,
            parallel_threshold: usize::MAX,
        }
    }

    /// Build an engine with explicit configuration.
    pub fn with_config<I>(cells: I, config: SparseLifeConfig) -> Result<Self, LifeError>
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let threads = resolve_thread_count(&config);
        let pool = if threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("sparse-life-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        let mut engine = Self::new(cells);
        engine.pool = pool;
        engine.parallel_threshold = config
            .parallel_threshold
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        Ok(engine)
    }

    fn neighbor_counts(&self) -> NeighborCounts {
        match &self.pool {
            Some(pool) if self.live.len() >= self.parallel_threshold => {
                debug!(
                    population = self.live.len(),
                    threads = pool.current_num_threads(),
                    "sharded neighbor count"
                );
                pool.install(|| count_neighbors_sharded(&self.live))
            }
            _ => count_neighbors(&self.live),
        }
    }

    /// Advance exactly one generation.
    ///
    /// Counts are taken against the whole current generation before the next
    /// live set is assembled in a fresh container, which then replaces the
    /// old one in a single assignment.
    pub fn advance(&mut self) {
        let counts = self.neighbor_counts();

        let mut next = HashSet::with_capacity(self.live.len());
        let mut births = 0usize;
        for (&coord, &count) in &counts {
            match count {
                3 => {
                    if !self.live.contains(&coord) {
                        births += 1;
                    }
                    next.insert(coord);
                }
                2 if self.live.contains(&coord) => {
                    next.insert(coord);
                }
                _ => {}
            }
        }

        let survivors = next.len() - births;
        trace!(
            generation = self.generation + 1,
            population = next.len(),
            births,
            deaths = self.live.len() - survivors,
            "advance"
        );

        self.live = next;
        self.generation += 1;
    }

    pub fn advance_n(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, coord: impl Into<Coord>) -> bool {
        self.live.contains(&coord.into())
    }

    /// `(min_x, min_y, max_x, max_y)` of the live cells.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let mut cells = self.live.iter();
        let first = cells.next()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(cells.fold(init, |(min_x, min_y, max_x, max_y), c| {
            (min_x.min(c.x), min_y.min(c.y), max_x.max(c.x), max_y.max(c.y))
        }))
    }

    /// Live cells in unspecified order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for c in &self.live {
            f(c.x, c.y);
        }
    }

    /// Live cells ordered by `(x, y)`.
    pub fn sorted_cells(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}
