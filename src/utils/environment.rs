use crate::utils::{DefaultRandom, Random, ThreadPool};
use std::sync::Arc;

/// Specifies a logger type used by the solver to report progress.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of the bounded worker pool shared across a whole solve.
#[derive(Clone)]
pub struct Parallelism {
    num_threads: usize,
    thread_pool: Arc<ThreadPool>,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with given amount of worker threads.
    pub fn new(num_threads: usize) -> Self {
        Self { num_threads, thread_pool: Arc::new(ThreadPool::new(num_threads)) }
    }

    /// Returns amount of worker threads.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Executes given operation on the worker pool, blocking until it completes.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.thread_pool.execute(op)
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

/// Keeps data which is shared across a whole solve.
#[derive(Clone)]
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A parallelism configuration with the shared worker pool.
    pub parallelism: Parallelism,
    /// An info logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates a new instance of `Environment` with a seeded random generator and default settings.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            random: Arc::new(DefaultRandom::default()),
            parallelism: Parallelism::default(),
            logger: Arc::new(|msg: &str| println!("{msg}")),
        }
    }
}
