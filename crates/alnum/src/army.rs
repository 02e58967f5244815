use crate::{
    Collector, Error, GeneratorConfig, RandSource, Result, ResultSet, SeededRandom, draw,
    random_seed,
};
use std::thread;

/// Runs one generation on scoped OS threads.
///
/// Each worker is seeded once from the config's master seed (or from a fresh
/// random master seed) and sends its single draw to the collector on the
/// calling thread. Returns after every worker has joined.
///
/// # Errors
///
/// Configuration errors are returned before any thread is spawned. See
/// [`generate_with`] for runtime failures.
pub fn generate(config: &GeneratorConfig) -> Result<ResultSet> {
    config.validate()?;
    let master = resolve_seed(config);
    generate_with(config, |worker| SeededRandom::for_worker(master, worker))
}

/// Like [`generate`], with a caller-supplied random source per worker.
///
/// `source` is called once per worker, on the calling thread, before that
/// worker is spawned.
///
/// # Errors
///
/// - [`Error::InvalidWorkerCount`] for a zero worker count.
/// - [`Error::WorkerPanicked`] if a worker panics.
/// - [`Error::ChannelError`] if the draw channel fails.
pub fn generate_with<R, F>(config: &GeneratorConfig, source: F) -> Result<ResultSet>
where
    R: RandSource + Send,
    F: Fn(usize) -> R,
{
    config.validate()?;

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "generate",
        workers = config.workers,
        policy = %config.policy,
        runtime = "threads"
    )
    .entered();

    let (tx, rx) = crossbeam_channel::bounded(config.workers);
    let mut collector = Collector::new(config.workers);

    thread::scope(|s| -> Result<()> {
        let mut handles = Vec::with_capacity(config.workers);
        for worker in 0..config.workers {
            let tx = tx.clone();
            let mut rng = source(worker);
            let letters = &config.letters;
            let digits = &config.digits;
            let policy = config.policy;
            let handle = thread::Builder::new()
                .name(format!("alnum-worker-{worker}"))
                .spawn_scoped(s, move || {
                    let d = draw(worker, letters, digits, policy, &mut rng);
                    tx.send(d).map_err(|_| Error::ChannelError {
                        context: format!("collector dropped before worker {worker} reported"),
                    })
                })
                .map_err(|e| Error::ChannelError {
                    context: format!("failed to spawn worker {worker}: {e}"),
                })?;
            handles.push(handle);
        }
        // Only worker clones may keep the channel open.
        drop(tx);

        // Join every worker before reporting so a later panic cannot escape the
        // scope; the lowest failing worker wins.
        let mut first_err = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            let outcome = handle
                .join()
                .map_err(|_| Error::WorkerPanicked { worker })
                .and_then(|sent| sent);
            if let Err(e) = outcome {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    })?;

    for d in rx.try_iter() {
        collector.push(d)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(collected = collector.received(), "all workers joined");

    collector.finish()
}

pub(crate) fn resolve_seed(config: &GeneratorConfig) -> u64 {
    let seed = config.seed.unwrap_or_else(random_seed);
    #[cfg(feature = "tracing")]
    tracing::debug!(seed, configured = config.seed.is_some(), "master seed");
    seed
}
