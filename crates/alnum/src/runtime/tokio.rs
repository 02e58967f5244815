use crate::army::resolve_seed;
use crate::{Collector, Error, GeneratorConfig, RandSource, Result, ResultSet, SeededRandom, draw};
use tokio::sync::mpsc;

/// Runs one generation on [`tokio`](https://docs.rs/tokio) tasks.
///
/// Same contract as [`crate::generate`]: a given master seed yields the same
/// [`ResultSet`] on either runner. Must be awaited from within a tokio
/// runtime.
///
/// # Errors
///
/// Configuration errors are returned before any task is spawned. See
/// [`generate_async_with`] for runtime failures.
pub async fn generate_async(config: &GeneratorConfig) -> Result<ResultSet> {
    config.validate()?;
    let master = resolve_seed(config);
    generate_async_with(config, |worker| SeededRandom::for_worker(master, worker)).await
}

/// Like [`generate_async`], with a caller-supplied random source per worker.
///
/// # Errors
///
/// - [`Error::InvalidWorkerCount`] for a zero worker count.
/// - [`Error::WorkerPanicked`] if a task panics or is cancelled.
/// - [`Error::ChannelError`] if the draw channel fails.
pub async fn generate_async_with<R, F>(config: &GeneratorConfig, source: F) -> Result<ResultSet>
where
    R: RandSource + Send + 'static,
    F: Fn(usize) -> R,
{
    config.validate()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        workers = config.workers,
        policy = %config.policy,
        runtime = "tokio",
        "generate"
    );

    // Sized so no worker ever waits on the collector.
    let (tx, mut rx) = mpsc::channel(config.workers);
    let mut handles = Vec::with_capacity(config.workers);

    for worker in 0..config.workers {
        let tx = tx.clone();
        let mut rng = source(worker);
        let letters = config.letters.clone();
        let digits = config.digits.clone();
        let policy = config.policy;
        handles.push(tokio::spawn(async move {
            let d = draw(worker, &letters, &digits, policy, &mut rng);
            tx.send(d).await.map_err(|_| Error::ChannelError {
                context: format!("collector dropped before worker {worker} reported"),
            })
        }));
    }
    drop(tx);

    let mut first_err = None;
    for (worker, handle) in handles.into_iter().enumerate() {
        let outcome = handle
            .await
            .map_err(|_| Error::WorkerPanicked { worker })
            .and_then(|sent| sent);
        if let Err(e) = outcome {
            first_err.get_or_insert(e);
        }
    }
    if let Some(e) = first_err {
        return Err(e);
    }

    let mut collector = Collector::new(config.workers);
    while let Some(d) = rx.recv().await {
        collector.push(d)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(collected = collector.received(), "all tasks joined");

    collector.finish()
}
