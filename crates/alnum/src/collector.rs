//! Single owner of a run's aggregate.
//!
//! Workers never touch the mapping or the record list. They send their
//! [`Draw`]s to the collector, which files each one under its worker index and
//! builds the [`ResultSet`] once every worker has reported.
//!
//! Records are ordered by worker index rather than by arrival, which keeps
//! seeded runs reproducible no matter how the workers were scheduled. The
//! mapping is built from that same order, so when several workers draw the same
//! digit-token the highest worker index wins.

use crate::{Draw, Error, Mapping, Record, Result, ResultSet};
use std::sync::Arc;

#[derive(Debug)]
pub struct Collector {
    slots: Vec<Option<Draw>>,
    received: usize,
}

impl Collector {
    /// Creates a collector expecting one draw from each of `workers` workers.
    pub fn new(workers: usize) -> Self {
        Self {
            slots: vec![None; workers],
            received: 0,
        }
    }

    pub const fn expected(&self) -> usize {
        self.slots.len()
    }

    pub const fn received(&self) -> usize {
        self.received
    }

    pub const fn is_complete(&self) -> bool {
        self.received == self.slots.len()
    }

    /// Files `draw` under its worker index.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownWorker`] if the worker index is out of range.
    /// - [`Error::DuplicateDraw`] if that worker already reported.
    pub fn push(&mut self, draw: Draw) -> Result<()> {
        let worker = draw.worker;
        let slot = self
            .slots
            .get_mut(worker)
            .ok_or(Error::UnknownWorker { worker })?;
        if slot.is_some() {
            return Err(Error::DuplicateDraw { worker });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(worker, digit = %draw.digit, letter = %draw.letter, "collected draw");

        *slot = Some(draw);
        self.received += 1;
        Ok(())
    }

    /// Builds the result set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDraw`] for the first worker that never
    /// reported.
    pub fn finish(self) -> Result<ResultSet> {
        let mut draws = Vec::with_capacity(self.slots.len());
        for (worker, slot) in self.slots.into_iter().enumerate() {
            draws.push(slot.ok_or(Error::MissingDraw { worker })?);
        }

        let mut mapping = Mapping::new();
        for d in &draws {
            mapping.insert(d.digit.clone(), d.letter.clone());
        }
        let mapping = Arc::new(mapping);

        let records = draws
            .into_iter()
            .map(|d| Record {
                letter: d.letter,
                digit: d.digit,
                mapping: Arc::clone(&mapping),
            })
            .collect();

        Ok(ResultSet::new(records, mapping))
    }
}
