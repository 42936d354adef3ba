// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Error, Result};
use std::ops::AddAssign;

/// Pre-sized container holding one result per worker, indexed by worker id
///
/// Each slot accepts exactly one write. Aggregation requires every slot to be
/// filled, so a total can only be observed once all workers have been joined.
#[derive(Debug, Clone)]
pub struct ResultSlots<O> {
    slots: Vec<Option<O>>,
}

impl<O> ResultSlots<O> {
    pub fn new(num_workers: usize) -> Self {
        Self {
            slots: (0..num_workers).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store the result of `worker_id`
    pub fn fill(&mut self, worker_id: usize, value: O) -> Result<()> {
        let slot = self
            .slots
            .get_mut(worker_id)
            .ok_or(Error::SlotMissing { worker_id })?;
        if slot.is_some() {
            return Err(Error::SlotAlreadyFilled { worker_id });
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn get(&self, worker_id: usize) -> Option<&O> {
        self.slots.get(worker_id).and_then(Option::as_ref)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Results in worker order
    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.slots.iter().flatten()
    }
}

impl<O: Default + AddAssign + Clone> ResultSlots<O> {
    /// Sum of every worker's result
    pub fn aggregate(&self) -> Result<O> {
        let mut total = O::default();
        for (worker_id, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(value) => total += value.clone(),
                None => return Err(Error::SlotMissing { worker_id }),
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_sums_all_slots() {
        let mut slots = ResultSlots::new(3);
        slots.fill(2, 5u64).unwrap();
        slots.fill(0, 1u64).unwrap();
        slots.fill(1, 10u64).unwrap();
        assert!(slots.is_complete());
        assert_eq!(slots.aggregate().unwrap(), 16);
        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), vec![1, 10, 5]);
    }

    #[test]
    fn test_aggregate_refuses_partial_results() {
        let mut slots = ResultSlots::new(2);
        slots.fill(0, 7u64).unwrap();
        assert!(!slots.is_complete());
        assert!(matches!(
            slots.aggregate(),
            Err(Error::SlotMissing { worker_id: 1 })
        ));
    }

    #[test]
    fn test_slot_written_once() {
        let mut slots = ResultSlots::new(1);
        slots.fill(0, 1u64).unwrap();
        assert!(matches!(
            slots.fill(0, 2u64),
            Err(Error::SlotAlreadyFilled { worker_id: 0 })
        ));
        assert_eq!(slots.get(0), Some(&1));
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut slots = ResultSlots::<u64>::new(1);
        assert!(slots.fill(5, 1).is_err());
        assert_eq!(slots.get(5), None);
    }
}
