//! # Record Store
//!
//! The authoritative in-memory collection plus the monotonic id generator.
//! It is the only owner of the [`CollectionState`]; everything else goes
//! through its four mutating/reading operations.
//!
//! Ids are never reused: `next_id` only grows, deletions leave gaps.

use crate::error::{Result, RosterError};
use crate::model::{CollectionState, Employee, ValidEmployee};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    state: CollectionState,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a loaded snapshot, bumping `next_id` past every stored id.
    ///
    /// A stored id of `u64::MAX` leaves `next_id` there; the next insert is
    /// then refused instead of reusing it.
    pub fn from_state(mut state: CollectionState) -> Self {
        let floor = state
            .employees
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max.checked_add(1).unwrap_or(u64::MAX));
        if state.next_id < floor {
            state.next_id = floor;
        }
        Self { state }
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn next_id(&self) -> u64 {
        self.state.next_id
    }

    pub fn len(&self) -> usize {
        self.state.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.employees.is_empty()
    }

    pub fn all_records(&self) -> &[Employee] {
        &self.state.employees
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Employee> {
        self.state.employees.iter().find(|e| e.id == id)
    }

    /// Fails with a storage error, leaving the collection untouched, once the
    /// id space is exhausted.
    pub fn insert(&mut self, valid: ValidEmployee) -> Result<Employee> {
        let id = self.state.next_id;
        let next_id = id
            .checked_add(1)
            .filter(|_| id > 0 && self.find_by_id(id).is_none())
            .ok_or_else(|| {
                RosterError::Storage(format!("no employee id left to assign after {}", id))
            })?;
        self.state.next_id = next_id;
        let employee = Employee::from_valid(id, valid);
        self.state.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replaces the field values of `id` in place. `None` if absent.
    pub fn replace(&mut self, id: u64, valid: ValidEmployee) -> Option<Employee> {
        let employee = self.state.employees.iter_mut().find(|e| e.id == id)?;
        employee.apply(valid);
        Some(employee.clone())
    }

    /// Removes `id`, returning the removed record. `None` if absent.
    pub fn remove(&mut self, id: u64) -> Option<Employee> {
        let pos = self.state.employees.iter().position(|e| e.id == id)?;
        Some(self.state.employees.remove(pos))
    }
}

/// Checks the structural invariants a loaded snapshot must hold: ids are
/// positive, pairwise distinct, and leave room for `next_id` to advance.
pub fn has_valid_ids(state: &CollectionState) -> bool {
    if state.next_id == u64::MAX {
        return false;
    }
    let mut seen = HashSet::with_capacity(state.employees.len());
    state
        .employees
        .iter()
        .all(|e| e.id > 0 && e.id < u64::MAX && seen.insert(e.id))
}
