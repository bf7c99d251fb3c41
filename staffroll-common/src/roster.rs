//! Ordered employee collection
//!
//! Records are held behind `Rc` so that cloning the roster (which the Yew
//! reducer does on every event) is cheap and untouched records stay
//! pointer-equal across edits. Mutation goes through `Rc::make_mut`, which
//! copies a record only when an older snapshot still shares it.
//!
//! Ids come from a private counter and are never handed out twice, so a
//! roster can only be built up through `add`.

use std::rc::Rc;
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::employee::{Employee, EmployeeId, Field, Gender};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<Rc<Employee>>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with default values and return its id
    pub fn add(&mut self, config: &EditorConfig) -> EmployeeId {
        self.next_id += 1;
        let id = EmployeeId::new(self.next_id);
        self.employees.push(Rc::new(Employee::new(id, config)));
        info!(%id, count = self.employees.len(), "employee added");
        id
    }

    /// Replace one field of one record. Returns false if `id` is unknown.
    pub fn update(&mut self, id: EmployeeId, field: Field, value: String) -> bool {
        let Some(slot) = self.employees.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if slot.field(field) != value {
            debug!(%id, %field, "employee field updated");
            Rc::make_mut(slot).set_field(field, value);
        }
        true
    }

    /// Flip gender, returning the new value
    pub fn toggle_gender(&mut self, id: EmployeeId) -> Option<Gender> {
        let slot = self.employees.iter_mut().find(|e| e.id == id)?;
        let emp = Rc::make_mut(slot);
        emp.gender = emp.gender.toggled();
        debug!(%id, gender = %emp.gender, "gender toggled");
        Some(emp.gender)
    }

    /// Filter a record out of the list
    pub fn remove(&mut self, id: EmployeeId) -> Option<Rc<Employee>> {
        self.take(id).map(|(_, removed)| removed)
    }

    /// Like `remove`, also reporting the position the record had
    pub fn take(&mut self, id: EmployeeId) -> Option<(usize, Rc<Employee>)> {
        let index = self.position(id)?;
        let removed = self.employees.remove(index);
        info!(%id, count = self.employees.len(), "employee removed");
        Some((index, removed))
    }

    pub fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id).map(|e| e.as_ref())
    }

    /// Shared handle to a record, for identity checks and cheap hand-off to views
    pub fn get_rc(&self, id: EmployeeId) -> Option<Rc<Employee>> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Employee>> {
        self.employees.iter()
    }

    pub fn ids(&self) -> Vec<EmployeeId> {
        self.employees.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Owned copies of every record, in list order
    pub fn to_vec(&self) -> Vec<Employee> {
        self.employees.iter().map(|e| e.as_ref().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster_with(n: usize) -> (Roster, Vec<EmployeeId>) {
        let config = EditorConfig::default();
        let mut roster = Roster::new();
        let ids = (0..n).map(|_| roster.add(&config)).collect();
        (roster, ids)
    }

    #[test]
    fn test_add_assigns_distinct_ids_and_defaults() {
        let (roster, ids) = roster_with(5);

        assert_eq!(roster.len(), 5);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(roster.ids(), ids);

        for emp in roster.iter() {
            assert_eq!(emp.name, "New Employee");
            assert_eq!(emp.salary, "0");
            assert_eq!(emp.gender, Gender::Male);
        }
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let config = EditorConfig::default();
        let mut roster = Roster::new();
        let first = roster.add(&config);
        roster.remove(first);
        let second = roster.add(&config);
        assert_ne!(first, second);
    }

    #[test]
    fn test_ids_unique_across_remove_and_add_cycles() {
        let config = EditorConfig::default();
        let mut roster = Roster::new();
        let mut seen = HashSet::new();

        for _ in 0..10 {
            let id = roster.add(&config);
            assert!(seen.insert(id), "id {} handed out twice", id);
            // dropping the newest record must not free its id
            roster.remove(id);
        }
        let kept = roster.add(&config);
        assert!(seen.insert(kept));
        assert_eq!(roster.ids(), vec![kept]);
    }

    #[test]
    fn test_take_reports_position() {
        let (mut roster, ids) = roster_with(3);
        assert_eq!(roster.position(ids[2]), Some(2));

        let (index, removed) = roster.take(ids[1]).unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.id, ids[1]);
        assert_eq!(roster.position(ids[2]), Some(1));
        assert!(roster.take(ids[1]).is_none());
    }

    #[test]
    fn test_update_only_touches_target() {
        let (mut roster, ids) = roster_with(3);
        let snapshot = roster.clone();

        assert!(roster.update(ids[1], Field::Name, "Alice".to_string()));

        assert_eq!(roster.get(ids[1]).unwrap().name, "Alice");
        assert_eq!(roster.get(ids[1]).unwrap().salary, "0");
        assert_eq!(roster.ids(), ids);

        // untouched records are the very same allocations as before
        for id in [ids[0], ids[2]] {
            let before = snapshot.get_rc(id).unwrap();
            let after = roster.get_rc(id).unwrap();
            assert!(Rc::ptr_eq(&before, &after));
        }
        // the snapshot still sees the old value
        assert_eq!(snapshot.get(ids[1]).unwrap().name, "New Employee");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut roster, _) = roster_with(2);
        let before = roster.clone();
        assert!(!roster.update(EmployeeId::new(999), Field::Name, "Ghost".to_string()));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_update_same_value_keeps_identity() {
        let (mut roster, ids) = roster_with(1);
        let before = roster.get_rc(ids[0]).unwrap();
        assert!(roster.update(ids[0], Field::Salary, "0".to_string()));
        assert!(Rc::ptr_eq(&before, &roster.get_rc(ids[0]).unwrap()));
    }

    #[test]
    fn test_remove() {
        let (mut roster, ids) = roster_with(3);

        let removed = roster.remove(ids[1]).unwrap();
        assert_eq!(removed.id, ids[1]);
        assert_eq!(roster.len(), 2);
        assert!(!roster.contains(ids[1]));
        assert_eq!(roster.ids(), vec![ids[0], ids[2]]);

        assert!(roster.remove(ids[1]).is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_toggle_gender() {
        let (mut roster, ids) = roster_with(2);
        assert_eq!(roster.toggle_gender(ids[0]), Some(Gender::Female));
        assert_eq!(roster.get(ids[1]).unwrap().gender, Gender::Male);
        assert_eq!(roster.toggle_gender(ids[0]), Some(Gender::Male));
        assert_eq!(roster.toggle_gender(EmployeeId::new(42)), None);
    }
}
