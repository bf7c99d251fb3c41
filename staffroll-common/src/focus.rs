//! Deferred focus/select requests
//!
//! The editor never holds element handles. It records what should receive
//! focus and the UI resolves that by id once the element has been rendered.

use serde::{Deserialize, Serialize};

use crate::employee::{EmployeeId, Field};

/// Element id used for a record's input, e.g. `employee-name-3`
pub fn element_id(id: EmployeeId, field: Field) -> String {
    format!("employee-{}-{}", field, id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRequest {
    pub seq: u64,
    pub id: EmployeeId,
    pub field: Field,
    pub select: bool, // select the whole contents after focusing
}

impl FocusRequest {
    pub fn element_id(&self) -> String {
        element_id(self.id, self.field)
    }
}

/// Something that can move focus to a record's field
pub trait FocusTarget {
    /// Apply the request. Returns false if the target element does not exist
    /// yet, in which case the request stays pending for the next render.
    fn deliver(&mut self, request: &FocusRequest) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id() {
        assert_eq!(element_id(EmployeeId::new(3), Field::Name), "employee-name-3");

        let request = FocusRequest {
            seq: 1,
            id: EmployeeId::new(12),
            field: Field::Salary,
            select: true,
        };
        assert_eq!(request.element_id(), "employee-salary-12");
    }
}
