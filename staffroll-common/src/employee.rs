//! Employee record types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EditorConfig;

/// Opaque record identifier, handed out in increasing order by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender flag, flipped by a single toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn toggled(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Editable text fields of a record. Gender is toggle-only and has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Salary,
    Age,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Salary => "salary",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: String, // digits while focused, grouped (or a band label) at rest
    #[serde(default)]
    pub age: String, // empty when not set
    #[serde(default)]
    pub gender: Gender,
}

impl Employee {
    /// Fresh record carrying the configured defaults
    pub fn new(id: EmployeeId, config: &EditorConfig) -> Self {
        Self {
            id,
            name: config.name_placeholder.clone(),
            salary: config.salary.initial_value(),
            age: String::new(),
            gender: Gender::default(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Salary => &self.salary,
            Field::Age => &self.age,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Salary => self.salary = value,
            Field::Age => self.age = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_defaults() {
        let config = EditorConfig::default();
        let emp = Employee::new(EmployeeId::new(7), &config);

        assert_eq!(emp.id.get(), 7);
        assert_eq!(emp.name, "New Employee");
        assert_eq!(emp.salary, "0");
        assert!(emp.age.is_empty());
        assert_eq!(emp.gender, Gender::Male);
    }

    #[test]
    fn test_gender_toggle() {
        assert_eq!(Gender::Male.toggled(), Gender::Female);
        assert_eq!(Gender::Female.toggled(), Gender::Male);
        assert_eq!(Gender::Male.toggled().toggled(), Gender::Male);
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let config = EditorConfig::default();
        let mut emp = Employee::new(EmployeeId::new(1), &config);
        let before = emp.clone();

        emp.set_field(Field::Age, "30".to_string());

        assert_eq!(emp.field(Field::Age), "30");
        assert_eq!(emp.name, before.name);
        assert_eq!(emp.salary, before.salary);
        assert_eq!(emp.gender, before.gender);
    }

    #[test]
    fn test_employee_serialization() {
        let config = EditorConfig::default();
        let mut emp = Employee::new(EmployeeId::new(3), &config);
        emp.gender = Gender::Female;

        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["gender"], "female");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back, emp);
    }
}
