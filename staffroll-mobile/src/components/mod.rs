//! Reusable mobile UI components

pub mod employee_card;
pub mod gender_toggle;
pub mod header;
pub mod salary_input;
pub mod swipe_card;

pub use employee_card::EmployeeCard;
pub use gender_toggle::GenderToggle;
pub use header::Header;
pub use salary_input::SalaryInput;
pub use swipe_card::SwipeCard;
