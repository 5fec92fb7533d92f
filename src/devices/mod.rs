//! Modules with the business logic of the project, laying on top of
//! the abstract drivers in `hal`. Devices are generic over the GPIO
//! controller and delay, so the same code drives real hardware and
//! the test doubles.

pub mod blinker;
pub mod cli;
pub mod pulse;
