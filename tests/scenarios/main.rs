//! Scenario-based tests for thermoci

mod helpers;

mod conversion_inputs;
mod reentrancy;
