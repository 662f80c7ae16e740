//! Scenario tests across the scene, picking and runtime modules

mod frame_loop;
mod selection_scenarios;
