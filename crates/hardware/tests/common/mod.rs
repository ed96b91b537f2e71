//! Shared helpers for the simulator tests.
