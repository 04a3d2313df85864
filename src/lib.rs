//! Workspace-level integration tests for sortbench live under `tests/`.
