//! Integration tests for dynfilter live under `tests/`.
