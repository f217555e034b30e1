//! Integration tests for the feeroute workspace live in `tests/`.
