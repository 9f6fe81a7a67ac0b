//! Integration tests for `ipgen-common`'s public API.

#[cfg(test)]
mod fragments;
