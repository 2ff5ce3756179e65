//! Internal test modules.

mod encoding_tests;
mod resource_tests;
