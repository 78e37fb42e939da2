//! Unit test modules.

mod batch_test;
