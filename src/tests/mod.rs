//! Test suites that exercise the library end to end and the command line.

mod cli_tests;
