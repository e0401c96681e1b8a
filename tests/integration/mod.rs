//! Integration Tests Module
//!
//! End-to-end batch runs from input file to output file, plus optional checks
//! against a live node.
