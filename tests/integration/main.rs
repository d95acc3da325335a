//! Integration tests for threadreplay

mod helpers;

mod config_test;
mod timeline_test;
