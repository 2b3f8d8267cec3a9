// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses the two arguments and hands them to `dispatch`.
//
// Module responsibilities:
// - `action`: the closed set of actions the CLI accepts.
// - `payload`: JSON payload templates keyed by action.
// - `api`: blocking HTTP client bound to the fixed endpoint.
// - `dispatch`: the single build/announce/send/print sequence.
// - `ui`: everything written to the terminal.
// - `error`: named failure conditions.
pub mod action;
pub mod api;
pub mod dispatch;
pub mod error;
pub mod payload;
pub mod ui;
