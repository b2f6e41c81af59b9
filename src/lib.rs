// Library root
// -----------
// This crate exposes the pieces of the course registration CLI. The
// binary (`main.rs`) wires them together and runs the menu loop.
//
// Module responsibilities:
// - `model`: the `Record` / `Roster` types and their JSON shape.
// - `validate`: field rules for names and course names.
// - `storage`: reading and writing the roster file.
// - `console`: menu, prompts, roster display and error reports.
// - `app`: the menu loop that owns the roster.
// - `config`: where the roster file lives.
pub mod app;
pub mod config;
pub mod console;
pub mod model;
pub mod storage;
pub mod validate;
