//! Movement domain: system modules for locomotion input.

pub(crate) mod input;

pub(crate) use input::read_move_input;
