use std::fmt::Display;

use cliclack::{intro as cliclack_intro, log, outro as cliclack_outro};
use console::style;
use serde::Serialize;

const DEFAULT_INTRO: &str = "HYPERDOC";

pub fn intro() {
    cliclack_intro(style(DEFAULT_INTRO).on_cyan().black()).unwrap();
}

pub fn outro(msg: impl Display) {
    cliclack_outro(msg).unwrap();
}

pub fn info(msg: impl Display) {
    log::info(msg).unwrap();
}

pub fn warn(msg: impl Display) {
    log::warning(msg).unwrap();
}

pub fn error(msg: impl Display) {
    log::error(style(msg).red()).unwrap();
}

pub fn success(msg: impl Display) {
    log::success(msg).unwrap();
}

pub fn step(msg: impl Display) {
    log::step(msg).unwrap();
}

pub fn object_to_string(obj: impl Serialize) -> String {
    serde_json::to_string_pretty(&obj).unwrap()
}

pub fn new_empty_line() {
    println!();
}
