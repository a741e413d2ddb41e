#![allow(non_snake_case)]
use RustedAlgebra::Examples::algebra_examples::algebra_examples;
use RustedAlgebra::Utils::config::AlgebraSettings;
use RustedAlgebra::Utils::logger::init_logger;
use std::env;
use std::path::Path;

// usage: RustedAlgebra [example number] ; logging is read from ./algebra.toml when present
fn main() {
    let settings = if Path::new("algebra.toml").exists() {
        AlgebraSettings::from_file("algebra.toml").unwrap_or_else(|e| {
            println!("{}, default settings used", e);
            AlgebraSettings::default()
        })
    } else {
        AlgebraSettings::default()
    };
    init_logger(&settings);
    let example = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(0);
    algebra_examples(example);
}
