#![doc = include_str!("../README.md")]

pub mod config;

pub mod entity;
pub use entity::Updateable;

pub mod inline_fn;
pub use inline_fn::InlineFn;

mod metrics;
pub use metrics::*;

pub mod population;

mod reporters;
pub use reporters::*;

mod runner;
pub use runner::{invoke_all, run_single, BenchmarkRunner, Outcome};

pub mod strategy;

mod timer;
pub use timer::ScopedTimer;
