// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
pub mod Utils;
pub mod algebra;

pub use algebra::config::EvalConfig;
pub use algebra::errors::AlgebraError;
pub use algebra::evaluate::{Evaluator, evaluate};
