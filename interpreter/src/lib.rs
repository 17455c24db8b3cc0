// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod interpreter;
mod scope;
mod value;

pub use self::{
    error::{RuntimeError, RuntimeResult},
    interpreter::Interpreter,
    scope::{Context, Scope, Variable},
    value::{StructObject, Value, VariantObject},
};
