mod common;

mod batch;
mod clone;
mod properties;
