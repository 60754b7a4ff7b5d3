mod common;

mod pass;
mod scenario;
