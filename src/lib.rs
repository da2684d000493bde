#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod consensus;
pub mod msa;
pub mod reads;
pub mod utils;
