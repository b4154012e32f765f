mod build;
mod node;
mod print;

pub use node::*;
pub use print::{dump, print, value_text, Printer};
