mod apply;
mod check;
mod legality;
mod movegen;
mod perft;

pub use apply::*;
pub use check::*;
pub use legality::*;
pub use movegen::*;
pub use perft::*;
