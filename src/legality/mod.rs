pub mod move_legality;
pub mod rays;

pub use move_legality::{candidates, check_move, Candidates, Verdict};
