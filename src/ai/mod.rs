//! Move-selection policies. Each policy simulates candidate moves on
//! cloned boards and never mutates the real game state.

mod greedy;
mod lookahead;
mod policy;
mod random;

pub use greedy::GreedyPolicy;
pub use lookahead::LookaheadPolicy;
pub use policy::MovePolicy;
pub use random::RandomPolicy;
