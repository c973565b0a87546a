pub mod configure;
pub mod consume_randomness;
pub mod deposit_prize;
pub mod despawn_creature;
pub mod force_spawn_creature;
pub mod initialize;
pub mod purchase_balls;
pub mod reposition_creature;
pub mod spawn_creature;
pub mod throw_ball;
pub mod withdraw_prize;
pub mod withdraw_revenue;

#[allow(ambiguous_glob_reexports)]
pub use configure::*;
pub use consume_randomness::*;
pub use deposit_prize::*;
pub use despawn_creature::*;
pub use force_spawn_creature::*;
pub use initialize::*;
pub use purchase_balls::*;
pub use reposition_creature::*;
pub use spawn_creature::*;
pub use throw_ball::*;
pub use withdraw_prize::*;
pub use withdraw_revenue::*;
