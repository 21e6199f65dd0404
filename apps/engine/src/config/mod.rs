pub mod game;
pub mod pool;

pub use game::GameConfig;
pub use pool::{default_pool, load_pool, parse_pool};
