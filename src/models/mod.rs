pub mod board;
pub mod character;
pub mod crop;
pub mod normalize;

pub use board::Board;
pub use character::Character;
pub use crop::Crop;
pub use normalize::{Defaults, ParsedBoards, RawBoard, RawCharacter};
