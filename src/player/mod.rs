pub mod camera;
pub mod input;
pub mod interaction;
pub mod physics;

pub use camera::{Controls, FirstPersonCamera};
pub use input::{ClickButton, InputEvent, InputState, MoveKeys};
pub use interaction::{InteractionController, InteractionOutcome};
pub use physics::{MotionState, Player};
