pub mod clock;
pub mod constants;
pub mod coordinates;
pub mod progress;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::*;
pub use coordinates::{parse_coordinate, validate_coordinates};
pub use progress::ProgressReporter;
