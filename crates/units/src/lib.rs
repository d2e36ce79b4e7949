pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;


pub use length::{Length, SOLAR_RADIUS_CM};
pub use mass::{Mass, GM_SUN, GRAVITATIONAL_CONSTANT, SOLAR_MASS_G};
pub use time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR};
pub use velocity::{Velocity, KM_TO_CM};
