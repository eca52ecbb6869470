pub mod angular_velocity;
pub mod length;

#[cfg(test)]
mod angular_velocity_test;

pub use angular_velocity::AngularVelocity;
pub use length::{AU_TO_SCENE, DISPLAY_RADIUS_DIVISOR, LIGHT_YEAR_TO_SCENE, Length};
