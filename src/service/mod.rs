//! Business logic orchestration between controllers and the data layer.

pub mod bootcamp;
pub mod geocoder;

#[cfg(test)]
mod test;
