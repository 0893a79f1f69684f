pub mod capacity;
pub mod irradiance;
