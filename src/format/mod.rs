mod car_registration;
mod postal_code;
mod region;

pub use crate::format::car_registration::{car_reg, PolishCarRegistration};
pub use crate::format::postal_code::{postal_code, PolishPostalCode};
pub use crate::format::region::{
    region, region_full, PolishRegionCode, PolishRegionName, Voivodeship,
};
