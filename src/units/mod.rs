//! 단위 및 통화 정의 모듈 모음.

pub mod currency;
pub mod fuel;

pub use currency::{convert_from_usd, convert_to_usd, Currency};
pub use fuel::{
    convert_fuel_quantity, unit_factor, FuelUnit, DEFAULT_JET_DENSITY_KG_PER_L,
    LITERS_PER_GALLON,
};
