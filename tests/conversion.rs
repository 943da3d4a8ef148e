use approx::{assert_abs_diff_eq, assert_relative_eq};
use saf_pathway_toolbox::{
    conversion::{parse_currency, parse_fuel_unit, DisplayConverter},
    units::{convert_fuel_quantity, unit_factor, Currency, FuelUnit, LITERS_PER_GALLON},
};

#[test]
fn unit_factors_follow_density() {
    assert_abs_diff_eq!(unit_factor(FuelUnit::Gallon, 0.8), 1.0);
    assert_relative_eq!(unit_factor(FuelUnit::Liter, 0.8), 3.785411784);
    assert_relative_eq!(unit_factor(FuelUnit::Kilogram, 0.8), 0.8 * LITERS_PER_GALLON);
    assert_relative_eq!(unit_factor(FuelUnit::Tonne, 0.8), 0.8 * LITERS_PER_GALLON / 1000.0);
    // 밀도가 바뀌면 질량 단위 계수만 바뀐다
    assert_relative_eq!(unit_factor(FuelUnit::Kilogram, 0.75), 0.75 * LITERS_PER_GALLON);
    assert_relative_eq!(unit_factor(FuelUnit::Liter, 0.75), LITERS_PER_GALLON);
}

#[test]
fn display_round_trip_all_units_and_currencies() {
    for currency in Currency::ALL {
        for unit in FuelUnit::ALL {
            for density in [0.1, 0.78, 0.8, 0.84] {
                let conv = DisplayConverter::new(currency, currency.default_fx_rate(), unit, density);
                for usd in [0.0, 0.37, 2.30, 4.8571] {
                    let back = conv.from_display(conv.to_display(usd));
                    assert_abs_diff_eq!(back, usd, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn display_round_trip_is_relative_for_any_magnitude() {
    for currency in Currency::ALL {
        for fx in [currency.default_fx_rate(), 1e-6, 0.731, 1234.5] {
            for unit in FuelUnit::ALL {
                for density in [0.1, 0.8, 1.3] {
                    let conv = DisplayConverter::new(currency, fx, unit, density);
                    for usd in [1e-9, 1e-6, 0.37, 4.8571, 1e6, 1e9, -2.5] {
                        let back = conv.from_display(conv.to_display(usd));
                        assert_relative_eq!(back, usd, max_relative = 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn eur_per_liter_display() {
    let conv = DisplayConverter::new(Currency::Eur, 0.92, FuelUnit::Liter, 0.8);
    assert_relative_eq!(conv.to_display(3.785411784), 0.92, max_relative = 1e-12);
    assert_eq!(conv.label(), "EUR/L");
}

#[test]
fn tonne_display_scales_up_per_gallon_price() {
    let conv = DisplayConverter::new(Currency::Usd, 1.0, FuelUnit::Tonne, 0.8);
    // 1 t = 1000 / (0.8 × 3.785411784) gal
    let gallons_per_tonne = 1000.0 / (0.8 * LITERS_PER_GALLON);
    assert_relative_eq!(conv.to_display(1.0), gallons_per_tonne, max_relative = 1e-12);
}

#[test]
fn fuel_quantity_conversion() {
    let liters = convert_fuel_quantity(10.0, FuelUnit::Gallon, FuelUnit::Liter, 0.8);
    assert_relative_eq!(liters, 37.85411784);
    let kg = convert_fuel_quantity(liters, FuelUnit::Liter, FuelUnit::Kilogram, 0.8);
    assert_relative_eq!(kg, 37.85411784 * 0.8);
}

#[test]
fn parse_codes() {
    assert_eq!(parse_fuel_unit("gal").unwrap(), FuelUnit::Gallon);
    assert_eq!(parse_fuel_unit(" L ").unwrap(), FuelUnit::Liter);
    assert_eq!(parse_fuel_unit("tonne").unwrap(), FuelUnit::Tonne);
    assert!(parse_fuel_unit("barrel").is_err());
    assert_eq!(parse_currency("eur").unwrap(), Currency::Eur);
    assert_eq!(parse_currency("KRW").unwrap(), Currency::Krw);
    assert!(parse_currency("xyz").is_err());
}
