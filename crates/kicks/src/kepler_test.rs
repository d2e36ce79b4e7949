use approx::assert_relative_eq;
use units::{Length, Mass, Time};

use crate::error::KickError;
use crate::kepler::{period_from_separation, separation_from_period};

#[test]
fn earth_sun_period_is_one_year() {
    let a = Length::from_au(1.0).to_cm();
    let m_sun = Mass::from_solar_masses(1.0).to_grams();
    let m_earth = Mass::from_grams(5.972e27).to_grams();

    let period = period_from_separation(a, m_sun, m_earth).unwrap();
    assert_relative_eq!(
        Time::from_seconds(period).to_years(),
        1.0,
        max_relative = 1e-3
    );
}

#[test]
fn round_trip_recovers_separation() {
    let m1 = Mass::from_solar_masses(10.0).to_grams();
    let m2 = Mass::from_solar_masses(8.0).to_grams();

    for rsun in [1.0, 10.0, 100.0, 5000.0] {
        let a = Length::from_solar_radii(rsun).to_cm();
        let p = period_from_separation(a, m1, m2).unwrap();
        let back = separation_from_period(p, m1, m2).unwrap();
        assert_relative_eq!(back, a, max_relative = 1e-12);
    }
}

#[test]
fn wider_orbits_have_longer_periods() {
    let m1 = Mass::from_solar_masses(1.4).to_grams();
    let m2 = Mass::from_solar_masses(8.0).to_grams();

    let narrow = period_from_separation(Length::from_solar_radii(10.0).to_cm(), m1, m2).unwrap();
    let wide = period_from_separation(Length::from_solar_radii(100.0).to_cm(), m1, m2).unwrap();
    assert!(wide > narrow);
}

#[test]
fn non_positive_input_is_a_domain_error() {
    let m = Mass::from_solar_masses(1.0).to_grams();

    let err = period_from_separation(0.0, m, m).unwrap_err();
    assert!(matches!(
        err,
        KickError::Domain {
            parameter: "separation",
            ..
        }
    ));

    let err = period_from_separation(1.0e12, -m, m).unwrap_err();
    assert!(matches!(err, KickError::Domain { parameter: "m1", .. }));

    let err = separation_from_period(f64::NAN, m, m).unwrap_err();
    assert!(matches!(
        err,
        KickError::Domain {
            parameter: "period",
            ..
        }
    ));
}
