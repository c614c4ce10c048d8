//! Tests for record normalization
//!
//! Shared fixtures shaped like the published meteorite and fireball tables.

pub mod meteorite_tests;

use crate::app::models::RawRecord;
use crate::app::services::tabular_parser::parse_tabular;

/// Build a record from header/value pairs
pub fn create_record(fields: &[(&str, &str)]) -> RawRecord {
    fields.iter().copied().collect()
}

/// Meteorite landings excerpt including rows without coordinates
pub fn create_meteorite_csv() -> String {
    r#"name,id,nametype,recclass,mass (g),fall,year,reclat,reclong,GeoLocation
Aachen,1,Valid,L5,21,Fell,1880,50.775000,6.083330,(50.775000
Aarhus,2,Valid,H6,720,Fell,1951,56.183330,10.233330,(56.183330
Abee,6,Valid,EH4,107000,Fell,1952,54.216670,-113.000000,(54.216670
Acapulco,10,Valid,Acapulcoite,1914,Fell,1976,16.883330,-99.900000,(16.883330
Achiras,370,Valid,L6,780,Fell,1902,-33.166670,-64.950000,(-33.166670
Adhi Kot,379,Valid,EH4,4239,Fell,1919,,,
Agen,392,Valid,H5,30000,Fell,1814,44.216670,
Unknown,999,Valid,L6,12,Found,1990,n/a,12.5,"#
        .to_string()
}

/// Fireball reports excerpt mixing hemisphere letters and signed decimals
pub fn create_fireball_csv() -> String {
    r#"Peak Brightness Date/Time (UT),Latitude (Deg),Longitude (Deg),Altitude (km),Velocity (km/s),Total Radiated Energy (J),Calculated Total Impact Energy (kt)
2024-03-05 12:20:11,22.0S,29.2E,31.5,18.1,3.2e10,0.12
2024-02-11 03:15:02,33.5N,176.2W,,21.4,1.1e11,0.36
2024-01-21 00:32:38,44.2S,144.9E,26.0,,5.0e10,0.18
2023-12-01 11:00:00,,,40.0,15.0,2.0e10,0.09
2023-11-11 07:07:07,abc,20.0E,33.0,12.0,1.0e10,0.05
2023-10-10 10:10:10,95.0N,200.0W,28.0,14.0,9.0e9,0.04"#
        .to_string()
}

pub fn parse_fixture(text: &str) -> Vec<RawRecord> {
    parse_tabular(text)
}
