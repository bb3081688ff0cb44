#![no_main]

use codec::{FloatingPoint, OpenLocationCode, WideInteger};
use libfuzzer_sys::fuzz_target;

fn read_f64(bytes: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    f64::from_le_bytes(raw)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let latitude = read_f64(&data[..8]);
    let longitude = read_f64(&data[8..16]);
    if !latitude.is_finite() || !longitude.is_finite() {
        return;
    }
    let length = usize::from(data[16] % 16);

    let wide = OpenLocationCode::from_coordinates_with(&WideInteger, latitude, longitude, length);
    let float =
        OpenLocationCode::from_coordinates_with(&FloatingPoint, latitude, longitude, length);

    match (wide, float) {
        (Ok(wide), Ok(float)) => {
            assert_eq!(wide, float);
            assert!(format::is_full(wide.as_str()));
            let area = wide.decode().unwrap();
            assert!(area.south_latitude <= area.north_latitude);
            assert!(area.west_longitude <= area.east_longitude);
        }
        (Err(wide), Err(float)) => assert_eq!(wide, float),
        (wide, float) => panic!("strategies disagree: {wide:?} vs {float:?}"),
    }
});
