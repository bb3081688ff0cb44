#![no_main]

use codec::OpenLocationCode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(candidate) = std::str::from_utf8(data) else {
        return;
    };

    let valid = format::is_valid(candidate);
    let constructed = OpenLocationCode::new(candidate);
    assert_eq!(valid, constructed.is_ok());

    if let Ok(code) = constructed {
        // A valid code is full xor short, and full codes must decode.
        assert!(code.is_full() ^ code.is_short());
        if code.is_full() {
            let area = code.decode().unwrap();
            assert!(area.south_latitude <= area.north_latitude);
            assert!(area.west_longitude <= area.east_longitude);
        } else {
            assert!(code.decode().is_err());
        }
    }
});
