#![no_main]

use libfuzzer_sys::fuzz_target;
use waehrung::format::Money;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(money) = s.parse::<Money>() {
            // Whatever parses must render and parse back to itself.
            let again: Money = money.display_with_code().parse().unwrap();
            assert_eq!(again, money);
        }
    }
});
