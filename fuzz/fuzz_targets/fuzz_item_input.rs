#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let Ok(item) = fakturace::Item::new(s, s) else {
            return;
        };
        if let Ok(item) = item.with_tax(s) {
            let _ = item.total();
            let _ = item.tax_amount();
        }
    }
});
