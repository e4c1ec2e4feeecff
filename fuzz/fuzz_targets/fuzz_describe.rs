#![no_main]

use libfuzzer_sys::fuzz_target;
use mojo_result::{ResultCode, describe};

fuzz_target!(|value: u32| {
    let name = describe(value);
    match ResultCode::from_raw(value) {
        Some(code) => assert_eq!(code.name(), name),
        None => assert_eq!(name, "UNKNOWN"),
    }
});
