#![no_main]

use libfuzzer_sys::fuzz_target;
use mojo_result::{MAX_FIELD_OUTPUT_LEN, ResultLog};

fuzz_target!(|input: (u32, &str, &str)| {
    let (value, operation, field) = input;
    let mut line = String::new();
    ResultLog::new(value)
        .with_operation(operation)
        .with_field("fuzz", field)
        .write_to(&mut line)
        .unwrap();
    assert!(line.len() <= 128 + 2 * MAX_FIELD_OUTPUT_LEN);
});
