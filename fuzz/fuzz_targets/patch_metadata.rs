#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_scaffold::patch_metadata_text;

const NAME: &str = "fuzz-skill";
const DESCRIPTION: &str = "Fuzzed description: v2";

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let patched = patch_metadata_text(input, NAME, DESCRIPTION);
    assert_eq!(patched.lines().count(), input.lines().count());

    let had_name = input
        .lines()
        .any(|line| line.strip_prefix("name: ").is_some_and(|v| !v.trim_end_matches('\r').is_empty()));
    if had_name {
        let expected = format!("name: {NAME}");
        assert!(patched
            .lines()
            .any(|line| line.trim_end_matches('\r') == expected));
    }
});
