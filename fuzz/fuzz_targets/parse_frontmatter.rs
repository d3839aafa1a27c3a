#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_scaffold::parse_frontmatter;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = parse_frontmatter(input);
        let wrapped = format!("---\n{input}\n---\n");
        let _ = parse_frontmatter(&wrapped);
    }
});
