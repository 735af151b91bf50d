use std::fs;

pub fn settings_export() {
    print!("{}", crate::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        crate::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: converter.prefix={:?}, converter.avoid={} entries, text.delimiter={:?}",
        s.converter.prefix,
        s.converter.avoid.len(),
        s.text.delimiter
    );
}

pub fn table_export() {
    print!("{}", crate::translit::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(crate::translit::parse_table_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}
