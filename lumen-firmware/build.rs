//! Build script for lumen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml and compiles it into the default configuration

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const FAN_COUNT: usize = 2;

const PROGRAMS: &[(&str, &str)] = &[
    ("washing", "Washing"),
    ("drying", "Drying"),
    ("curing", "Curing"),
    ("drying_curing", "DryingCuring"),
    ("resin_preheat", "ResinPreheat"),
];

const BEEP_MODES: &[(&str, &str)] = &[("off", "Off"), ("once", "Once"), ("repeat", "Repeat")];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = load_config();
    generate_config(&config, &out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Read and validate machine.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");
    if !config_path.exists() {
        fail(
            "machine.toml not found",
            &["Create one in the lumen-firmware directory".into()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read machine.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in machine.toml", &[e.message().into()]),
    };

    let mut errors = Vec::new();
    validate_cycle(&config, &mut errors);
    validate_run_times(&config, &mut errors);
    validate_temperatures(&config, &mut errors);
    validate_fans(&config, &mut errors);
    validate_heater(&config, &mut errors);
    validate_motor(&config, &mut errors);
    if !errors.is_empty() {
        fail("Invalid machine configuration", &errors);
    }
    config
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|v| v.as_table())
}

/// Integer field within `lo..=hi`
fn check_int(
    config: &toml::Value,
    table: &str,
    key: &str,
    lo: i64,
    hi: i64,
    errors: &mut Vec<String>,
) {
    match section(config, table).and_then(|t| t.get(key)) {
        Some(toml::Value::Integer(v)) if (lo..=hi).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", table, key, lo, hi));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", table, key)),
        None => errors.push(format!("[{}] missing '{}'", table, key)),
    }
}

fn check_choice(
    config: &toml::Value,
    table: &str,
    key: &str,
    choices: &[(&str, &str)],
    errors: &mut Vec<String>,
) {
    match section(config, table).and_then(|t| t.get(key)) {
        Some(toml::Value::String(s)) if choices.iter().any(|(name, _)| name == s) => {}
        Some(_) => {
            let names: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
            errors.push(format!("[{}] {} must be one of {}", table, key, names.join("|")));
        }
        None => errors.push(format!("[{}] missing '{}'", table, key)),
    }
}

fn validate_cycle(config: &toml::Value, errors: &mut Vec<String>) {
    check_choice(config, "cycle", "program", PROGRAMS, errors);
    check_choice(config, "cycle", "finish_beep", BEEP_MODES, errors);
    match section(config, "cycle").and_then(|t| t.get("heat_to_target")) {
        Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push("[cycle] heat_to_target must be true or false".into()),
        None => errors.push("[cycle] missing 'heat_to_target'".into()),
    }
}

fn validate_run_times(config: &toml::Value, errors: &mut Vec<String>) {
    for key in ["washing", "drying", "curing", "resin_preheat", "warmup"] {
        check_int(config, "run_time", key, 1, 99, errors);
    }
}

fn validate_temperatures(config: &toml::Value, errors: &mut Vec<String>) {
    check_int(config, "temperature", "chamber", 20, 60, errors);
    check_int(config, "temperature", "resin", 20, 60, errors);
}

fn validate_fans(config: &toml::Value, errors: &mut Vec<String>) {
    for key in ["menu", "washing", "drying", "curing"] {
        match section(config, "fans").and_then(|t| t.get(key)) {
            Some(toml::Value::Array(duties)) => {
                if duties.len() != FAN_COUNT {
                    errors.push(format!("[fans] {} needs {} entries", key, FAN_COUNT));
                }
                let valid = duties
                    .iter()
                    .all(|d| matches!(d, toml::Value::Integer(p) if (0..=100).contains(p)));
                if !valid {
                    errors.push(format!("[fans] {} duties must be 0-100", key));
                }
            }
            Some(_) => errors.push(format!("[fans] {} must be an array", key)),
            None => errors.push(format!("[fans] missing '{}'", key)),
        }
    }
}

fn validate_heater(config: &toml::Value, errors: &mut Vec<String>) {
    check_int(config, "heater", "max_temp", 40, 90, errors);
    check_int(config, "heater", "hysteresis", 1, 5, errors);

    // Targets must leave room for the regulation band
    let value = |table: &str, key: &str| {
        section(config, table)
            .and_then(|t| t.get(key))
            .and_then(|v| v.as_integer())
    };
    if let (Some(max), Some(band)) = (value("heater", "max_temp"), value("heater", "hysteresis")) {
        for key in ["chamber", "resin"] {
            if let Some(target) = value("temperature", key) {
                if target + band >= max {
                    errors.push(format!("[temperature] {} too close to max_temp", key));
                }
            }
        }
    }
}

fn validate_motor(config: &toml::Value, errors: &mut Vec<String>) {
    check_int(config, "motor", "washing_speed", 0, 100, errors);
    check_int(config, "motor", "curing_speed", 0, 100, errors);
}

fn int(config: &toml::Value, table: &str, key: &str) -> i64 {
    config[table][key].as_integer().unwrap()
}

fn variant(config: &toml::Value, table: &str, key: &str, choices: &[(&str, &str)]) -> String {
    let name = config[table][key].as_str().unwrap();
    let (_, variant) = choices.iter().find(|(n, _)| *n == name).unwrap();
    (*variant).to_string()
}

fn duties(config: &toml::Value, key: &str) -> String {
    let list: Vec<String> = config["fans"][key]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_integer().unwrap().to_string())
        .collect();
    format!("FanDuties([{}])", list.join(", "))
}

/// Emit `machine_config.rs` into OUT_DIR
fn generate_config(config: &toml::Value, out_dir: &Path) {
    let mut src = String::new();
    writeln!(src, "// Generated from machine.toml by build.rs").unwrap();
    writeln!(src).unwrap();
    writeln!(src, "/// Factory default cycle configuration").unwrap();
    writeln!(src, "pub fn machine_config() -> CycleConfig {{").unwrap();
    writeln!(src, "    CycleConfig {{").unwrap();
    for (field, key) in [
        ("washing_run_time_min", "washing"),
        ("drying_run_time_min", "drying"),
        ("curing_run_time_min", "curing"),
        ("resin_preheat_run_time_min", "resin_preheat"),
        ("warmup_run_time_min", "warmup"),
    ] {
        writeln!(src, "        {}: {},", field, int(config, "run_time", key)).unwrap();
    }
    writeln!(src, "        target_temp_c: {},", int(config, "temperature", "chamber")).unwrap();
    writeln!(src, "        resin_target_temp_c: {},", int(config, "temperature", "resin")).unwrap();
    writeln!(
        src,
        "        heat_to_target: {},",
        config["cycle"]["heat_to_target"].as_bool().unwrap()
    )
    .unwrap();
    writeln!(
        src,
        "        finish_beep: BeepMode::{},",
        variant(config, "cycle", "finish_beep", BEEP_MODES)
    )
    .unwrap();
    for key in ["menu", "washing", "drying", "curing"] {
        writeln!(src, "        fans_{}: {},", key, duties(config, key)).unwrap();
    }
    writeln!(
        src,
        "        program: Program::{},",
        variant(config, "cycle", "program", PROGRAMS)
    )
    .unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src, "}}").unwrap();
    writeln!(src).unwrap();

    for (name, table, key) in [
        ("HEATER_MAX_TEMP_C", "heater", "max_temp"),
        ("HEATER_HYSTERESIS_C", "heater", "hysteresis"),
        ("MOTOR_WASHING_SPEED", "motor", "washing_speed"),
        ("MOTOR_CURING_SPEED", "motor", "curing_speed"),
    ] {
        writeln!(src, "pub const {}: u8 = {};", name, int(config, table, key)).unwrap();
    }

    fs::write(out_dir.join("machine_config.rs"), src).unwrap();
}
