#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_usize_constant(
        &outdir_path,
        "default_max_digits.rs",
        "DEFAULT_MAX_DIGITS",
        "RUST_RADIX_BIGINT_DEFAULT_MAX_DIGITS",
        100,
    )?;
    write_usize_constant(
        &outdir_path,
        "max_digits_ceiling.rs",
        "MAX_DIGITS_CEILING",
        "RUST_RADIX_BIGINT_MAX_DIGITS_CEILING",
        750,
    )?;
    Ok(())
}

/// Create file containing the definition of a single `usize` constant
///
/// Value is read from environment variable `env_name`, falling back
/// to `default` if the variable is not set.
///
fn write_usize_constant(
    outdir_path: &PathBuf,
    filename: &str,
    const_name: &str,
    env_name: &str,
    default: usize,
) -> std::io::Result<()>
{
    let value = env::var(env_name)
        .map(|s| s.parse::<std::num::NonZeroUsize>().unwrap_or_else(|_| panic!("${} must be an integer > 0", env_name)))
        .map(|nz_num| nz_num.get())
        .unwrap_or(default);

    let path = outdir_path.join(filename);

    let contents = format!("pub const {const_name}: usize = {value};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut file = File::create(&path)
                .unwrap_or_else(|_| panic!("Could not create {}", filename));
            write!(file, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={}", env_name);

    Ok(())
}
