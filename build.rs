use std::io::{Error, ErrorKind};
use std::process::Command;

fn main() {
    let package_version: String = option_env!("CARGO_PKG_VERSION")
        .unwrap_or("(Unknown Cargo package version)")
        .to_string();

    // Git is absent in source tarballs, keep building without it.
    let build_info = match git_rev() {
        Ok(rev) => format!("{} ({})", package_version, rev),
        Err(_) => package_version,
    };
    println!("cargo:rustc-env=LOCALE_PICKER_VERSION={}", build_info);
}

fn git_rev() -> Result<String, Error> {
    let out = Command::new("git")
        .args(["rev-parse", "--verify", "--short", "HEAD"])
        .output()?;
    match out.status.success() {
        true => String::from_utf8(out.stdout)
            .map(|rev| rev.trim().to_string())
            .map_err(|err| Error::new(ErrorKind::InvalidData, err)),
        false => Err(Error::new(ErrorKind::Other, "Command not successful.")),
    }
}
