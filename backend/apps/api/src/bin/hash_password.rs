//! Administrator provisioning helper
//!
//! Reads a user name (first argument) and a password (stdin), applies the
//! password policy, and prints the Argon2id PHC string together with an
//! `INSERT` statement for the `admins` table. Honors `PASSWORD_PEPPER` so the
//! hash matches what the server verifies against.
//!
//! ```sh
//! echo 'correct horse battery' | cargo run --bin hash_password -- admin
//! ```

use std::io::{self, BufRead};

use anyhow::{Context, bail};
use platform::password::ClearTextPassword;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let username = std::env::args().nth(1).unwrap_or_else(|| "admin".to_string());
    if username.trim().is_empty() {
        bail!("user name must not be blank");
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let raw = line.trim_end_matches(['\r', '\n']).to_string();

    let password = ClearTextPassword::new(raw).context("password rejected by policy")?;

    let pepper = std::env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.trim().is_empty());
    let hashed = password
        .hash(pepper.as_deref().map(str::as_bytes))
        .context("failed to hash password")?;

    println!("{}", hashed.as_phc_string());
    println!();
    println!(
        "INSERT INTO admins (username, password_hash) VALUES ('{}', '{}');",
        username.replace('\'', "''"),
        hashed.as_phc_string()
    );

    Ok(())
}
