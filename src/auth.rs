use anyhow::{Context, Result, bail};
use seedkey::stream::read_line;
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "SEEDKEY_PASSWORD";

pub fn read_password() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  SEEDKEY_PASSWORD="supersecret" seedkey derive
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  stdin (Pipeline)
    //  echo "supersecret" | seedkey derive
    if !io::stdin().is_terminal() {
        let stdin = io::stdin();
        let pw = next_line(&mut stdin.lock())?;

        if !pw.is_empty() {
            return Ok(pw);
        }
    }

    //  Interactive (TTY)
    if io::stdin().is_terminal() {
        let pw = rpassword::prompt_password("Password: ")?;
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    bail!("No password provided")
}

pub fn read_new_password_with_confirmation() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if !io::stdin().is_terminal() {
        let stdin = io::stdin();
        let mut handle = stdin.lock();

        let pw1 = next_line(&mut handle)?;
        let pw2 = next_line(&mut handle)?;

        return confirm(pw1, pw2);
    }

    let pw1 = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    let pw2 = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);

    confirm(pw1, pw2)
}

fn confirm(pw1: Zeroizing<String>, pw2: Zeroizing<String>) -> Result<Zeroizing<String>> {
    if pw1.is_empty() {
        bail!("password cannot be empty");
    }

    if pw1 != pw2 {
        bail!("passwords do not match");
    }

    Ok(pw1)
}

/// Reads one line from piped input; an exhausted stream gives an empty password.
fn next_line<R: BufRead>(reader: &mut R) -> Result<Zeroizing<String>> {
    let line = Zeroizing::new(read_line(reader)?.unwrap_or_default());
    let pw = std::str::from_utf8(&line).context("password is not valid UTF-8")?;
    Ok(Zeroizing::new(pw.to_string()))
}
