//! Build registration payloads from the static name list.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use accounts_client::AccountRequest;
use rand::Rng;

use crate::error::{Result, SeedError};
use crate::names::{FIXED_INTRODUCE, INTRODUCE_TEMPLATES, NAMES};

/// How the one-line introduction is chosen for each account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BioMode {
    /// Every account gets [`FIXED_INTRODUCE`].
    Fixed,
    /// A template picked uniformly at random, wrapped around the name.
    #[default]
    Random,
}

impl FromStr for BioMode {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(BioMode::Fixed),
            "random" => Ok(BioMode::Random),
            other => Err(SeedError::Config(format!(
                "unknown bio mode {:?} (expected \"fixed\" or \"random\")",
                other
            ))),
        }
    }
}

impl fmt::Display for BioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BioMode::Fixed => f.write_str("fixed"),
            BioMode::Random => f.write_str("random"),
        }
    }
}

/// Email for iteration `index`; unique per index.
pub fn email_for(index: usize) -> String {
    format!("person{}@email.com", index)
}

/// Display name for iteration `index`.
pub fn name_for(index: usize) -> Result<&'static str> {
    NAMES
        .get(index)
        .copied()
        .ok_or(SeedError::NameIndexOutOfRange {
            index,
            len: NAMES.len(),
        })
}

/// One-line introduction for `name`. `Random` draws the template index from `[0, 4]`.
pub fn introduce_for<R: Rng + ?Sized>(name: &str, mode: BioMode, rng: &mut R) -> String {
    match mode {
        BioMode::Fixed => FIXED_INTRODUCE.to_string(),
        BioMode::Random => {
            let (prefix, suffix) = INTRODUCE_TEMPLATES[rng.gen_range(0..INTRODUCE_TEMPLATES.len())];
            format!("{}{}{}", prefix, name, suffix)
        }
    }
}

/// Builds the request for iteration `index`.
pub fn build_request<R: Rng + ?Sized>(
    index: usize,
    password: &str,
    mode: BioMode,
    rng: &mut R,
) -> Result<AccountRequest> {
    let name = name_for(index)?;
    Ok(AccountRequest {
        email: email_for(index),
        password: password.to_string(),
        nick_name: name.to_string(),
        one_line_introduce: introduce_for(name, mode, rng),
    })
}

/// Builds the requests for iterations `0..count`, in order.
pub fn build_requests<R: Rng + ?Sized>(
    count: usize,
    password: &str,
    mode: BioMode,
    rng: &mut R,
) -> Result<Vec<AccountRequest>> {
    (0..count)
        .map(|i| build_request(i, password, mode, rng))
        .collect()
}

/// Writes `index  email  name` for every seedable account, one per line.
pub fn write_name_listing<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    for (i, name) in NAMES.iter().enumerate() {
        writeln!(out, "{:<3} {:<20} {}", i, email_for(i), name)?;
    }
    out.flush()?;
    Ok(())
}
