use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap()
});

// Visa, MasterCard, Discover, Amex, Diners Club, JCB.
static CREDIT_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b(?:4[0-9]{12}(?:[0-9]{3})?",
        r"|5[1-5][0-9]{14}",
        r"|6(?:011|5[0-9]{2})[0-9]{12}",
        r"|3[47][0-9]{13}",
        r"|3(?:0[0-5]|[68][0-9])[0-9]{11}",
        r"|(?:2131|1800|35[0-9]{3})[0-9]{11})\b",
    ))
    .unwrap()
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4})\b").unwrap()
});

// Area/group/serial exclusions are applied in `valid_ssn`.
static SSN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-8][0-9]{2})-([0-9]{2})-([0-9]{4})\b").unwrap());

static IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
        r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
    ))
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveKind {
    Email,
    CreditCard,
    Phone,
    Ssn,
    Ipv4,
}

impl SensitiveKind {
    /// Registration order, which is also the reporting order within a line.
    pub const ALL: [SensitiveKind; 5] = [
        SensitiveKind::Email,
        SensitiveKind::CreditCard,
        SensitiveKind::Phone,
        SensitiveKind::Ssn,
        SensitiveKind::Ipv4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensitiveKind::Email => "Email Address",
            SensitiveKind::CreditCard => "Credit Card Number",
            SensitiveKind::Phone => "Phone Number",
            SensitiveKind::Ssn => "Social Security Number",
            SensitiveKind::Ipv4 => "IP Address (IPv4)",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            SensitiveKind::Email => &EMAIL,
            SensitiveKind::CreditCard => &CREDIT_CARD,
            SensitiveKind::Phone => &PHONE,
            SensitiveKind::Ssn => &SSN,
            SensitiveKind::Ipv4 => &IPV4,
        }
    }
}

impl fmt::Display for SensitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One piece of sensitive information found on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based.
    pub line: usize,
    pub kind: SensitiveKind,
    pub matched: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {} detected -> '{}'",
            self.line,
            self.kind.label(),
            self.matched
        )
    }
}

// ---------------------------------------------------------------------------
// SensitiveInfoDetector
// ---------------------------------------------------------------------------

/// Line-oriented regex scanner for common personally identifiable data.
#[derive(Debug, Clone)]
pub struct SensitiveInfoDetector {
    kinds: Vec<SensitiveKind>,
}

impl Default for SensitiveInfoDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitiveInfoDetector {
    pub fn new() -> Self {
        SensitiveInfoDetector {
            kinds: SensitiveKind::ALL.to_vec(),
        }
    }

    /// Restrict the scan to `kinds`, keeping registration order.
    pub fn with_kinds(kinds: &[SensitiveKind]) -> Self {
        SensitiveInfoDetector {
            kinds: SensitiveKind::ALL
                .into_iter()
                .filter(|k| kinds.contains(k))
                .collect(),
        }
    }

    pub fn kinds(&self) -> &[SensitiveKind] {
        &self.kinds
    }

    /// Findings are ordered by line, then by kind, then by position.
    pub fn detect(&self, content: &str) -> Vec<Finding> {
        let mut found = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            for kind in &self.kinds {
                for m in kind.pattern().captures_iter(line) {
                    if *kind == SensitiveKind::Ssn && !valid_ssn(&m[1], &m[2], &m[3]) {
                        continue;
                    }
                    found.push(Finding {
                        line: idx + 1,
                        kind: *kind,
                        matched: m[0].to_string(),
                    });
                }
            }
        }
        debug!(count = found.len(), "sensitive info scan complete");
        found
    }

    pub fn detect_path(&self, path: &Path) -> Result<Vec<Finding>> {
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(self.detect(&content))
    }
}

fn valid_ssn(area: &str, group: &str, serial: &str) -> bool {
    area != "000" && area != "666" && group != "00" && serial != "0000"
}
