//! Compiled field format rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper-case letters, accented Portuguese letters and spaces, at least 10.
pub const CONTACT_NAME_PATTERN: &str = "[A-ZÁÉÍÓÚÂÊÔÃÕÀÇ ]{10,}";
pub const CPF_PATTERN: &str = "[0-9]{11}";
pub const ZIP_CODE_PATTERN: &str = "[0-9]{5}-[0-9]{3}";
pub const DDI_PATTERN: &str = "[0-9]{1,3}";
pub const DDD_PATTERN: &str = "[0-9]{1,2}";
pub const FIX_NUMBER_PATTERN: &str = "[2-5][0-9]{7}";
pub const MOBILE_NUMBER_PATTERN: &str = "9[0-9]{8}";

static DEFAULT_RULES: Lazy<ValidationRules> = Lazy::new(|| ValidationRules {
    contact_name: full_match(CONTACT_NAME_PATTERN).expect("Failed to compile name pattern"),
    cpf: full_match(CPF_PATTERN).expect("Failed to compile CPF pattern"),
    zip_code: full_match(ZIP_CODE_PATTERN).expect("Failed to compile zip code pattern"),
    ddi: full_match(DDI_PATTERN).expect("Failed to compile DDI pattern"),
    ddd: full_match(DDD_PATTERN).expect("Failed to compile DDD pattern"),
    fix_number: full_match(FIX_NUMBER_PATTERN).expect("Failed to compile fix number pattern"),
    mobile_number: full_match(MOBILE_NUMBER_PATTERN)
        .expect("Failed to compile mobile number pattern"),
});

/// Compile `pattern` so that it must match the whole input.
///
/// Note that `\d` in a caller-supplied pattern matches any Unicode digit;
/// the built-in patterns spell out `[0-9]`.
pub fn full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

/// Format rules consulted by the validators.
///
/// Built once at startup (from [`Default`] or from configuration) and never
/// mutated afterwards. Every regex is anchored at both ends.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub contact_name: Regex,
    pub cpf: Regex,
    pub zip_code: Regex,
    pub ddi: Regex,
    pub ddd: Regex,
    pub fix_number: Regex,
    pub mobile_number: Regex,
}

impl Default for ValidationRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}
