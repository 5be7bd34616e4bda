//! Contact masking for list projections.
//!
//! DESIGN
//! ======
//! Stateless display transforms. List and roster projections show masked
//! contact fields; the detail view shows the full record. The store itself
//! always holds the unmasked values.

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Mask an email address: first character of the local part kept, the rest
/// of the local part starred, domain kept. Strings without `@` are treated
/// as a bare local part.
#[must_use]
pub fn mask_email(email: &str) -> String {
    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (email, None),
    };

    let mut chars = local.chars();
    let masked_local = match chars.next() {
        Some(first) => {
            let stars = "*".repeat(chars.count());
            format!("{first}{stars}")
        }
        None => String::new(),
    };

    match domain {
        Some(domain) => format!("{masked_local}@{domain}"),
        None => masked_local,
    }
}

/// Mask a mobile number: every digit except the last two starred, `+` and
/// separators preserved.
#[must_use]
pub fn mask_mobile(mobile: &str) -> String {
    let total_digits = mobile.chars().filter(char::is_ascii_digit).count();
    let visible_from = total_digits.saturating_sub(2);

    let mut seen = 0;
    mobile
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen > visible_from { c } else { '*' }
            } else {
                c
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
