//! TLE implicit-decimal exponential notation

const ZERO: &str = "0.0";

/// Rewrite a TLE exponential token (e.g. `-11606-4`) as `<mantissa>e<exponent>`
/// (`-1.1606e-4`).
///
/// The last two characters are taken as the signed exponent and the rest as the
/// mantissa. A decimal point is inserted after the first digit of the mantissa
/// unless one is already present. An empty token yields `"0.0"`. That value, and any token that already
/// carries an exponent marker, is returned as is.
///
/// No range checking is done. Tokens that don't follow the layout come back
/// malformed rather than failing, e.g. the line 1 first derivative
/// `-.00002182` becomes `-.000021e82`. Consumers parsing the result must expect
/// that.
pub fn normalize_sci_notation(value: &str) -> String {
    if value.is_empty() {
        return ZERO.to_owned();
    }

    if value == ZERO || value.contains(['e', 'E']) {
        return value.to_owned();
    }

    let split = value
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let (mantissa, exponent) = value.split_at(split);

    let mantissa = if mantissa.contains('.') {
        mantissa.to_owned()
    } else {
        let sign_len = if mantissa.starts_with(['-', '+']) {
            1
        } else {
            0
        };
        let point_at = mantissa[sign_len..]
            .chars()
            .next()
            .map(|c| sign_len + c.len_utf8())
            .unwrap_or(mantissa.len());
        let (lead, rest) = mantissa.split_at(point_at);
        format!("{lead}.{rest}")
    };

    format!("{mantissa}e{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_mantissa() {
        assert_eq!(normalize_sci_notation("-11606-4"), "-1.1606e-4");
        assert_eq!(normalize_sci_notation("+11606-4"), "+1.1606e-4");
    }

    #[test]
    fn unsigned_mantissa() {
        assert_eq!(normalize_sci_notation("10270-3"), "1.0270e-3");
        assert_eq!(normalize_sci_notation("00000-0"), "0.0000e-0");
        assert_eq!(normalize_sci_notation("00000+0"), "0.0000e+0");
    }

    #[test]
    fn empty_token() {
        assert_eq!(normalize_sci_notation(""), "0.0");
    }

    #[test]
    fn idempotent() {
        for token in ["-11606-4", "10270-3", "", "-.00002182", "00000+0"] {
            let once = normalize_sci_notation(token);
            assert_eq!(normalize_sci_notation(&once), once);
        }
    }

    #[test]
    fn malformed_tokens_do_not_panic() {
        assert_eq!(normalize_sci_notation("-.00002182"), "-.000021e82");
        assert_eq!(normalize_sci_notation("-4"), ".e-4");
        assert_eq!(normalize_sci_notation("7"), ".e7");
        assert_eq!(normalize_sci_notation("-"), ".e-");
    }

    #[test]
    fn parses_as_float() {
        let v: f64 = normalize_sci_notation("-11606-4").parse().unwrap();
        approx::assert_relative_eq!(v, -1.1606e-4);
    }
}
