// src/hlsl/literal.rs
//! Literal shapes for lexemes that are not fixed tokens.
//!
//! ints:    -?0x[0-9a-fA-F]+[uUL]? | -?0[0-7]*[uUL]? | -?[1-9][0-9]*[uUL]?
//! floats:  -?([0-9]+.[0-9]* | .[0-9]+ | [0-9]+)([eE][+-]?[0-9]+)?[fFhHL]?  (needs `.`, an
//!          exponent or a float suffix)
//! strings: "..." with backslash escapes, no raw newline
//! idents:  [A-Za-z_][A-Za-z0-9_]*

use super::token_type::TokenType;

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Index of the first byte at or after `from` that fails `pred`.
fn skip(b: &[u8], from: usize, pred: fn(&u8) -> bool) -> usize {
    from + b.get(from..).map_or(0, |rest| rest.iter().take_while(|c| pred(*c)).count())
}

pub fn match_literal(lexeme: &str) -> TokenType {
    let b = lexeme.as_bytes();
    match b.first() {
        None => TokenType::Undefined,
        Some(b'"') => string_literal(b),
        Some(&c) if c == b'-' || c == b'.' || c.is_ascii_digit() => number_literal(b),
        Some(&c) if is_ident_start(c) && b[1..].iter().all(|&c| is_ident_continue(c)) => {
            TokenType::Identifier
        }
        _ => TokenType::Undefined,
    }
}

fn number_literal(b: &[u8]) -> TokenType {
    let digits = b.strip_prefix(b"-").unwrap_or(b);

    if let [b'0', b'x' | b'X', ..] = digits {
        let end = skip(digits, 2, u8::is_ascii_hexdigit);
        if end == 2 {
            return TokenType::Undefined;
        }
        return match &digits[end..] {
            [] | [b'u' | b'U' | b'L'] => TokenType::IntLiteral,
            _ => TokenType::Undefined,
        };
    }

    let int_end = skip(digits, 0, u8::is_ascii_digit);
    let mut end = int_end;
    let mut is_float = false;

    if digits.get(end) == Some(&b'.') {
        is_float = true;
        end = skip(digits, end + 1, u8::is_ascii_digit);
        // `.` and `-.` alone have no digits at all
        if end == 1 {
            return TokenType::Undefined;
        }
    } else if int_end == 0 {
        return TokenType::Undefined;
    }

    if let Some(b'e' | b'E') = digits.get(end) {
        let mut exp = end + 1;
        if let Some(b'+' | b'-') = digits.get(exp) {
            exp += 1;
        }
        let exp_end = skip(digits, exp, u8::is_ascii_digit);
        if exp_end == exp {
            return TokenType::Undefined;
        }
        is_float = true;
        end = exp_end;
    }

    let suffix = &digits[end..];
    if is_float {
        return match suffix {
            [] | [b'f' | b'F' | b'h' | b'H' | b'L'] => TokenType::FloatLiteral,
            _ => TokenType::Undefined,
        };
    }

    let int_digits = &digits[..int_end];
    if int_digits.len() > 1 && int_digits[0] == b'0' && int_digits.iter().any(|&d| d > b'7') {
        return TokenType::Undefined;
    }
    match suffix {
        [] | [b'u' | b'U' | b'L'] => TokenType::IntLiteral,
        [b'f' | b'F' | b'h' | b'H'] => TokenType::FloatLiteral,
        _ => TokenType::Undefined,
    }
}

fn string_literal(b: &[u8]) -> TokenType {
    let [b'"', body @ .., b'"'] = b else {
        return TokenType::Undefined;
    };
    let mut escaped = false;
    for &c in body {
        match c {
            b'\n' => return TokenType::Undefined,
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return TokenType::Undefined,
            _ => {}
        }
    }
    if escaped {
        TokenType::Undefined
    } else {
        TokenType::StringLiteral
    }
}
