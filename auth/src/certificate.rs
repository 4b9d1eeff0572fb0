//! Rebuilds a PEM certificate from a JWKS `x5c` entry.

const PEM_LINE_WIDTH: usize = 64;
const BEGIN_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----";
const END_CERTIFICATE: &str = "-----END CERTIFICATE-----";

/// Wraps a contiguous base64 DER certificate into a PEM block.
///
/// The body is broken into lines of at most 64 characters and framed by the
/// standard delimiters, with a trailing newline after the end delimiter.
pub fn certificate_to_pem(certificate: &str) -> String {
    let chars: Vec<char> = certificate.chars().collect();
    let body = chars
        .chunks(PEM_LINE_WIDTH)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    format!("{BEGIN_CERTIFICATE}\n{body}\n{END_CERTIFICATE}\n")
}
