//! AWS Signature Version 4 request signing.
//!
//! Just enough of SigV4 for a single PUT with no query string: canonical
//! request, string to sign, derived signing key, Authorization header.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

pub struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// Percent-encode a path for signing, keeping `/` separators.
///
/// Unreserved characters (RFC 3986) pass through; every other byte becomes
/// an uppercase percent escape. The signed path must match the path the
/// HTTP client actually sends byte for byte, so callers build both from
/// this one encoding.
pub fn uri_encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());

    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    encoded
}

pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex(&hasher.finalize())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC-SHA256 accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(key).unwrap();
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Build the Authorization header value for one request.
///
/// `headers` must hold every header participating in the signature, with
/// lowercase names, sorted by name, and must match what is actually sent.
/// `uri` is the URI-encoded absolute path; the query string is empty.
pub fn authorization_header(
    params: &SigningParams,
    method: &str,
    uri: &str,
    headers: &[(String, String)],
    payload_hash: &str,
    now: DateTime<Utc>,
) -> String {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();

    let signed_headers = headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let canonical_headers: String = headers
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value.trim()))
        .collect();

    let canonical_request = format!(
        "{method}\n{uri}\n\n{canonical_headers}\n{signed_headers}\n{payload_hash}"
    );

    let scope = format!(
        "{}/{}/{}/aws4_request",
        date, params.region, params.service
    );
    let string_to_sign = format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        amz_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let key = signing_key(params.secret_key, &date, params.region, params.service);
    let signature = hex(&hmac_sha256(&key, string_to_sign.as_bytes()));

    format!(
        "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
        params.access_key, scope, signed_headers, signature
    )
}

fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_uri_encode_path_keeps_unreserved_and_slashes() {
        assert_eq!(
            uri_encode_path("/timeline_images/photo-1.jpg"),
            "/timeline_images/photo-1.jpg"
        );
    }

    #[test]
    fn test_uri_encode_path_escapes_spaces_and_non_ascii() {
        assert_eq!(uri_encode_path("/a b/c.jpg"), "/a%20b/c.jpg");
        assert_eq!(uri_encode_path("/été.jpg"), "/%C3%A9t%C3%A9.jpg");
    }

    #[test]
    fn test_sha256_of_empty_payload() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_signing_key_matches_published_aws_example() {
        // Worked example from the AWS SigV4 documentation
        let key = signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            "20150830",
            "us-east-1",
            "iam",
        );

        assert_eq!(
            hex(&key),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn test_authorization_header_structure() {
        let now = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        let headers = vec![
            ("host".to_string(), "example.amazonaws.com".to_string()),
            ("x-amz-date".to_string(), "20150830T123600Z".to_string()),
        ];

        let auth = authorization_header(
            &SigningParams {
                access_key: "AKIDEXAMPLE",
                secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
                region: "us-east-1",
                service: "service",
            },
            "GET",
            "/",
            &headers,
            &sha256_hex(b""),
            now,
        );

        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, "));
        assert!(auth.contains("SignedHeaders=host;x-amz-date, "));

        let signature = auth.rsplit("Signature=").next().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        let headers = vec![("host".to_string(), "example.amazonaws.com".to_string())];
        let params = SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            region: "us-east-1",
            service: "s3",
        };

        let first = authorization_header(&params, "PUT", "/key", &headers, &sha256_hex(b"body"), now);
        let second = authorization_header(&params, "PUT", "/key", &headers, &sha256_hex(b"body"), now);

        assert_eq!(first, second);
    }
}
