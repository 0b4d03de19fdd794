//! Object identifier names, used only to annotate decoded ASN.1 trees.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OidInfo {
    pub oid: &'static str,
    /// Description.
    pub d: &'static str,
    /// Context the identifier comes from.
    pub c: &'static str,
    /// Deprecated.
    pub w: bool,
}

const fn entry(oid: &'static str, d: &'static str, c: &'static str) -> OidInfo {
    OidInfo { oid, d, c, w: false }
}

const fn deprecated(oid: &'static str, d: &'static str, c: &'static str) -> OidInfo {
    OidInfo { oid, d, c, w: true }
}

static OIDS: &[OidInfo] = &[
    entry("0.9.2342.19200300.100.1.1", "userID", "Some oddball X.500 attribute collection"),
    entry("0.9.2342.19200300.100.1.3", "rfc822Mailbox", "Some oddball X.500 attribute collection"),
    entry("0.9.2342.19200300.100.1.25", "domainComponent", "Men are from Mars, this OID is from Pluto"),
    entry("1.2.156.10197.1.102", "sm1", "GM/T 0006"),
    entry("1.2.156.10197.1.103", "ssf33", "GM/T 0006"),
    entry("1.2.156.10197.1.104", "sm4", "GM/T 0006"),
    entry("1.2.156.10197.1.104.1", "sm4-ecb", "GM/T 0006"),
    entry("1.2.156.10197.1.104.2", "sm4-cbc", "GM/T 0006"),
    entry("1.2.156.10197.1.104.3", "sm4-ofb", "GM/T 0006"),
    entry("1.2.156.10197.1.104.4", "sm4-cfb", "GM/T 0006"),
    entry("1.2.156.10197.1.104.7", "sm4-ctr", "GM/T 0006"),
    entry("1.2.156.10197.1.104.8", "sm4-gcm", "GM/T 0006"),
    entry("1.2.156.10197.1.201", "sm5 (zuc)", "GM/T 0006"),
    entry("1.2.156.10197.1.301", "sm2", "GM/T 0006"),
    entry("1.2.156.10197.1.301.1", "sm2-1 (signature)", "GM/T 0006"),
    entry("1.2.156.10197.1.301.2", "sm2-2 (key exchange)", "GM/T 0006"),
    entry("1.2.156.10197.1.301.3", "sm2-3 (encryption)", "GM/T 0006"),
    entry("1.2.156.10197.1.401", "sm3", "GM/T 0006"),
    entry("1.2.156.10197.1.401.1", "sm3 without key", "GM/T 0006"),
    entry("1.2.156.10197.1.401.2", "sm3 with key (hmac-sm3)", "GM/T 0006"),
    entry("1.2.156.10197.1.501", "SM2-with-SM3", "GM/T 0006"),
    entry("1.2.156.10197.1.502", "SM2-with-SHA1", "GM/T 0006"),
    entry("1.2.156.10197.1.503", "SM2-with-SHA256", "GM/T 0006"),
    entry("1.2.156.10197.1.504", "SM3-with-RSA", "GM/T 0006"),
    entry("1.2.156.10197.1.505", "SHA1-with-RSA", "GM/T 0006"),
    entry("1.2.156.10197.1.506", "SHA256-with-RSA", "GM/T 0006"),
    entry("1.2.156.10197.1.507", "SM3-with-SM2 key", "GM/T 0006"),
    entry("1.2.156.10197.6.1", "gm-standards", "GM/T 0006"),
    entry("1.2.156.10197.6.1.4", "gm-pkcs7", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2", "SM2 PKCS#7 content types", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.1", "sm2Data", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.2", "sm2SignedData", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.3", "sm2EnvelopedData", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.4", "sm2SignedAndEnvelopedData", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.5", "sm2EncryptedData", "GM/T 0010"),
    entry("1.2.156.10197.6.1.4.2.6", "sm2KeyAgreementInfo", "GM/T 0010"),
    entry("1.2.840.10040.4.1", "dsa", "ANSI X9.57 algorithm"),
    entry("1.2.840.10040.4.3", "dsaWithSha1", "ANSI X9.57 algorithm"),
    entry("1.2.840.10045.2.1", "ecPublicKey", "ANSI X9.62 public key type"),
    entry("1.2.840.10045.3.1.1", "prime192v1", "ANSI X9.62 named elliptic curve"),
    entry("1.2.840.10045.3.1.7", "prime256v1", "ANSI X9.62 named elliptic curve"),
    entry("1.2.840.10045.4.1", "ecdsaWithSHA1", "ANSI X9.62 ECDSA algorithm with SHA1"),
    entry("1.2.840.10045.4.3.1", "ecdsaWithSHA224", "ANSI X9.62 ECDSA algorithm with SHA224"),
    entry("1.2.840.10045.4.3.2", "ecdsaWithSHA256", "ANSI X9.62 ECDSA algorithm with SHA256"),
    entry("1.2.840.10045.4.3.3", "ecdsaWithSHA384", "ANSI X9.62 ECDSA algorithm with SHA384"),
    entry("1.2.840.10045.4.3.4", "ecdsaWithSHA512", "ANSI X9.62 ECDSA algorithm with SHA512"),
    entry("1.2.840.113549.1.1.1", "rsaEncryption", "PKCS #1"),
    deprecated("1.2.840.113549.1.1.2", "md2WithRSAEncryption", "PKCS #1"),
    deprecated("1.2.840.113549.1.1.3", "md4WithRSAEncryption", "PKCS #1"),
    deprecated("1.2.840.113549.1.1.4", "md5WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.1.5", "sha1WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.1.7", "rsaOAEP", "PKCS #1"),
    entry("1.2.840.113549.1.1.8", "pkcs1-MGF", "PKCS #1"),
    entry("1.2.840.113549.1.1.9", "rsaOAEP-pSpecified", "PKCS #1"),
    entry("1.2.840.113549.1.1.10", "rsaPSS", "PKCS #1"),
    entry("1.2.840.113549.1.1.11", "sha256WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.1.12", "sha384WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.1.13", "sha512WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.1.14", "sha224WithRSAEncryption", "PKCS #1"),
    entry("1.2.840.113549.1.7.1", "data", "PKCS #7"),
    entry("1.2.840.113549.1.7.2", "signedData", "PKCS #7"),
    entry("1.2.840.113549.1.7.3", "envelopedData", "PKCS #7"),
    entry("1.2.840.113549.1.7.4", "signedAndEnvelopedData", "PKCS #7"),
    entry("1.2.840.113549.1.7.5", "digestedData", "PKCS #7"),
    entry("1.2.840.113549.1.7.6", "encryptedData", "PKCS #7"),
    entry("1.2.840.113549.1.9.1", "emailAddress", "PKCS #9. Deprecated, use an altName extension instead"),
    entry("1.2.840.113549.1.9.2", "unstructuredName", "PKCS #9"),
    entry("1.2.840.113549.1.9.3", "contentType", "PKCS #9"),
    entry("1.2.840.113549.1.9.4", "messageDigest", "PKCS #9"),
    entry("1.2.840.113549.1.9.5", "signingTime", "PKCS #9"),
    entry("1.2.840.113549.1.9.6", "countersignature", "PKCS #9"),
    entry("1.2.840.113549.1.9.7", "challengePassword", "PKCS #9"),
    entry("1.2.840.113549.1.9.8", "unstructuredAddress", "PKCS #9"),
    entry("1.2.840.113549.1.9.14", "extensionRequest", "PKCS #9 via CRMF"),
    entry("1.2.840.113549.1.9.15", "sMIMECapabilities", "PKCS #9"),
    entry("1.2.840.113549.1.9.16.1.4", "tSTInfo", "S/MIME Content Types"),
    entry("1.2.840.113549.1.9.16.2.12", "signingCertificate", "S/MIME Authenticated Attributes"),
    entry("1.2.840.113549.1.9.16.2.14", "timeStampToken", "S/MIME Authenticated Attributes"),
    entry("1.2.840.113549.1.9.16.2.47", "signingCertificateV2", "S/MIME Authenticated Attributes"),
    entry("1.2.840.113549.1.9.20", "friendlyName", "PKCS #9 via PKCS #12"),
    entry("1.2.840.113549.1.9.21", "localKeyID", "PKCS #9 via PKCS #12"),
    entry("1.2.840.113549.1.9.52", "cmsAlgorithmProtection", "PKCS #9"),
    entry("1.2.840.113549.2.5", "md5", "RSADSI digestAlgorithm"),
    entry("1.2.840.113549.2.7", "hmacWithSHA1", "RSADSI digestAlgorithm"),
    entry("1.2.840.113549.2.9", "hmacWithSHA256", "RSADSI digestAlgorithm"),
    entry("1.3.6.1.4.1.311.20.2", "certificateTemplateName", "Microsoft CertSrv Infrastructure"),
    entry("1.3.6.1.4.1.311.21.7", "certificateTemplate", "Microsoft CertSrv Infrastructure"),
    entry("1.3.6.1.5.5.7.1.1", "authorityInfoAccess", "PKIX private extension"),
    entry("1.3.6.1.5.5.7.1.3", "qcStatements", "PKIX private extension"),
    entry("1.3.6.1.5.5.7.1.11", "subjectInfoAccess", "PKIX private extension"),
    entry("1.3.6.1.5.5.7.2.1", "cps", "PKIX policy qualifier"),
    entry("1.3.6.1.5.5.7.2.2", "unotice", "PKIX policy qualifier"),
    entry("1.3.6.1.5.5.7.3.1", "serverAuth", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.3.2", "clientAuth", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.3.3", "codeSigning", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.3.4", "emailProtection", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.3.8", "timeStamping", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.3.9", "ocspSigning", "PKIX key purpose"),
    entry("1.3.6.1.5.5.7.48.1", "ocsp", "PKIX"),
    entry("1.3.6.1.5.5.7.48.1.1", "ocspBasic", "OCSP"),
    entry("1.3.6.1.5.5.7.48.1.2", "ocspNonce", "OCSP"),
    entry("1.3.6.1.5.5.7.48.1.5", "ocspNoCheck", "OCSP"),
    entry("1.3.6.1.5.5.7.48.2", "caIssuers", "PKIX subject/authority info access descriptor"),
    entry("1.3.6.1.5.5.7.48.3", "timestamping", "PKIX subject/authority info access descriptor"),
    entry("1.3.14.3.2.26", "sha1", "OIW"),
    entry("1.3.132.0.34", "secp384r1", "SECG (Certicom) named elliptic curve"),
    entry("1.3.132.0.35", "secp521r1", "SECG (Certicom) named elliptic curve"),
    entry("2.5.4.3", "commonName", "X.520 DN component"),
    entry("2.5.4.4", "surname", "X.520 DN component"),
    entry("2.5.4.5", "serialNumber", "X.520 DN component"),
    entry("2.5.4.6", "countryName", "X.520 DN component"),
    entry("2.5.4.7", "localityName", "X.520 DN component"),
    entry("2.5.4.8", "stateOrProvinceName", "X.520 DN component"),
    entry("2.5.4.9", "streetAddress", "X.520 DN component"),
    entry("2.5.4.10", "organizationName", "X.520 DN component"),
    entry("2.5.4.11", "organizationalUnitName", "X.520 DN component"),
    entry("2.5.4.12", "title", "X.520 DN component"),
    entry("2.5.4.13", "description", "X.520 DN component"),
    entry("2.5.4.15", "businessCategory", "X.520 DN component"),
    entry("2.5.4.17", "postalCode", "X.520 DN component"),
    entry("2.5.4.20", "telephoneNumber", "X.520 DN component"),
    entry("2.5.4.41", "name", "X.520 DN component"),
    entry("2.5.4.42", "givenName", "X.520 DN component"),
    entry("2.5.4.43", "initials", "X.520 DN component"),
    entry("2.5.4.44", "generationQualifier", "X.520 DN component"),
    entry("2.5.4.45", "uniqueIdentifier", "X.520 DN component"),
    entry("2.5.4.46", "dnQualifier", "X.520 DN component"),
    entry("2.5.4.65", "pseudonym", "X.520 DN component"),
    entry("2.5.4.97", "organizationIdentifier", "X.520 DN component"),
    entry("2.5.29.9", "subjectDirectoryAttributes", "X.509 extension"),
    entry("2.5.29.14", "subjectKeyIdentifier", "X.509 extension"),
    entry("2.5.29.15", "keyUsage", "X.509 extension"),
    entry("2.5.29.16", "privateKeyUsagePeriod", "X.509 extension"),
    entry("2.5.29.17", "subjectAltName", "X.509 extension"),
    entry("2.5.29.18", "issuerAltName", "X.509 extension"),
    entry("2.5.29.19", "basicConstraints", "X.509 extension"),
    entry("2.5.29.20", "cRLNumber", "X.509 extension"),
    entry("2.5.29.21", "cRLReason", "X.509 extension"),
    entry("2.5.29.24", "invalidityDate", "X.509 extension"),
    entry("2.5.29.27", "deltaCRLIndicator", "X.509 extension"),
    entry("2.5.29.28", "issuingDistributionPoint", "X.509 extension"),
    entry("2.5.29.29", "certificateIssuer", "X.509 extension"),
    entry("2.5.29.30", "nameConstraints", "X.509 extension"),
    entry("2.5.29.31", "cRLDistributionPoints", "X.509 extension"),
    entry("2.5.29.32", "certificatePolicies", "X.509 extension"),
    entry("2.5.29.32.0", "anyPolicy", "X.509 certificate policy"),
    entry("2.5.29.33", "policyMappings", "X.509 extension"),
    entry("2.5.29.35", "authorityKeyIdentifier", "X.509 extension"),
    entry("2.5.29.36", "policyConstraints", "X.509 extension"),
    entry("2.5.29.37", "extKeyUsage", "X.509 extension"),
    entry("2.5.29.37.0", "anyExtendedKeyUsage", "X.509 extended key usage"),
    entry("2.5.29.46", "freshestCRL", "X.509 extension"),
    entry("2.5.29.54", "inhibitAnyPolicy", "X.509 extension"),
    entry("2.16.840.1.101.3.4.1.2", "aes128-CBC", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.1.42", "aes256-CBC", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.1", "sha-256", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.2", "sha-384", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.3", "sha-512", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.4", "sha-224", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.8", "sha3-256", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.2.10", "sha3-512", "NIST Algorithm"),
    entry("2.16.840.1.101.3.4.3.2", "dsaWithSha256", "NIST Algorithm"),
    entry("2.16.840.1.113730.1.1", "netscape-cert-type", "Netscape certificate extension"),
    entry("2.16.840.1.113730.1.13", "netscape-comment", "Netscape certificate extension"),
];

pub fn lookup(oid: &str) -> Option<&'static OidInfo> {
    OIDS.iter().find(|info| info.oid == oid)
}
