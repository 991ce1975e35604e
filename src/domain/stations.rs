//! Ionosonde stations published through the DIAS archive.

pub const DEFAULT_STATION: &str = "AT138";

/// Station codes the archive is known to serve, with a location label where known.
pub const KNOWN_STATIONS: &[(&str, Option<&str>)] = &[
    ("AT138", Some("Athens, GR")),
    ("EB040", Some("Ebre, ES")),
    ("SO148", Some("Sopron, HU")),
    ("JR053", Some("Juliusruh, DE")),
    ("MD031", None),
    ("NA325", None),
];

pub fn is_known(code: &str) -> bool {
    KNOWN_STATIONS.iter().any(|(c, _)| c.eq_ignore_ascii_case(code))
}

pub fn location(code: &str) -> Option<&'static str> {
    KNOWN_STATIONS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .and_then(|(_, loc)| *loc)
}
