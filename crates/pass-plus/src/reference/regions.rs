use serde::Serialize;

/// Administrative region (département) offered in the residence and schooling questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

/// Région whose residents and pupils the Pass+ programme covers.
pub const DEFAULT_TARGET_REGION: &str = "92";

pub const REGIONS: [Region; 8] = [
    Region {
        code: "75",
        name: "Paris",
    },
    Region {
        code: "77",
        name: "Seine-et-Marne",
    },
    Region {
        code: "78",
        name: "Yvelines",
    },
    Region {
        code: "91",
        name: "Essonne",
    },
    Region {
        code: "92",
        name: "Hauts-de-Seine",
    },
    Region {
        code: "93",
        name: "Seine-Saint-Denis",
    },
    Region {
        code: "94",
        name: "Val-de-Marne",
    },
    Region {
        code: "95",
        name: "Val-d'Oise",
    },
];

pub fn region_by_code(code: &str) -> Option<&'static Region> {
    let code = code.trim();
    REGIONS.iter().find(|region| region.code == code)
}

pub fn is_known_region(code: &str) -> bool {
    region_by_code(code).is_some()
}

/// Whether `code` designates the programme region `target`.
pub fn is_target_region(code: &str, target: &str) -> bool {
    let code = code.trim();
    !code.is_empty() && code == target.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_region_matches_only_its_code() {
        assert!(is_target_region("92", DEFAULT_TARGET_REGION));
        assert!(is_target_region(" 92", DEFAULT_TARGET_REGION));
        assert!(!is_target_region("93", DEFAULT_TARGET_REGION));
        assert!(!is_target_region("", ""));
    }

    #[test]
    fn looks_up_display_names() {
        let region = region_by_code("92").expect("target region listed");
        assert_eq!(region.name, "Hauts-de-Seine");
        assert!(is_known_region("75"));
        assert!(!is_known_region("2A"));
    }
}
