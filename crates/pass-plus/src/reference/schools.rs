use serde::Serialize;

/// Secondary school on the approved list; its cafeteria applies the reduced tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct School {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    /// Département code of the school.
    pub region: &'static str,
}

/// Sentinel answer for a school outside the approved list.
pub const OTHER_SCHOOL: &str = "other";

pub const APPROVED_SCHOOLS: [School; 5] = [
    School {
        id: "college-1",
        name: "Collège Jean Moulin",
        city: "Boulogne-Billancourt",
        region: "92",
    },
    School {
        id: "college-2",
        name: "Collège Paul Éluard",
        city: "Nanterre",
        region: "92",
    },
    School {
        id: "college-3",
        name: "Collège Victor Hugo",
        city: "Issy-les-Moulineaux",
        region: "92",
    },
    School {
        id: "college-4",
        name: "Collège Albert Camus",
        city: "Neuilly-sur-Seine",
        region: "92",
    },
    School {
        id: "college-5",
        name: "Collège Léonard de Vinci",
        city: "Levallois-Perret",
        region: "92",
    },
];

pub fn school_by_id(id: &str) -> Option<&'static School> {
    APPROVED_SCHOOLS.iter().find(|school| school.id == id)
}

pub fn is_approved_school(id: &str) -> bool {
    school_by_id(id).is_some()
}
