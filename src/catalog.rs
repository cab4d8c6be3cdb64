//! Static catalog of marketplace categories, grouped the way the search
//! form displays them. Iteration order within a group is part of the
//! rendered contract (grouped option lists).

/// Sentinel id meaning "no category filter".
pub const ALL_CATEGORIES: i32 = 0;

/// Category applied to a search when none is supplied.
pub const DEFAULT_CATEGORY: i32 = 9;

pub struct CategoryGroup {
    pub label: &'static str,
    pub categories: &'static [(i32, &'static str)],
}

pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        label: "Général",
        categories: &[(0, "Toutes catégories")],
    },
    CategoryGroup {
        label: "Immobilier",
        categories: &[
            (9, "Ventes immobilières"),
            (10, "Locations"),
            (11, "Colocations"),
            (13, "Locations saisonnières"),
            (12, "Bureaux & Commerces"),
        ],
    },
    CategoryGroup {
        label: "Véhicules",
        categories: &[
            (2, "Voitures"),
            (3, "Motos"),
            (4, "Caravaning"),
            (5, "Utilitaires"),
            (6, "Équipement Auto"),
            (44, "Équipement Moto"),
            (7, "Nautisme"),
        ],
    },
    CategoryGroup {
        label: "Multimédia",
        categories: &[
            (15, "Informatique"),
            (16, "Consoles & Jeux vidéo"),
            (17, "Image & Son"),
            (18, "Téléphonie"),
        ],
    },
    CategoryGroup {
        label: "Maison",
        categories: &[
            (19, "Ameublement"),
            (20, "Électroménager"),
            (21, "Arts de la table"),
            (22, "Décoration"),
            (23, "Linge de maison"),
            (24, "Bricolage"),
            (25, "Jardinage"),
            (26, "Vêtements"),
            (27, "Chaussures"),
            (28, "Accessoires & Bagagerie"),
            (29, "Montres & Bijoux"),
            (30, "Équipement bébé"),
            (31, "Vêtements bébé"),
        ],
    },
    CategoryGroup {
        label: "Loisirs",
        categories: &[
            (33, "DVD / Films"),
            (34, "CD / Musique"),
            (35, "Livres"),
            (36, "Animaux"),
            (37, "Vélos"),
            (38, "Sports & Hobbies"),
            (39, "Instruments de musique"),
            (40, "Collection"),
            (41, "Jeux & Jouets"),
        ],
    },
    CategoryGroup {
        label: "Matériel Pro",
        categories: &[
            (50, "Matériel Agricole"),
            (51, "Transport - Manutention"),
            (52, "BTP - Chantier"),
            (54, "Équipements Industriels"),
        ],
    },
];

/// Display name for a category id, falling back to a generic label for
/// ids the catalog does not know. Never fails.
pub fn category_name(id: i32) -> String {
    for group in CATEGORY_GROUPS {
        if let Some((_, name)) = group.categories.iter().find(|(cat_id, _)| *cat_id == id) {
            return (*name).to_string();
        }
    }
    format!("Autre ({id})")
}

/// All categories in display order, ignoring grouping.
pub fn flat() -> impl Iterator<Item = (i32, &'static str)> {
    CATEGORY_GROUPS
        .iter()
        .flat_map(|group| group.categories.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_name() {
        assert_eq!(category_name(9), "Ventes immobilières");
        assert_eq!(category_name(37), "Vélos");
        assert_eq!(category_name(0), "Toutes catégories");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(category_name(999), "Autre (999)");
        assert_eq!(category_name(-1), "Autre (-1)");
    }

    #[test]
    fn test_group_order_is_stable() {
        let labels: Vec<&str> = CATEGORY_GROUPS.iter().map(|g| g.label).collect();
        assert_eq!(labels[0], "Général");
        assert_eq!(labels[1], "Immobilier");
        assert_eq!(*labels.last().unwrap(), "Matériel Pro");

        // Insertion order within a group is the displayed order.
        let immobilier: Vec<i32> = CATEGORY_GROUPS[1]
            .categories
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(immobilier, vec![9, 10, 11, 13, 12]);
    }

    #[test]
    fn test_flat_has_no_duplicate_ids() {
        let mut seen = std::collections::HashSet::new();
        for (id, _) in flat() {
            assert!(seen.insert(id), "duplicate category id {id}");
        }
    }
}
