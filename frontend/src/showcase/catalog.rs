use std::collections::HashSet;

use thiserror::Error;

use super::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub accent_color: &'static str,
    /// Backdrop gradient of the phone mockup screen.
    pub layout_variant: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one item")]
    Empty,
    #[error("duplicate catalog id {0}")]
    DuplicateId(u32),
}

/// A non-empty list of items with unique ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog<'a> {
    items: &'a [CatalogItem],
}

impl<'a> Catalog<'a> {
    pub fn new(items: &'a [CatalogItem]) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn first(&self) -> &'a CatalogItem {
        // non-empty by construction
        &self.items[0]
    }

    pub fn find(&self, id: u32) -> Option<&'a CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    pub fn items(&self) -> &'a [CatalogItem] {
        self.items
    }
}

/// The services shown in the overview panel.
pub fn services() -> Catalog<'static> {
    Catalog { items: &SERVICES }
}

static SERVICES: [CatalogItem; 6] = [
    CatalogItem {
        id: 1,
        title: "Career Counselling + Psychometric tests",
        description: "A scientific, multi-dimensional assessment evaluating personality, interests, and skills to create a 15-year roadmap.",
        tagline: "Psychometric Assessment",
        features: &["15-Year Career Roadmap", "Skill Mapping", "Informed Decisions"],
        icon: Icon::Brain,
        accent_color: "#2563EB",
        layout_variant: "linear-gradient(135deg, #2563eb, #312e81)",
    },
    CatalogItem {
        id: 2,
        title: "Study abroad",
        description: "End-to-end guidance for admissions across 20+ countries and 3000+ universities. Profile evaluation and visa assistance.",
        tagline: "Study Abroad Admissions",
        features: &["University Shortlisting", "SOP/LOR Support", "Visa Assistance"],
        icon: Icon::Plane,
        accent_color: "#059669",
        layout_variant: "linear-gradient(135deg, #059669, #115e59)",
    },
    CatalogItem {
        id: 3,
        title: "Indian & Online Degrees",
        description: "Access to 2000+ Indian institutions and 150+ online universities for flexible learning in Tech, AI, and Management.",
        tagline: "Degree Programs",
        features: &["AI & Data Science", "Management & Business", "On-Campus/Online"],
        icon: Icon::GraduationCap,
        accent_color: "#7C3AED",
        layout_variant: "linear-gradient(135deg, #7c3aed, #0f172a)",
    },
    CatalogItem {
        id: 4,
        title: "Certifications & Trainings",
        description: "Career-oriented certifications, bootcamps, and 300+ virtual internships designed to improve global employability.",
        tagline: "Certifications & Internships",
        features: &["Industry-Relevant Skills", "Virtual Internships", "Upskilling Pathways"],
        icon: Icon::Award,
        accent_color: "#F97316",
        layout_variant: "linear-gradient(135deg, #f97316, #b45309)",
    },
    CatalogItem {
        id: 5,
        title: "Scientific conferences & Events",
        description: "Organization of scientific conferences, FDPs, and workshops. Build portfolios through research and global awards.",
        tagline: "Scientific Conferences",
        features: &["Research Exposure", "Portfolio Building", "Portfolio Recognitions"],
        icon: Icon::Microscope,
        accent_color: "#EAB308",
        layout_variant: "linear-gradient(135deg, #fbbf24, #a16207)",
    },
    CatalogItem {
        id: 6,
        title: "Startup & Entrepreneurship",
        description: "A structured ecosystem for idea incubation, mentorship, funding access, and scaling for aspiring founders.",
        tagline: "Investors Connect",
        features: &["Idea Incubation", "Mentorship Circles", "GTM Strategy"],
        icon: Icon::Lightbulb,
        accent_color: "#EC4899",
        layout_variant: "linear-gradient(135deg, #db2777, #881337)",
    },
];

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const fn item(id: u32) -> CatalogItem {
        CatalogItem {
            id,
            title: "Item",
            description: "Description",
            tagline: "Tagline",
            features: &["One", "Two"],
            icon: Icon::Zap,
            accent_color: "#FFFFFF",
            layout_variant: "none",
        }
    }

    #[test]
    fn services_pass_validation() {
        let checked = Catalog::new(&SERVICES).expect("built-in services should be valid");
        assert_eq!(checked, services());
        assert_eq!(services().items().len(), 6);
        assert_eq!(services().first().id, 1);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(&[]), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let items = [item(1), item(2), item(1)];
        assert_eq!(Catalog::new(&items), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn find_by_id() {
        let items = [item(3), item(9)];
        let catalog = Catalog::new(&items).expect("catalog should build");
        assert_eq!(catalog.find(9).map(|i| i.id), Some(9));
        assert!(catalog.find(4).is_none());
        assert!(catalog.contains(3));
    }
}
