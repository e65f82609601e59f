//! Reference catalog of lesser-known, well-paid careers embedded in the
//! analysis prompt to ground the model's recommendations.

use std::fmt::Write;

/// A single catalog career.
#[derive(Debug, Clone, Copy)]
pub struct CatalogCareer {
    pub title: &'static str,
    pub description: &'static str,
    /// Interest keywords that signal a good temperament fit.
    pub interests: &'static [&'static str],
    /// Hidden pay factor (danger pay, scarcity premium, ...), if notable.
    pub pay_factor: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct CareerGroup {
    pub name: &'static str,
    pub careers: &'static [CatalogCareer],
}

const fn career(
    title: &'static str,
    description: &'static str,
    interests: &'static [&'static str],
    pay_factor: Option<&'static str>,
) -> CatalogCareer {
    CatalogCareer {
        title,
        description,
        interests,
        pay_factor,
    }
}

pub const CATALOG: &[CareerGroup] = &[
    CareerGroup {
        name: "ADRENALINE & PRECISION GROUP",
        careers: &[
            career("Cardiothoracic Surgeon", "heart/lung surgery, high stakes", &["engines", "plumbing"], None),
            career("Neurosurgeon", "brain surgery, precision", &["electricity", "delicate puzzles"], None),
            career("Orthopedic Trauma Surgeon", "bone reconstruction", &["carpentry", "power tools"], None),
            career("Saturation Diver", "deep-sea oil rig repair", &["deep water", "solitude"], Some("danger pay")),
            career("Air Traffic Controller", "directing planes", &["3D puzzles", "video games"], Some("stress pay")),
            career("Merchant Navy Officer", "commanding ships", &["sea", "isolation"], Some("tax-free income")),
        ],
    },
    CareerGroup {
        name: "DEEP DIVE ANALYSTS",
        careers: &[
            career("Radiologist", "X-ray/MRI diagnosis", &["patterns", "visual puzzles"], None),
            career("Pathologist", "tissue analysis", &["microscopes", "detective work"], None),
            career("Forensic Accountant", "uncovering financial crimes", &["puzzles", "justice"], None),
            career("Actuary", "risk calculation", &["statistics", "probability"], Some("exam premiums")),
            career("Quantitative Analyst", "algorithmic trading", &["coding", "math"], Some("performance bonuses")),
        ],
    },
    CareerGroup {
        name: "MACRO STRATEGY & INFLUENCE",
        careers: &[
            career("Economic Consultant", "antitrust litigation", &["debate", "data science"], None),
            career("Macro Strategist", "predicting market crashes", &["history", "politics"], None),
            career("Industrial-Organizational Psychologist", "workforce optimization", &["psychology", "data"], None),
            career("Corporate Diplomat", "business-government liaison", &["politics", "negotiation"], None),
        ],
    },
    CareerGroup {
        name: "EXTREME ENGINEERS",
        careers: &[
            career("Petroleum/Reservoir Engineer", "oil extraction", &["geology", "physics"], None),
            career("Nuclear Engineer", "reactor design", &["physics", "safety"], Some("security clearance")),
            career("Mining & Geotechnical Engineer", "preventing collapses", &["rocks", "machinery"], None),
            career("Aerodynamicist", "vehicle aerodynamics", &["wind", "speed", "F1 racing"], None),
        ],
    },
    CareerGroup {
        name: "HIDDEN TECH ARCHITECTS",
        careers: &[
            career("VLSI Engineer", "chip design", &["nanometers", "logic gates"], None),
            career("Embedded Systems Engineer", "hardware coding", &["IoT", "tinkering"], None),
            career("Site Reliability Engineer", "system uptime", &["automation", "crisis management"], None),
            career("Ethical Hacker", "penetration testing", &["breaking rules", "puzzles"], None),
        ],
    },
    CareerGroup {
        name: "DIGITAL WORLDS, GAMING & VFX",
        careers: &[
            career("Physics Programmer", "game engine physics", &["calculus", "linear algebra"], None),
            career("FX Technical Director", "movie effects", &["fluid dynamics", "destruction"], None),
            career("Technical Artist", "art+code bridge", &["Python", "art"], Some("unicorn role")),
            career("Game Economy Designer", "in-game economics", &["macroeconomics", "psychology"], None),
        ],
    },
    CareerGroup {
        name: "SENSORY & BIOLOGICAL SCIENTISTS",
        careers: &[
            career("Bioprocess Engineer", "lab-grown meat/vaccines", &["biology", "sustainability"], None),
            career("Zymologist/Brewmaster", "fermentation engineering", &["microbiology", "recipes"], None),
            career("Flavorist/Perfumer", "taste/smell creation", &["chemistry", "sensory"], Some("extremely rare")),
            career("Industrial Designer", "product shape/feel", &["art", "ergonomics"], None),
        ],
    },
    CareerGroup {
        name: "NICHE MEDIA, LANGUAGE & ARTS",
        careers: &[
            career("Localization Specialist", "cultural translation", &["languages", "culture"], None),
            career("Colorist", "film color grading", &["photography", "color theory"], None),
            career("Foley Artist", "sound effects creation", &["sound", "creativity"], None),
        ],
    },
    CareerGroup {
        name: "FIXERS & NEGOTIATORS",
        careers: &[
            career("Insolvency Professional", "bankruptcy management", &["law", "finance", "conflict"], None),
            career("Ship Broker", "cargo-ship matching", &["geography", "trading"], None),
            career("Patent Attorney", "invention protection", &["tech", "precise writing"], None),
            career("Chief of Staff", "CEO right hand", &["generalist", "diplomacy"], None),
        ],
    },
    CareerGroup {
        name: "LUXURY & SPECIALIZED SERVICES",
        careers: &[
            career("Private Estate Manager", "ultra-wealthy services", &["hospitality", "logistics"], None),
            career("Gemologist", "precious stone certification", &["geology", "optics"], None),
            career("Embalmer/Funeral Director", "body preservation", &["anatomy", "chemistry"], None),
            career("Horologist", "luxury watch repair", &["tiny mechanics", "patience"], None),
        ],
    },
    CareerGroup {
        name: "FINANCIAL COMMAND & CONTROL",
        careers: &[
            career("International Tax Specialist", "cross-border tax", &["law", "finance", "loopholes"], None),
            career("M&A Analyst", "company valuation", &["high stakes", "rapid math"], None),
            career("Chief Compliance Officer", "corporate compliance", &["rules", "details"], None),
            career("Cost Controller", "profit optimization", &["efficiency", "manufacturing"], None),
        ],
    },
];

/// Renders the catalog as the markdown block embedded in the analysis prompt.
///
/// Line format: `- Title (description, interests: a/b, pay factor)`.
pub fn render_catalog() -> String {
    let mut out = String::from("# COMPREHENSIVE HIDDEN CAREER DATABASE\n");

    for (index, group) in CATALOG.iter().enumerate() {
        let _ = write!(out, "\n### {}. {}\n", index + 1, group.name);
        for career in group.careers {
            let _ = write!(
                out,
                "- {} ({}, interests: {}",
                career.title,
                career.description,
                career.interests.join("/")
            );
            if let Some(pay) = career.pay_factor {
                let _ = write!(out, ", {pay}");
            }
            out.push_str(")\n");
        }
    }

    out
}

pub fn contains_title(title: &str) -> bool {
    CATALOG
        .iter()
        .flat_map(|group| group.careers)
        .any(|career| career.title.eq_ignore_ascii_case(title.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eleven_groups() {
        assert_eq!(CATALOG.len(), 11);
        assert!(CATALOG.iter().all(|g| !g.careers.is_empty()));
    }

    #[test]
    fn test_render_catalog_numbers_groups() {
        let text = render_catalog();
        assert!(text.starts_with("# COMPREHENSIVE HIDDEN CAREER DATABASE"));
        assert!(text.contains("### 1. ADRENALINE & PRECISION GROUP"));
        assert!(text.contains("### 11. FINANCIAL COMMAND & CONTROL"));
    }

    #[test]
    fn test_render_catalog_formats_pay_factor() {
        let text = render_catalog();
        assert!(text.contains(
            "- Saturation Diver (deep-sea oil rig repair, interests: deep water/solitude, danger pay)"
        ));
        assert!(text.contains("- Radiologist (X-ray/MRI diagnosis, interests: patterns/visual puzzles)"));
    }

    #[test]
    fn test_render_catalog_is_deterministic() {
        assert_eq!(render_catalog(), render_catalog());
    }

    #[test]
    fn test_contains_title_is_case_insensitive() {
        assert!(contains_title("actuary"));
        assert!(contains_title(" Horologist "));
        assert!(!contains_title("Astronaut"));
    }
}
