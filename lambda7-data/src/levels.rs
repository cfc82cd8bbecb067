//! Light-baryon cycle levels
//!
//! One level per π⁵ coefficient c5 = 6 − S. Each level sits at angle
//! c5·π/5 on the cycle and carries the decuplet and octet terms added on
//! top of c5·π⁵, plus the magnetic-moment family that level feeds.

/// One c5 level of the light cycle
#[derive(Debug, Clone)]
pub struct CycleLevel {
    pub c5: i64,
    /// LaTeX of the term shared by the level's spin-3/2 members
    pub decuplet_term: String,
    /// LaTeX of the octet term, `None` when the level has no octet
    pub octet_term: Option<String>,
    pub mu_family: String,
    pub mu_formula: String,
    pub description: String,
}

impl CycleLevel {
    fn new(c5: i64, decuplet_term: &str) -> Self {
        Self {
            c5,
            decuplet_term: decuplet_term.to_string(),
            octet_term: None,
            mu_family: String::new(),
            mu_formula: String::new(),
            description: String::new(),
        }
    }

    fn with_octet(mut self, term: &str) -> Self {
        self.octet_term = Some(term.to_string());
        self
    }

    fn with_moments(mut self, family: &str, formula: &str) -> Self {
        self.mu_family = family.to_string();
        self.mu_formula = formula.to_string();
        self
    }

    fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn strangeness(&self) -> i32 {
        (6 - self.c5) as i32
    }

    pub fn angle_degrees(&self) -> i64 {
        self.c5 * 36
    }

    pub fn angle_latex(&self) -> String {
        format!(r"\frac{{{}\pi}}{{5}}", self.c5)
    }

    pub fn pi5_latex(&self) -> String {
        format!(r"{}\pi^5", self.c5)
    }
}

/// Structural relation visible across levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symmetry {
    pub name: &'static str,
    pub latex: &'static str,
}

/// Levels from the apex (Ω, c5 = 9) down to the base (c5 = 6)
pub fn baryon_levels() -> Vec<CycleLevel> {
    vec![
        CycleLevel::new(9, r"6\pi^4 - 2\pi^3")
            .with_moments("4×5 = 20", r"\mu = \frac{20}{\pi^2}")
            .described("The apex. Single particle, maximum strangeness."),
        CycleLevel::new(8, r"6\pi^4 - \pi^3")
            .with_octet(r"\pi^4 + \pi^3")
            .with_moments(
                "4×5 = 20",
                r"\mu_{\Xi^0} = \frac{4}{\pi}, \quad \mu_{\Xi^-} = \frac{20}{\pi^3}",
            )
            .described("First split. The -2π³ from Ω splits to ±π³."),
        CycleLevel::new(7, r"6\pi^4 - 2\pi^2")
            .with_octet(r"\pi^3 + \pi^2 \text{ (}\Lambda\text{)}, \quad 6\pi^3 + \pi^2 \text{ (}\Sigma\text{)}")
            .with_moments(
                "Transition",
                r"\mu_\Lambda = \frac{6}{\pi^2}, \quad \mu_{\Sigma^-} = \frac{36}{\pi^3}",
            )
            .described("Transition zone. The 6 migrates from 6π⁴ (decuplet) to 6π³ (Σ octet); Λ bridges families."),
        CycleLevel::new(6, r"6\pi^4 - \pi^2")
            .with_octet(r"\text{pure } 6\pi^5")
            .with_moments("2×3 = 6", r"\mu_p = \frac{8\pi}{9}, \quad \mu_n = \frac{6}{\pi}")
            .described("The base. Cycle completes. Double charge (+2) appears."),
    ]
}

pub fn symmetries() -> Vec<Symmetry> {
    vec![
        Symmetry {
            name: "Splitting",
            latex: r"-2\pi^3 \text{ (}\Omega\text{)} \to -\pi^3 \text{ (}\Xi^*\text{)} + \pi^3 \text{ (}\Xi\text{)}",
        },
        Symmetry {
            name: "Migration",
            latex: r"6\pi^4 \text{ (decuplet)} \to 6\pi^3 \text{ (}\Sigma\text{ octet)}",
        },
        Symmetry {
            name: "Cross-reference",
            latex: r"\text{Proton uses } \frac{4}{5} \text{ from } 4\times 5; \quad \Omega \text{ uses } \frac{6}{5} \text{ from } 2\times 3",
        },
    ]
}
