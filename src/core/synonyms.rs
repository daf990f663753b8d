//! Static domain thesauri for synonym-aware tag matching.
//!
//! Three families are kept: subject names, skill-level labels, and study-style
//! labels. All tables are lowercase and immutable after construction, so a
//! single index can be shared by reference across any number of concurrent
//! comparisons.

use std::collections::{HashMap, HashSet};

/// Subject thesaurus: canonical subject -> related terms, abbreviations,
/// and common variants.
const SUBJECT_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "mathematics",
        &[
            "math",
            "maths",
            "calculus",
            "algebra",
            "geometry",
            "trigonometry",
            "statistics",
            "stats",
            "arithmetic",
            "linear algebra",
        ],
    ),
    (
        "physics",
        &["mechanics", "thermodynamics", "electromagnetism", "quantum", "optics", "astrophysics"],
    ),
    (
        "chemistry",
        &["chem", "organic chemistry", "inorganic chemistry", "biochemistry"],
    ),
    (
        "biology",
        &["bio", "genetics", "ecology", "anatomy", "physiology", "microbiology"],
    ),
    (
        "computer science",
        &[
            "cs",
            "compsci",
            "programming",
            "coding",
            "software engineering",
            "algorithms",
            "data structures",
            "web development",
        ],
    ),
    (
        "data science",
        &["machine learning", "ml", "artificial intelligence", "ai", "data analysis"],
    ),
    (
        "english",
        &["literature", "writing", "composition", "grammar", "reading comprehension", "essay"],
    ),
    (
        "history",
        &["world history", "european history", "american history", "ancient history"],
    ),
    (
        "economics",
        &["econ", "microeconomics", "macroeconomics", "finance"],
    ),
    (
        "psychology",
        &["psych", "cognitive science", "behavioral science"],
    ),
    ("philosophy", &["ethics", "logic", "epistemology"]),
    ("geography", &["earth science", "geology", "cartography"]),
    (
        "political science",
        &["politics", "government", "civics", "international relations"],
    ),
    ("sociology", &["social science", "anthropology"]),
    ("spanish", &["espanol", "castilian"]),
    ("french", &["francais"]),
    ("german", &["deutsch"]),
    ("mandarin", &["chinese", "putonghua"]),
    ("japanese", &["nihongo"]),
    ("art", &["drawing", "painting", "design", "fine arts", "art history"]),
    ("music", &["music theory", "piano", "guitar", "instruments", "singing"]),
    (
        "engineering",
        &["mechanical engineering", "electrical engineering", "civil engineering"],
    ),
    ("medicine", &["medical", "pre-med", "nursing", "pharmacology"]),
    ("law", &["legal studies", "jurisprudence"]),
    ("accounting", &["bookkeeping", "auditing"]),
    ("marketing", &["advertising", "branding"]),
    ("business", &["management", "entrepreneurship", "business administration"]),
];

/// Skill-level thesaurus.
const SKILL_LEVEL_SYNONYMS: &[(&str, &[&str])] = &[
    ("beginner", &["newbie", "novice", "starter", "basic", "entry level", "just starting"]),
    ("intermediate", &["mid level", "moderate", "average", "some experience"]),
    ("advanced", &["proficient", "experienced", "upper level", "strong"]),
    ("expert", &["master", "professional", "pro", "specialist"]),
];

/// Study-style thesaurus.
const STUDY_STYLE_SYNONYMS: &[(&str, &[&str])] = &[
    ("visual", &["diagrams", "charts", "videos", "mind maps", "watching"]),
    ("auditory", &["listening", "lectures", "podcasts", "discussion"]),
    ("kinesthetic", &["hands on", "practice", "doing", "interactive"]),
    ("reading_writing", &["reading", "writing", "notes", "note taking", "textbooks"]),
    ("collaborative", &["group", "group study", "team", "together"]),
    ("independent", &["alone", "self study", "self paced"]),
    ("solo", &["individual", "by myself"]),
    ("mixed", &["flexible", "varied", "any", "all"]),
];

fn build_table(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(canonical, synonyms)| {
            (
                (*canonical).to_string(),
                synonyms.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}

/// Immutable synonym index over the three domain thesauri.
///
/// Expansion scans ALL three families: a term that resembles entries in more
/// than one family pulls in every family it touches. That cross-category
/// bleed is carried over from the production tables as observed; whether the
/// original authors intended expansion to stay within one family is an open
/// question, so the behavior is kept rather than narrowed.
#[derive(Debug, Clone)]
pub struct SynonymIndex {
    subjects: HashMap<String, Vec<String>>,
    skill_levels: HashMap<String, Vec<String>>,
    study_styles: HashMap<String, Vec<String>>,
}

impl SynonymIndex {
    /// Build an index from caller-supplied tables. Keys and synonyms are
    /// normalized to lowercase/trimmed form here so lookups never have to.
    pub fn new(
        subjects: HashMap<String, Vec<String>>,
        skill_levels: HashMap<String, Vec<String>>,
        study_styles: HashMap<String, Vec<String>>,
    ) -> Self {
        fn normalize(table: HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
            table
                .into_iter()
                .map(|(key, synonyms)| {
                    (
                        key.trim().to_lowercase(),
                        synonyms
                            .into_iter()
                            .map(|s| s.trim().to_lowercase())
                            .filter(|s| !s.is_empty())
                            .collect(),
                    )
                })
                .collect()
        }

        Self {
            subjects: normalize(subjects),
            skill_levels: normalize(skill_levels),
            study_styles: normalize(study_styles),
        }
    }

    /// Build the index from the built-in production tables.
    pub fn with_defaults() -> Self {
        Self {
            subjects: build_table(SUBJECT_SYNONYMS),
            skill_levels: build_table(SKILL_LEVEL_SYNONYMS),
            study_styles: build_table(STUDY_STYLE_SYNONYMS),
        }
    }

    fn families(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.subjects
            .iter()
            .chain(self.skill_levels.iter())
            .chain(self.study_styles.iter())
    }

    /// Expand a free-text term into the union of every synonym family it
    /// touches, plus the (normalized) term itself.
    ///
    /// A term touches a family when it equals, contains, or is contained by
    /// the canonical key or any synonym in that family.
    pub fn expand(&self, term: &str) -> HashSet<String> {
        let normalized = term.trim().to_lowercase();
        let mut expanded = HashSet::new();
        if normalized.is_empty() {
            return expanded;
        }
        expanded.insert(normalized.clone());

        for (canonical, synonyms) in self.families() {
            let hit = related(&normalized, canonical)
                || synonyms.iter().any(|s| related(&normalized, s));
            if hit {
                expanded.insert(canonical.clone());
                expanded.extend(synonyms.iter().cloned());
            }
        }

        expanded
    }

    /// Union of per-term expansions.
    pub fn expand_many<I, S>(&self, terms: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = HashSet::new();
        for term in terms {
            expanded.extend(self.expand(term.as_ref()));
        }
        expanded
    }
}

impl Default for SynonymIndex {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Bidirectional equality-or-containment test used for family hits.
#[inline]
fn related(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}
