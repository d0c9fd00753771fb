//! Turns assistant text into literal and tagged spans.
//!
//! Two passes: `**…**` pairs are split out first, then each resulting span is
//! run through the keyword rules in priority order. A rule only ever scans
//! chunks that are still plain text, so a character can carry at most one
//! tag and the earlier rule wins any overlap.
//!
//! Pairing is lazy and left to right. An unpaired `**` stays literal, and a
//! run of three stars keeps its extra star as text: `***Python***` renders
//! as an emphasized `*Python` followed by a plain `*`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").expect("emphasis pattern is valid"));

const EDUCATION_TERMS: &[&str] = &[
    "B.Tech",
    "M.Tech",
    "Bachelor of Technology",
    "Bachelor's",
    "Master's",
    "Computer Science",
    "Information Technology",
    "degree",
    "university",
    "college",
    "CGPA",
    "GPA",
    "HSC",
    "SSC",
];

const LANGUAGE_TERMS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Kotlin",
    "Swift",
    "Dart",
    "PHP",
    "Ruby",
    "Bash",
    "HTML",
    "CSS",
];

const TOOL_TERMS: &[&str] = &[
    "SQL",
    "MySQL",
    "PostgreSQL",
    "SQLite",
    "MongoDB",
    "Supabase",
    "Firebase",
    "React",
    "Node.js",
    "Vite",
    "Tailwind",
    "FastAPI",
    "Django",
    "Flask",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "AWS",
    "Linux",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "scikit-learn",
    "OpenRouter",
];

const CONCEPT_TERMS: &[&str] = &[
    "machine learning",
    "deep learning",
    "artificial intelligence",
    "AI",
    "natural language processing",
    "NLP",
    "LLM",
    "LLMs",
    "computer vision",
    "data structures",
    "algorithms",
    "data analysis",
    "REST API",
    "REST APIs",
    "API",
    "APIs",
    "full-stack",
    "full stack",
    "backend",
    "frontend",
    "web development",
    "DevOps",
    "cloud computing",
];

const SECTION_TERMS: &[&str] = &[
    "projects",
    "project",
    "skills",
    "experience",
    "education",
    "certifications",
    "achievements",
    "internship",
    "internships",
    "hobbies",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Language,
    Tool,
    Concept,
    Section,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Language => "language",
            Category::Tool => "tool",
            Category::Concept => "concept",
            Category::Section => "section",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Education => "tag tag-education",
            Category::Language => "tag tag-language",
            Category::Tool => "tag tag-tool",
            Category::Concept => "tag tag-concept",
            Category::Section => "tag tag-section",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Chunk {
    Text(String),
    Tag { text: String, category: Category },
}

impl Chunk {
    pub fn text(&self) -> &str {
        match self {
            Chunk::Text(text) | Chunk::Tag { text, .. } => text,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Chunk::Text(_) => None,
            Chunk::Tag { category, .. } => Some(*category),
        }
    }
}

/// One span from the emphasis pass, already tagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub emphasized: bool,
    pub chunks: Vec<Chunk>,
}

impl Segment {
    pub fn text(&self) -> String {
        self.chunks.iter().map(Chunk::text).collect()
    }
}

/// A keyword matcher and the category it assigns.
#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    matcher: Regex,
}

impl Rule {
    pub fn new(category: Category, matcher: Regex) -> Self {
        Self { category, matcher }
    }

    /// Case-insensitive, whole-word match on any of `terms`. Longer terms are
    /// tried first so "REST APIs" beats "API".
    pub fn from_terms(category: Category, terms: &[&str]) -> Result<Self, regex::Error> {
        let mut terms: Vec<&str> = terms
            .iter()
            .copied()
            .filter(|t| !t.is_empty())
            .collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
        Ok(Self { category, matcher })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    fn split(&self, text: String, out: &mut Vec<Chunk>) {
        let mut last = 0;
        for m in self.matcher.find_iter(&text) {
            if m.as_str().is_empty() {
                continue;
            }
            if m.start() > last {
                out.push(Chunk::Text(text[last..m.start()].to_string()));
            }
            out.push(Chunk::Tag {
                text: m.as_str().to_string(),
                category: self.category,
            });
            last = m.end();
        }
        if last == 0 {
            out.push(Chunk::Text(text));
        } else if last < text.len() {
            out.push(Chunk::Text(text[last..].to_string()));
        }
    }
}

/// Ordered keyword rules plus the two-pass renderer.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Vec<Rule>,
}

impl Default for Highlighter {
    fn default() -> Self {
        let tables = [
            (Category::Education, EDUCATION_TERMS),
            (Category::Language, LANGUAGE_TERMS),
            (Category::Tool, TOOL_TERMS),
            (Category::Concept, CONCEPT_TERMS),
            (Category::Section, SECTION_TERMS),
        ];
        let rules = tables
            .into_iter()
            .map(|(category, terms)| {
                Rule::from_terms(category, terms).expect("built-in keyword tables are valid")
            })
            .collect();
        Self { rules }
    }
}

impl Highlighter {
    /// Rules are applied in the order given.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn render(&self, text: &str) -> Vec<Segment> {
        split_emphasis(text)
            .into_iter()
            .map(|(emphasized, span)| Segment {
                emphasized,
                chunks: self.tag(span),
            })
            .collect()
    }

    /// Tag pass over a single span.
    pub fn tag(&self, span: &str) -> Vec<Chunk> {
        if span.is_empty() {
            return Vec::new();
        }
        let mut chunks = vec![Chunk::Text(span.to_string())];
        for rule in &self.rules {
            let mut next = Vec::with_capacity(chunks.len());
            for chunk in chunks {
                match chunk {
                    Chunk::Text(text) => rule.split(text, &mut next),
                    tagged => next.push(tagged),
                }
            }
            chunks = next;
        }
        chunks
    }
}

/// Splits on `**…**` pairs. An unpaired `**` is left in the plain text, and
/// the third star of `***x***` lands inside the emphasized span (`*x`) with
/// the last one trailing as plain text.
fn split_emphasis(text: &str) -> Vec<(bool, &str)> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push((false, &text[last..whole.start()]));
        }
        spans.push((true, inner.as_str()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push((false, &text[last..]));
    }
    spans
}

/// Concatenated chunk text of every segment, delimiters excluded.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// The question sent when a tagged token is activated.
pub fn follow_up_prompt(token: &str) -> String {
    format!("Tell me more about his {token}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> Chunk {
        Chunk::Text(s.to_string())
    }

    fn tag(s: &str, category: Category) -> Chunk {
        Chunk::Tag {
            text: s.to_string(),
            category,
        }
    }

    #[test]
    fn emphasized_language_and_plain_tool() {
        let segments = Highlighter::default().render("I know **Python** and SQL");
        assert_eq!(
            segments,
            vec![
                Segment {
                    emphasized: false,
                    chunks: vec![text("I know ")],
                },
                Segment {
                    emphasized: true,
                    chunks: vec![tag("Python", Category::Language)],
                },
                Segment {
                    emphasized: false,
                    chunks: vec![text(" and "), tag("SQL", Category::Tool)],
                },
            ]
        );
    }

    #[test]
    fn concatenation_reproduces_input() {
        let h = Highlighter::default();
        for input in [
            "",
            "nothing to see here",
            "He used Python, python and PYTHON with React and Node.js.",
            "His B.Tech in Computer Science covered machine learning and REST APIs.",
            "Ask about his projects, skills, hobbies or contact details.",
            "Trailing ** stays literal",
        ] {
            assert_eq!(plain_text(&h.render(input)), input, "input: {input:?}");
        }
    }

    #[test]
    fn emphasis_delimiters_are_consumed() {
        let segments = Highlighter::default().render("**Docker** and **Kubernetes**");
        assert_eq!(plain_text(&segments), "Docker and Kubernetes");
        assert!(segments[0].emphasized);
        assert!(!segments[1].emphasized);
        assert!(segments[2].emphasized);
    }

    #[test]
    fn matches_are_whole_word_and_case_insensitive() {
        let chunks = Highlighter::default().tag("javascript is not Java; mysql is not sql");
        let tags: Vec<_> = chunks
            .iter()
            .filter_map(|c| c.category().map(|cat| (c.text(), cat)))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("javascript", Category::Language),
                ("Java", Category::Language),
                ("mysql", Category::Tool),
                ("sql", Category::Tool),
            ]
        );
    }

    #[test]
    fn earlier_rule_wins_overlap() {
        let h = Highlighter::new(vec![
            Rule::from_terms(Category::Concept, &["machine learning"]).unwrap(),
            Rule::from_terms(Category::Section, &["learning", "machine"]).unwrap(),
        ]);
        assert_eq!(
            h.tag("machine learning and learning"),
            vec![
                tag("machine learning", Category::Concept),
                text(" and "),
                tag("learning", Category::Section),
            ]
        );

        let reversed = Highlighter::new(vec![
            Rule::from_terms(Category::Section, &["learning"]).unwrap(),
            Rule::from_terms(Category::Concept, &["machine learning"]).unwrap(),
        ]);
        assert_eq!(
            reversed.tag("machine learning"),
            vec![text("machine "), tag("learning", Category::Section)]
        );
    }

    #[test]
    fn longest_term_wins_within_a_rule() {
        let chunks = Highlighter::default().tag("He designs REST APIs");
        assert_eq!(chunks.last(), Some(&tag("REST APIs", Category::Concept)));
    }

    #[test]
    fn unpaired_delimiter_is_plain() {
        let segments = Highlighter::default().render("a ** b");
        assert_eq!(
            segments,
            vec![Segment {
                emphasized: false,
                chunks: vec![text("a ** b")],
            }]
        );
    }

    #[test]
    fn triple_stars_keep_one_star_each_side() {
        let segments = Highlighter::default().render("***Python***");
        assert_eq!(
            segments,
            vec![
                Segment {
                    emphasized: true,
                    chunks: vec![text("*"), tag("Python", Category::Language)],
                },
                Segment {
                    emphasized: false,
                    chunks: vec![text("*")],
                },
            ]
        );
        assert_eq!(plain_text(&segments), "*Python*");
    }

    fn tags(segments: &[Segment]) -> Vec<(&str, Category)> {
        segments
            .iter()
            .flat_map(|s| s.chunks.iter())
            .filter_map(|c| c.category().map(|category| (c.text(), category)))
            .collect()
    }

    #[test]
    fn overlapping_terms_tile_the_text() {
        let h = Highlighter::default();
        for input in [
            "**JavaScript** and Java power his REST APIs, plus a few LLMs calling an API.",
            "See his **projects**: one project used **REST API** design with JavaScript.",
            "**Java**Script is not JavaScript, and an LLM is not LLMs.",
            "Machine learning projects in Python, **TypeScript** and **Node.js**.",
            "**APIs** vs API vs **REST APIs** across every project and projects page.",
        ] {
            let segments = h.render(input);
            let stripped = input.replace("**", "");
            assert_eq!(plain_text(&segments), stripped, "input: {input:?}");

            let mut cursor = 0;
            for chunk in segments.iter().flat_map(|s| s.chunks.iter()) {
                assert!(!chunk.text().is_empty(), "empty chunk in {input:?}");
                assert!(
                    stripped[cursor..].starts_with(chunk.text()),
                    "chunk {chunk:?} out of place in {input:?}"
                );
                cursor += chunk.text().len();
            }
            assert_eq!(cursor, stripped.len());
        }

        let segments = h.render(
            "**JavaScript** and Java power his REST APIs, plus a few LLMs calling an API.",
        );
        assert_eq!(
            tags(&segments),
            vec![
                ("JavaScript", Category::Language),
                ("Java", Category::Language),
                ("REST APIs", Category::Concept),
                ("LLMs", Category::Concept),
                ("API", Category::Concept),
            ]
        );

        let segments = h.render(
            "See his **projects**: one project used **REST API** design with JavaScript.",
        );
        assert_eq!(
            tags(&segments),
            vec![
                ("projects", Category::Section),
                ("project", Category::Section),
                ("REST API", Category::Concept),
                ("JavaScript", Category::Language),
            ]
        );
    }

    #[test]
    fn follow_up_prompt_uses_token_text() {
        assert_eq!(follow_up_prompt("Python"), "Tell me more about his Python");
    }
}
