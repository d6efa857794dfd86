//!
//! Lexical categories and the HTML helpers that rule handlers use to style them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Style applied to the outer `<pre>` of an inline-styled sample
pub const SAMPLE_STYLE: &str = "background-color: #1f2937; color: #e5e7eb; padding: 1.1111111em 1.3333333em; line-height: 1.75; margin-bottom: 2em; border-radius: .375rem;";

/// Class applied to the outer `<pre>` of a class-styled sample
pub const SAMPLE_CLASS: &str = "formatted-sample";

/// The closed set of lexical categories a sample can be coloured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
    String,
    Data,
    Radix,
    Decorator,
    Function,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Comment,
        Category::String,
        Category::Data,
        Category::Radix,
        Category::Decorator,
        Category::Function,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Data => "data",
            Category::Radix => "radix",
            Category::Decorator => "decorator",
            Category::Function => "function",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| format!("Unknown category '{s}'"))
    }
}

/// One colour per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 6],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                "#33cc33".to_string(),
                "#b1cbff".to_string(),
                "#6699ff".to_string(),
                "#cc00cc".to_string(),
                "#cc3300".to_string(),
                "#ff9900".to_string(),
            ],
        }
    }
}

impl Palette {
    pub fn color(&self, category: Category) -> &str {
        &self.colors[category as usize]
    }

    pub fn set(&mut self, category: Category, color: impl Into<String>) {
        self.colors[category as usize] = color.into();
    }
}

/// How spans carry their category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StyleMode {
    /// `style="color:..."` attributes, self-contained markup
    #[default]
    Inline,
    /// `class='...'` attributes, for hosts shipping their own stylesheet
    Class,
}

/// HTML helpers shared by every rule handler of a pipeline
#[derive(Debug, Clone)]
pub struct Styler {
    mode: StyleMode,
    palette: Arc<Palette>,
    container_style: Arc<str>,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(StyleMode::default(), Palette::default())
    }
}

impl Styler {
    pub fn new(mode: StyleMode, palette: Palette) -> Self {
        Self {
            mode,
            palette: Arc::new(palette),
            container_style: Arc::from(SAMPLE_STYLE),
        }
    }

    pub fn with_container_style(mut self, style: &str) -> Self {
        self.container_style = Arc::from(style);
        self
    }

    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Wrap `inner` in a tag with a class attribute, optionally leaving it open
    pub fn tag_wrap(&self, inner: &str, tag: &str, class: &str, skip_closing: bool) -> String {
        let closing = if skip_closing { String::new() } else { format!("</{tag}>") };
        format!("<{tag} class='{class}'>{inner}{closing}")
    }

    pub fn span(&self, inner: &str, category: Category) -> String {
        format!("{}</span>", self.open_span(inner, category))
    }

    /// Open a span without closing it; a later rule supplies the `</span>`
    pub fn open_span(&self, inner: &str, category: Category) -> String {
        match self.mode {
            StyleMode::Inline => format!("<span style=\"color:{}\">{inner}", self.palette.color(category)),
            StyleMode::Class => self.tag_wrap(inner, "span", category.name(), true),
        }
    }

    pub fn close_span(&self, inner: &str) -> String {
        format!("{inner}</span>")
    }

    /// Wrap a whole formatted sample
    pub fn outer(&self, inner: &str) -> String {
        match self.mode {
            StyleMode::Inline => format!("<pre style=\"{}\"><code>{inner}</code></pre>", self.container_style),
            StyleMode::Class => format!("<pre class='{SAMPLE_CLASS}'><code>{inner}</code></pre>"),
        }
    }
}
